pub mod config;
pub mod error;
pub mod planner;
pub mod preset;

use config::Config;
use error::{Error, Result};
use planner::{ChunkPlan, Segment};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_STEM: &str = "clip";
pub const DEFAULT_EXTENSION: &str = "mp4";

pub struct PlanOptions {
    pub target_secs: i64,
    pub output: Option<PathBuf>,
    pub extension: String,
}

impl PlanOptions {
    pub fn new(target_secs: i64) -> Self {
        Self {
            target_secs,
            output: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentJob {
    #[serde(flatten)]
    pub segment: Segment,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReport {
    pub target_seconds: i64,
    #[serde(flatten)]
    pub plan: ChunkPlan,
    pub padding_seconds: u64,
    pub multi_segment: bool,
    pub segments: Vec<SegmentJob>,
}

fn output_stem(output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.with_extension(""),
        None => PathBuf::from(DEFAULT_STEM),
    }
}

fn segment_output_path(stem: &Path, index: u64, count: u64, extension: &str) -> PathBuf {
    if count == 1 {
        stem.with_extension(extension)
    } else {
        let name = format!(
            "{}_{:03}.{}",
            stem.file_name().unwrap_or_default().to_string_lossy(),
            index + 1,
            extension,
        );
        stem.with_file_name(name)
    }
}

pub fn prepare(
    options: &PlanOptions,
    config: &Config,
    mut on_progress: impl FnMut(&str),
) -> Result<PlanReport> {
    if !config.features.sora_enabled {
        return Err(Error::FeatureDisabled("sora"));
    }

    let target_secs = options.target_secs;
    let plan = planner::plan_checked(target_secs)?;
    let padding_seconds = plan.padding_secs(target_secs);
    let multi_segment = preset::is_multi_segment(target_secs);

    debug!(
        target_secs,
        chunks = plan.len(),
        total_secs = plan.total_seconds(),
        "planned segments"
    );
    if padding_seconds > 0 {
        info!(target_secs, padding_seconds, "final segment rounded up");
    }

    on_progress(&format!(
        "plan: {}s requested, {} segment(s), {}s total",
        target_secs,
        plan.len(),
        plan.total_seconds(),
    ));

    if multi_segment {
        on_progress("multi-segment generation: segments are produced in order and joined");
    }

    let stem = output_stem(options.output.as_deref());
    let extension = options.extension.trim_start_matches('.');
    let count = plan.len();
    let mut segments = Vec::new();

    for segment in plan.segments() {
        let output = segment_output_path(&stem, segment.index, count, extension);
        on_progress(&format!(
            "  segment {}/{}: {}s - {}s ({}) -> {}",
            segment.index + 1,
            count,
            segment.start_secs,
            segment.end_secs(),
            segment.duration,
            output.display(),
        ));
        segments.push(SegmentJob { segment, output });
    }

    Ok(PlanReport {
        target_seconds: target_secs,
        plan,
        padding_seconds,
        multi_segment,
        segments,
    })
}
