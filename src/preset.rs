use crate::planner::{self, ChunkPlan};
use serde::Serialize;

pub const DURATION_PRESETS: &[i64] = &[4, 8, 12, 15, 30, 60];
pub const MULTI_SEGMENT_PRESETS: &[i64] = &[15, 30, 60];

const SINGLE_SEGMENT_LIMIT: i64 = 12;

pub fn is_multi_segment(seconds: i64) -> bool {
    seconds > SINGLE_SEGMENT_LIMIT && MULTI_SEGMENT_PRESETS.contains(&seconds)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub seconds: i64,
    pub multi_segment: bool,
    pub plan: ChunkPlan,
}

pub fn presets() -> impl Iterator<Item = Preset> {
    DURATION_PRESETS.iter().map(|&seconds| Preset {
        seconds,
        multi_segment: is_multi_segment(seconds),
        plan: planner::plan(seconds),
    })
}
