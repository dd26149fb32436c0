use crate::error::{Error, Result};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

pub const MAX_TARGET_SECS: i64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(into = "u32")]
pub enum SegmentLength {
    Four,
    Eight,
    Twelve,
}

impl SegmentLength {
    pub const fn secs(self) -> u32 {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
            Self::Twelve => 12,
        }
    }

    fn covering(secs: i64) -> Self {
        if secs <= 4 {
            Self::Four
        } else if secs <= 8 {
            Self::Eight
        } else {
            Self::Twelve
        }
    }
}

impl From<SegmentLength> for u32 {
    fn from(length: SegmentLength) -> Self {
        length.secs()
    }
}

impl fmt::Display for SegmentLength {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}s", self.secs())
    }
}

const FULL_CHUNK: SegmentLength = SegmentLength::Twelve;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    full_chunks: u64,
    tail: Option<SegmentLength>,
    total_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub index: u64,
    pub start_secs: u64,
    pub duration: SegmentLength,
}

impl Segment {
    pub fn end_secs(&self) -> u64 {
        self.start_secs + u64::from(self.duration.secs())
    }
}

impl ChunkPlan {
    fn new(full_chunks: u64, tail: Option<SegmentLength>) -> Self {
        let total_seconds = full_chunks * u64::from(FULL_CHUNK.secs())
            + tail.map_or(0, |length| u64::from(length.secs()));
        Self {
            full_chunks,
            tail,
            total_seconds,
        }
    }

    pub fn chunks(&self) -> impl DoubleEndedIterator<Item = SegmentLength> {
        (0..self.full_chunks)
            .map(|_| FULL_CHUNK)
            .chain(self.tail)
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn len(&self) -> u64 {
        self.full_chunks + u64::from(self.tail.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_multi_chunk(&self) -> bool {
        self.len() > 1
    }

    pub fn padding_secs(&self, target_secs: i64) -> u64 {
        self.total_seconds
            .saturating_sub(target_secs.max(0).unsigned_abs())
    }

    // Only the tail can be shorter than a full chunk, so offsets are index * 12.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = Segment> {
        let full = (0..self.full_chunks).map(|index| (index, FULL_CHUNK));
        let tail = self.tail.map(|length| (self.full_chunks, length));

        full.chain(tail).map(|(index, duration)| Segment {
            index,
            start_secs: index * u64::from(FULL_CHUNK.secs()),
            duration,
        })
    }
}

struct ChunkSeq<'a>(&'a ChunkPlan);

impl Serialize for ChunkSeq<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.chunks())
    }
}

impl Serialize for ChunkPlan {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ChunkPlan", 2)?;
        state.serialize_field("chunks", &ChunkSeq(self))?;
        state.serialize_field("totalSeconds", &self.total_seconds)?;
        state.end()
    }
}

/// Splits `target_secs` into generator-sized chunks.
///
/// Full 12 second chunks come first and the remainder is rounded up to the
/// next supported length, so the total can overshoot the target by up to
/// 3 seconds. Zero and negative targets plan a single 4 second chunk; use
/// [`plan_checked`] to reject those instead.
pub fn plan(target_secs: i64) -> ChunkPlan {
    let longest = i64::from(FULL_CHUNK.secs());

    if target_secs <= longest {
        return ChunkPlan::new(0, Some(SegmentLength::covering(target_secs)));
    }

    let full_chunks = (target_secs / longest).unsigned_abs();
    let remainder = target_secs % longest;
    let tail = (remainder > 0).then(|| SegmentLength::covering(remainder));

    ChunkPlan::new(full_chunks, tail)
}

pub fn plan_checked(target_secs: i64) -> Result<ChunkPlan> {
    if target_secs <= 0 {
        return Err(Error::InvalidDuration(target_secs));
    }

    if target_secs > MAX_TARGET_SECS {
        return Err(Error::DurationTooLong {
            secs: target_secs,
            max: MAX_TARGET_SECS,
        });
    }

    Ok(plan(target_secs))
}
