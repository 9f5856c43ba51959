use std::fmt;

use crate::error::ScriptError;

/// A contiguous, inclusive run of frames kept by the script
///
/// Built from the `(start, length)` pair of an `AddRange` statement. The end
/// frame is always `start + length - 1`, so a selection covers at least one
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    start_frame: u64,
    end_frame: u64,
}

impl Selection {
    /// Create a selection from a start frame and a run length
    pub fn new(start_frame: u64, length: u64) -> Result<Self, ScriptError> {
        if length == 0 {
            return Err(ScriptError::EmptyRange { start: start_frame });
        }
        let end_frame = start_frame
            .checked_add(length - 1)
            .ok_or(ScriptError::RangeOverflow { start: start_frame, length })?;
        Ok(Self { start_frame, end_frame })
    }

    pub fn start_frame(&self) -> u64 {
        self.start_frame
    }

    pub fn end_frame(&self) -> u64 {
        self.end_frame
    }

    /// Number of frames covered, endpoints included
    pub fn length(&self) -> u64 {
        self.end_frame - self.start_frame + 1
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Frames {} - {})", self.start_frame, self.end_frame)
    }
}

/// Total frame count over a run of selections
pub fn total_frames(selections: &[Selection]) -> Result<u64, ScriptError> {
    selections
        .iter()
        .map(Selection::length)
        .try_fold(0u64, u64::checked_add)
        .ok_or(ScriptError::TotalOverflow { count: selections.len() })
}
