//! # Timecode Module
//!
//! Frame-rate validation and the frame → `HH:MM:SS.mmm` conversion used by
//! every report line.
//!
//! ```rust
//! use vdscript_info::timecode::{frame_to_timecode, FrameRate};
//!
//! let fps: FrameRate = "24".parse().unwrap();
//! assert_eq!(frame_to_timecode(36, fps), "00:00:01.500");
//! ```

pub mod converter;
pub mod types;

pub use converter::{frame_to_timecode, selection_duration};
pub use types::{FrameRate, Timecode};
