//! # vdscript-info
//!
//! Turn VirtualDub / VirtualDub2 selection scripts into human-readable
//! timecode reports.
//!
//! A `.vdscript` file keeps frames with statements such as
//! `VirtualDub.subset.AddRange(446,444);` (start frame, run length). Given the
//! video's frame rate this library lists every kept range as timecodes, aligns
//! the columns and totals the duration.
//!
//! ## Quick Start
//!
//! ```rust
//! use vdscript_info::{render_report, extract_selections, FrameRate, ReportOptions};
//!
//! let script = "VirtualDub.subset.AddRange(446,444);\nVirtualDub.subset.AddRange(1397,194);\n";
//! let selections = extract_selections(script).unwrap();
//! let fps: FrameRate = "23.976".parse().unwrap();
//!
//! let report = render_report(&selections, fps, &ReportOptions::default()).unwrap();
//! assert!(report.contains("Total Length: 00:00:26.609 (638 frames)"));
//! ```
//!
//! ## Architecture
//!
//! - [`script`] - Reading scripts and extracting `AddRange` selections
//! - [`timecode`] - Frame rate validation and frame → timecode conversion
//! - [`report`] - Aligned report rendering
//! - [`batch`] - Script discovery and per-file processing
//! - [`config`] - Configuration management

pub mod batch;
pub mod config;
pub mod error;
pub mod report;
pub mod script;
pub mod timecode;

// Re-export commonly used types for convenience
pub use crate::{
    batch::{BatchProcessor, BatchSummary},
    config::Config,
    error::{Result, VdscriptError},
    report::{render_report, Report, ReportOptions},
    script::{extract_selections, Selection},
    timecode::{frame_to_timecode, selection_duration, FrameRate},
};
