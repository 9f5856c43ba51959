//! # Report Module
//!
//! Renders selections as an aligned timecode report: one line per range, a
//! dashed rule, the total length and the frame rate used.

pub mod formatter;

pub use formatter::{render_report, Report, ReportLine, ReportOptions};
