use std::fmt::Write;

use crate::config::OutputConfig;
use crate::error::ScriptError;
use crate::script::{total_frames, Selection};
use crate::timecode::{frame_to_timecode, selection_duration, FrameRate};

/// Layout switches for a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Width of the dashed rule above the total line
    pub separator_width: usize,
    /// Finish with an `fps = ...` line
    pub include_fps: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            separator_width: 80,
            include_fps: true,
        }
    }
}

impl From<&OutputConfig> for ReportOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            separator_width: config.separator_width,
            include_fps: config.include_fps,
        }
    }
}

/// One rendered selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub start_tc: String,
    pub end_tc: String,
    pub frames_label: String,
    pub length_tc: String,
    pub length: u64,
}

/// Timecode report for one script
///
/// Derived entirely from the selections and the frame rate; rendering the
/// same input twice gives identical text.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    lines: Vec<ReportLine>,
    total_frames: u64,
    fps: FrameRate,
}

impl Report {
    /// Build the report for `selections`, keeping their order
    ///
    /// Fails when the frame total does not fit in 64 bits.
    pub fn new(selections: &[Selection], fps: FrameRate) -> Result<Self, ScriptError> {
        let total_frames = total_frames(selections)?;
        let lines = selections
            .iter()
            .map(|selection| {
                let (length_tc, length) = selection_duration(selection, fps);
                ReportLine {
                    start_tc: frame_to_timecode(selection.start_frame(), fps),
                    end_tc: frame_to_timecode(selection.end_frame(), fps),
                    frames_label: selection.to_string(),
                    length_tc,
                    length,
                }
            })
            .collect();

        Ok(Self {
            lines,
            total_frames,
            fps,
        })
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    pub fn total_timecode(&self) -> String {
        frame_to_timecode(self.total_frames, self.fps)
    }

    /// Widest `(Frames a - b)` label, 0 when there are no selections
    fn label_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.frames_label.len())
            .max()
            .unwrap_or(0)
    }

    /// Render the report; every line ends with a newline
    pub fn render(&self, options: &ReportOptions) -> String {
        let width = self.label_width();
        let mut out = String::new();

        // Writing into a String cannot fail
        for line in &self.lines {
            let _ = writeln!(
                out,
                "{} - {} {:<width$}   Length: {} ({} frames)",
                line.start_tc,
                line.end_tc,
                line.frames_label,
                line.length_tc,
                line.length,
                width = width,
            );
        }

        let _ = writeln!(out, "{}", "-".repeat(options.separator_width));
        let _ = writeln!(
            out,
            "Total Length: {} ({} frames)",
            self.total_timecode(),
            self.total_frames
        );
        if options.include_fps {
            let _ = writeln!(out, "fps = {}", self.fps);
        }

        out
    }
}

/// Render selections straight to report text
pub fn render_report(
    selections: &[Selection],
    fps: FrameRate,
    options: &ReportOptions,
) -> Result<String, ScriptError> {
    Ok(Report::new(selections, fps)?.render(options))
}
