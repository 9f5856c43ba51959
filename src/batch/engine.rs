use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::{
    config::{Config, FailurePolicy, InputConfig},
    error::{BatchError, Result},
    report::{Report, ReportOptions},
    script::ScriptSource,
    timecode::FrameRate,
};

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Scripts that produced a report
    pub processed: usize,
    /// Report files written to disk
    pub written: Vec<PathBuf>,
    /// Scripts that failed, with the reason
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.processed + self.failed.len()
    }

    /// Turn a run with any failed script into an error
    pub fn ensure_success(&self) -> Result<()> {
        if self.failed.is_empty() {
            Ok(())
        } else {
            Err(BatchError::FilesFailed {
                failed: self.failed.len(),
                total: self.total(),
            }
            .into())
        }
    }
}

/// Converts a set of selection scripts into timecode reports
///
/// Every script in a batch shares one frame rate. Scripts are handled one at
/// a time in sorted path order:
/// 1. Discovery - expand directories into their script files
/// 2. Extraction - read each script and collect its ranges
/// 3. Rendering - build the aligned report
/// 4. Output - write `<stem><suffix>` or stream the text to a writer
pub struct BatchProcessor {
    config: Config,
    fps: FrameRate,
}

impl BatchProcessor {
    /// Create a processor for the given configuration and frame rate
    pub fn new(config: Config, fps: FrameRate) -> Self {
        Self { config, fps }
    }

    /// Resolve inputs to a sorted list of script files, see [`discover_scripts`]
    pub fn discover(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        discover_scripts(&self.config.input, inputs)
    }

    /// Report path for a script: its file stem plus the configured suffix
    pub fn output_path_for(&self, script: &Path) -> PathBuf {
        let stem = script
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!("{}{}", stem, self.config.output.suffix);

        match &self.config.output.directory {
            Some(dir) => dir.join(file_name),
            None => script.with_file_name(file_name),
        }
    }

    /// Read a script and render its report without writing anything
    pub fn render_file(&self, script: &Path) -> Result<String> {
        let source = ScriptSource::load(script)?;
        let selections = source.selections()?;
        if selections.is_empty() {
            warn!("No AddRange statements in {:?}", script);
        }

        let report = Report::new(&selections, self.fps)?;
        debug!(
            "{:?}: {} selection(s), {} frames",
            script,
            report.lines().len(),
            report.total_frames()
        );
        Ok(report.render(&ReportOptions::from(&self.config.output)))
    }

    /// Convert one script and write its report file
    pub fn process_file(&self, script: &Path) -> Result<PathBuf> {
        info!("Processing {}...", display_name(script));

        let text = self.render_file(script)?;
        let output = self.output_path_for(script);

        if let Some(dir) = &self.config.output.directory {
            std::fs::create_dir_all(dir).map_err(|e| BatchError::WriteFailed {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        std::fs::write(&output, text).map_err(|e| BatchError::WriteFailed {
            path: output.display().to_string(),
            reason: e.to_string(),
        })?;

        info!("   Report saved to {:?}", output);
        Ok(output)
    }

    /// Convert every script found in `inputs`, writing one report file each
    ///
    /// A script whose report path was already claimed by an earlier script in
    /// the batch fails with `WriteFailed`; the earlier report is kept.
    pub fn run(&self, inputs: &[PathBuf]) -> Result<BatchSummary> {
        let scripts = self.discover(inputs)?;
        let mut claimed = HashSet::new();

        let summary = self.run_with(scripts, |script| {
            let output = self.output_path_for(script);
            if !claimed.insert(output.clone()) {
                return Err(BatchError::WriteFailed {
                    path: output.display().to_string(),
                    reason: "report path already used by another script in this batch".to_string(),
                }
                .into());
            }
            self.process_file(script).map(Some)
        })?;

        info!(
            "Batch processing complete! {} report(s) written with '{}' suffix.",
            summary.written.len(),
            self.config.output.suffix
        );
        Ok(summary)
    }

    /// Convert every script found in `inputs`, streaming the reports to `out`
    ///
    /// With more than one script each report is preceded by a `==> path <==`
    /// header line. A failed write to `out` ends the batch.
    pub fn run_to_writer<W: Write>(&self, inputs: &[PathBuf], out: &mut W) -> Result<BatchSummary> {
        let scripts = self.discover(inputs)?;
        let multiple = scripts.len() > 1;

        self.run_with(scripts, |script| {
            let text = self.render_file(script)?;
            let streamed = if multiple {
                writeln!(out, "==> {} <==", script.display())
            } else {
                Ok(())
            };
            streamed
                .and_then(|_| out.write_all(text.as_bytes()))
                .map_err(|e| BatchError::OutputFailed { reason: e.to_string() })?;
            Ok(None)
        })
    }

    fn run_with<F>(&self, scripts: Vec<PathBuf>, mut convert: F) -> Result<BatchSummary>
    where
        F: FnMut(&Path) -> Result<Option<PathBuf>>,
    {
        info!("Converting {} script(s) at {} fps", scripts.len(), self.fps);

        let mut summary = BatchSummary::default();
        for script in scripts {
            match convert(&script) {
                Ok(written) => {
                    summary.processed += 1;
                    summary.written.extend(written);
                }
                Err(e) if e.is_per_file() && self.config.batch.on_error == FailurePolicy::Skip => {
                    warn!("Skipping {}: {}", display_name(&script), e.user_message());
                    summary.failed.push((script, e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}

/// Resolve inputs to a sorted list of script files
///
/// Files are taken as given. Directories contribute their direct children
/// whose extension matches the configured one, ignoring case. No inputs
/// means the current directory.
pub fn discover_scripts(config: &InputConfig, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let default_input = [PathBuf::from(".")];
    let inputs = if inputs.is_empty() { &default_input[..] } else { inputs };
    let extension = config.normalized_extension();

    let mut scripts = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in std::fs::read_dir(input)? {
                let path = entry?.path();
                if path.is_file() && has_extension(&path, extension) {
                    scripts.push(path);
                }
            }
        } else if input.is_file() {
            scripts.push(input.clone());
        } else {
            return Err(BatchError::InputNotFound {
                path: input.display().to_string(),
            }
            .into());
        }
    }

    scripts.sort();
    scripts.dedup();

    if scripts.is_empty() {
        let searched: Vec<String> = inputs.iter().map(|p| p.display().to_string()).collect();
        return Err(BatchError::NoScriptsFound {
            path: searched.join(", "),
            extension: extension.to_string(),
        }
        .into());
    }

    debug!("Discovered {} script(s)", scripts.len());
    Ok(scripts)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
