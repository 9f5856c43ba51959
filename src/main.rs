use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

use vdscript_info::{
    batch::discover_scripts,
    config::{Config, FailurePolicy},
    error::FrameRateError,
    BatchProcessor, FrameRate, VdscriptError,
};

#[derive(Parser)]
#[command(
    name = "vdscript-info",
    version,
    about = "Turn VirtualDub selection scripts into timecode reports",
    long_about = "Reads the subset.AddRange statements of VirtualDub / VirtualDub2 .vdscript files and writes a <name>_info.txt report per script listing every kept range as timecodes, its length, and the total length. All scripts in a run must share the same frame rate."
)]
struct Cli {
    /// Script files or directories to scan (defaults to the current directory)
    inputs: Vec<PathBuf>,

    /// Frame rate shared by every script (e.g. 23.976, 25)
    #[arg(short, long)]
    fps: Option<FrameRate>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write reports into this directory instead of beside each script
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print reports to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Stop at the first script that fails
    #[arg(long)]
    abort_on_error: bool,

    /// Skip the frame rate confirmation when prompting
    #[arg(short, long)]
    yes: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    debug!("Starting vdscript-info v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path).map_err(friendly)?
        }
        None => {
            debug!("Using default configuration");
            Config::default()
        }
    };

    if let Some(dir) = cli.output_dir {
        config.output.directory = Some(dir);
    }
    if cli.abort_on_error {
        config.batch.on_error = FailurePolicy::Abort;
    }
    config.validate().map_err(friendly)?;

    // Find the scripts before asking for a frame rate
    let scripts = discover_scripts(&config.input, &cli.inputs).map_err(friendly)?;

    let fps = resolve_fps(cli.fps, &config, cli.yes).map_err(friendly)?;
    let processor = BatchProcessor::new(config, fps);

    let summary = if cli.stdout {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let summary = processor.run_to_writer(&scripts, &mut out).map_err(friendly)?;
        out.flush()?;
        summary
    } else {
        processor.run(&scripts).map_err(friendly)?
    };

    for (script, reason) in &summary.failed {
        eprintln!("failed: {} ({})", script.display(), reason);
    }
    summary.ensure_success().map_err(friendly)?;
    Ok(())
}

/// Frame rate from the command line, the config file, or an interactive prompt
fn resolve_fps(
    cli_fps: Option<FrameRate>,
    config: &Config,
    skip_confirmation: bool,
) -> vdscript_info::Result<FrameRate> {
    if let Some(fps) = cli_fps.or(config.fps) {
        return Ok(fps);
    }

    if !io::stdin().is_terminal() {
        return Err(FrameRateError::Missing.into());
    }

    // Prompts go to stderr so they never mix with reports on stdout
    ask_fps(&mut io::stdin().lock(), &mut io::stderr(), !skip_confirmation)
}

/// Ask for the frame rate and, optionally, confirm it applies to every script
fn ask_fps<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    confirm: bool,
) -> vdscript_info::Result<FrameRate> {
    let answer = prompt(input, output, "Enter the frame rate (fps): ")?;
    let fps: FrameRate = answer.parse()?;

    if confirm {
        prompt(
            input,
            output,
            "WARNING: Are you sure that all frame rates match? (Press Enter to continue, or Ctrl+C to cancel)",
        )?;
    }
    Ok(fps)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn friendly(e: VdscriptError) -> anyhow::Error {
    anyhow!(e.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_fps_writes_prompts_to_given_output() {
        let mut input = io::Cursor::new("23.976\n\n");
        let mut output = Vec::new();

        let fps = ask_fps(&mut input, &mut output, true).unwrap();
        assert_eq!(fps.as_f64(), 23.976);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Enter the frame rate (fps): "));
        assert!(shown.contains("WARNING: Are you sure that all frame rates match?"));
    }

    #[test]
    fn test_ask_fps_rejects_bad_answer() {
        let mut input = io::Cursor::new("zero\n");
        let mut output = Vec::new();

        let err = ask_fps(&mut input, &mut output, false).unwrap_err();
        assert!(matches!(err, VdscriptError::FrameRate(FrameRateError::NotANumber { .. })));
    }

    #[test]
    fn test_config_fps_skips_prompt() {
        let mut config = Config::default();
        config.fps = Some(FrameRate::new(25.0).unwrap());
        assert_eq!(resolve_fps(None, &config, true).unwrap().as_f64(), 25.0);
    }
}
