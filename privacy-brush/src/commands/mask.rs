// privacy-brush/src/commands/mask.rs
//! The masking command: resolves the configuration, builds the engine and
//! runs one of the three input modes.
//!
//! * `--input-file`: the whole file is masked in one pass.
//! * `--output-file` alone: all of stdin is read, masked in one pass and
//!   written to the file.
//! * neither: stdin is streamed to stdout chunk by chunk.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use privacy_brush_core::decode::decode_lossy;
use privacy_brush_core::stream::pipe_with;
use privacy_brush_core::{
    BrushError, EngineOptions, LogObserver, MaskConfig, MaskObserver, MaskReport, MaskStream,
    Masker, MaskingEngine,
};

use crate::cli::Cli;
use crate::commands::{info_msg, prompt_msg, warn_msg};
use crate::ui::redaction_summary;

/// Options for `run_mask`, split out of `Cli` so they can be built in tests.
#[derive(Debug, Clone, Default)]
pub struct MaskOptions {
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub summary: bool,
    pub quiet: bool,
}

impl From<&Cli> for MaskOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            input_file: cli.input_file.clone(),
            output_file: cli.output_file.clone(),
            summary: cli.summary,
            quiet: cli.quiet,
        }
    }
}

/// Loads the config file (explicit `--config`, else the default location,
/// else built-in defaults) and applies the command-line overrides on top.
pub fn resolve_config(cli: &Cli) -> Result<MaskConfig> {
    let mut config = MaskConfig::discover(cli.config.as_deref())?;

    if let Some(mask) = &cli.mask {
        config.mask_char = mask.clone();
    }
    if let Some(preserve) = cli.preserve_first_part() {
        config.preserve_first_part = preserve;
    }
    config.set_active_patterns(&cli.enable, &cli.disable);
    config.custom_patterns.extend(cli.patterns.iter().cloned());

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Builds an engine that reports to `observer`.
pub fn build_engine(
    config: MaskConfig,
    observer: Arc<dyn MaskObserver>,
) -> Result<MaskingEngine, BrushError> {
    MaskingEngine::with_options(config, EngineOptions::with_observer(observer))
}

/// Entry point used by `main`.
pub async fn run_mask_command(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let observer: Arc<dyn MaskObserver> = Arc::new(LogObserver::from_env(cli.verbose && !cli.quiet));
    let engine = build_engine(config, observer.clone())?;
    info!("Active patterns: {}", engine.pattern_names().join(", "));
    run_mask(&engine, observer, &MaskOptions::from(cli)).await
}

pub async fn run_mask(
    engine: &MaskingEngine,
    observer: Arc<dyn MaskObserver>,
    opts: &MaskOptions,
) -> Result<()> {
    match (&opts.input_file, &opts.output_file) {
        (Some(input), output) => {
            let bytes = tokio::fs::read(input)
                .await
                .with_context(|| format!("Failed to read input file {}", input.display()))?;
            let report = mask_buffer(engine, &bytes, output.as_deref(), opts).await?;
            finish_buffer_mode(&report, opts)
        }
        (None, Some(output)) => {
            let mut bytes = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut bytes)
                .await
                .context("Failed to read from stdin")?;
            let report = mask_buffer(engine, &bytes, Some(output.as_path()), opts).await?;
            finish_buffer_mode(&report, opts)
        }
        (None, None) => {
            if opts.summary {
                warn_msg("--summary needs --input-file or --output-file; streaming without it.");
            }
            if io::stdin().is_terminal() && !opts.quiet {
                prompt_msg("Reading from stdin. Press Ctrl-D when done.");
            }
            let stream = MaskStream::with_observer(engine, observer);
            let stats = pipe_with(stream, tokio::io::stdin(), tokio::io::stdout())
                .await
                .context("Failed to stream stdin to stdout")?;
            debug!(
                "Streamed {} chunk(s), {} byte(s) in, {} byte(s) out",
                stats.chunks, stats.bytes_in, stats.bytes_out
            );
            Ok(())
        }
    }
}

/// Masks a complete buffer once and writes it to `output` or stdout.
async fn mask_buffer(
    engine: &MaskingEngine,
    bytes: &[u8],
    output: Option<&Path>,
    opts: &MaskOptions,
) -> Result<MaskReport> {
    let text = decode_lossy(bytes);
    let (masked, report) = engine.mask_with_report(&text);
    debug!(
        "Content masked. Original length: {}, masked length: {}",
        text.len(),
        masked.len()
    );

    match output {
        Some(path) => {
            tokio::fs::write(path, masked.as_bytes())
                .await
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            if !opts.quiet {
                info_msg(format!("Masked output written to {}", path.display()));
            }
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(masked.as_bytes()).await?;
            stdout.flush().await?;
        }
    }
    Ok(report)
}

fn finish_buffer_mode(report: &MaskReport, opts: &MaskOptions) -> Result<()> {
    if opts.summary {
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(report, &mut io::stderr(), stderr_supports_color)?;
    }
    Ok(())
}
