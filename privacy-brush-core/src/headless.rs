// File: privacy-brush-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot masking of a whole string or file.
//!
//! These call `mask` once over the complete text, so unlike the stream adapter
//! they never miss a value that happens to straddle a read boundary.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::Path;

use crate::config::MaskConfig;
use crate::decode::decode_lossy;
use crate::engine::Masker;
use crate::engines::regex_engine::MaskingEngine;
use crate::errors::BrushError;

/// Builds an engine from `config` and masks `content` with it.
pub fn mask_string(config: MaskConfig, content: &str) -> Result<String, BrushError> {
    let engine = MaskingEngine::new(config)?;
    Ok(engine.mask(content))
}

/// Reads `input`, decodes it lossily and returns the masked text.
pub fn mask_file<M: Masker + ?Sized>(masker: &M, input: &Path) -> Result<String> {
    debug!("Reading input file {}", input.display());
    let bytes = std::fs::read(input)
        .with_context(|| format!("Failed to read input file {}", input.display()))?;
    Ok(masker.mask(&decode_lossy(&bytes)))
}

/// Like `mask_file`, and also writes the result to `output`.
pub fn mask_file_to<M: Masker + ?Sized>(masker: &M, input: &Path, output: &Path) -> Result<String> {
    let masked = mask_file(masker, input)?;
    std::fs::write(output, &masked)
        .with_context(|| format!("Failed to write output file {}", output.display()))?;
    info!("Masked file saved to: {}", output.display());
    Ok(masked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_mask_string_default_config() -> Result<()> {
        let masked = mask_string(
            MaskConfig::default(),
            "Microsoft Windows [Version 10.0.12345.6785]",
        )?;
        assert_eq!(masked, "Microsoft Windows [Version 10.█.█████.████]");
        Ok(())
    }

    #[test]
    fn test_mask_file_and_write_output() -> Result<()> {
        let mut input = NamedTempFile::new()?;
        input.write_all(b"server 172.16.0.10\n")?;
        let output = NamedTempFile::new()?;

        let engine = MaskingEngine::new(MaskConfig::default())?;
        let masked = mask_file_to(&engine, input.path(), output.path())?;

        assert_eq!(masked, "server ███.██.█.██\n");
        assert_eq!(std::fs::read_to_string(output.path())?, masked);
        Ok(())
    }

    #[test]
    fn test_mask_file_missing_input() {
        let engine = MaskingEngine::new(MaskConfig::default()).unwrap();
        let err = mask_file(&engine, Path::new("/definitely/not/here.log")).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }
}
