use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Where the contract text comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// Pick the source from the `FILE` argument and `--text` flag.
    ///
    /// With neither given, standard input is used only when it is piped.
    pub fn resolve(file: Option<&Path>, text: Option<&str>) -> Result<Self> {
        match (file, text) {
            (_, Some(text)) => Ok(InputSource::Text(text.to_string())),
            (Some(path), None) if path == Path::new("-") => Ok(InputSource::Stdin),
            (Some(path), None) => Ok(InputSource::File(path.to_path_buf())),
            (None, None) if !std::io::stdin().is_terminal() => Ok(InputSource::Stdin),
            (None, None) => bail!(
                "No contract text given: pass a FILE, use --text, or pipe text on standard input"
            ),
        }
    }

    /// Read the full text.
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read standard input")?;
                Ok(buf)
            }
        }
    }

    /// Short human-readable label for report headers.
    pub fn label(&self) -> String {
        match self {
            InputSource::Text(_) => "inline text".to_string(),
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "standard input".to_string(),
        }
    }
}
