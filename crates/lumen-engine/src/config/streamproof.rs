use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name of the settings file, resolved next to the executable.
pub const CONFIG_FILE_NAME: &str = "lumen.ini";

const KEY: &str = "streamproof";

/// Whether the overlay window is excluded from screen and video capture.
///
/// Backed by a plain-text file holding `streamproof=0` or `streamproof=1`.
/// Every change is written straight back to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamProofConfig {
    path: PathBuf,
    enabled: bool,
}

impl StreamProofConfig {
    /// Path of the settings file beside the running executable.
    pub fn default_path() -> Result<PathBuf> {
        let exe = std::env::current_exe().context("failed to resolve executable path")?;
        let dir = exe
            .parent()
            .context("executable path has no parent directory")?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Loads the settings file beside the running executable.
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path()?)
    }

    /// Loads settings from `path`. A missing file means "disabled".
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let enabled = match fs::read_to_string(&path) {
            Ok(text) => parse_enabled(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no settings at {}, stream-proof off", path.display());
                false
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        Ok(Self { path, enabled })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets the flag and rewrites the file.
    pub fn set_enabled(&mut self, enabled: bool) -> Result<()> {
        self.enabled = enabled;
        self.save()
    }

    /// Flips the flag, rewrites the file and returns the new state.
    pub fn toggle(&mut self) -> Result<bool> {
        self.set_enabled(!self.enabled)?;
        Ok(self.enabled)
    }

    /// Writes the current flag to the settings file.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, render(self.enabled))
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::debug!("stream-proof={} saved to {}", self.enabled, self.path.display());
        Ok(())
    }
}

/// Last line starting with exactly `streamproof=` wins; only the value `1` enables.
///
/// No whitespace is tolerated around the key or the value.
fn parse_enabled(text: &str) -> bool {
    text.lines()
        .rev()
        .find_map(|line| line.strip_prefix(KEY)?.strip_prefix('='))
        .is_some_and(|value| value == "1")
}

fn render(enabled: bool) -> String {
    format!("{KEY}={}\n", if enabled { '1' } else { '0' })
}
