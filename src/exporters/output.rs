use crate::config;
use crate::error::ExportError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Rendered export: owned bytes that can be read back or persisted to a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    data: Vec<u8>,
}

impl Output {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn to_text(&self) -> Result<&str, ExportError> {
        Ok(std::str::from_utf8(&self.data)?)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes the bytes to `path`, creating or truncating it.
    ///
    /// `mode` sets the permission bits of a newly created file on Unix and is
    /// ignored elsewhere.
    pub fn write(&self, path: impl AsRef<Path>, mode: u32) -> Result<(), ExportError> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(mode);
        }
        #[cfg(not(unix))]
        let _ = mode;

        let mut file = options.open(path)?;
        file.write_all(&self.data)?;
        file.flush()?;
        debug!("Wrote {} bytes to {}", self.data.len(), path.display());
        Ok(())
    }

    /// Writes the bytes using the configured file mode.
    pub fn write_default(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        self.write(path, config::current().file_mode)
    }
}

impl From<Vec<u8>> for Output {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}
