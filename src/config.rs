use anyhow::Error;
use confique::Config;
use serde::Deserializer;
use serde::de::{self, Visitor};
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

pub const DEFAULT_PREVIEW_ROWS: usize = 10;
pub const DEFAULT_JSON_INDENT: usize = 2;
pub const DEFAULT_FILE_MODE: u32 = 0o644;

#[derive(Debug, Clone, PartialEq, Eq, Config)]
pub struct TabMatrixConfig {
    /// Rows shown by `peek()` and by `preview(0)`
    #[config(env = "TABMATRIX_PREVIEW_ROWS", default = 10)]
    pub preview_rows: usize,

    /// Indentation width of pretty JSON exports
    #[config(env = "TABMATRIX_JSON_INDENT", default = 2)]
    pub json_indent: usize,

    /// Permission bits used by `Output::write_default`, written in octal ("644")
    #[config(
        env = "TABMATRIX_FILE_MODE",
        default = "644",
        deserialize_with = deserialize_file_mode
    )]
    pub file_mode: u32,
}

struct FileModeVisitor;

impl Visitor<'_> for FileModeVisitor {
    type Value = u32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an octal permission string such as \"644\" or an integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u32, E> {
        let digits = value.trim();
        let digits = digits.strip_prefix("0o").unwrap_or(digits);
        match u32::from_str_radix(digits, 8) {
            Ok(mode) if mode <= 0o7777 => Ok(mode),
            _ => Err(E::invalid_value(de::Unexpected::Str(value), &self)),
        }
    }

    // TOML integers already carry their base (`file_mode = 0o644`)
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
        match u32::try_from(value) {
            Ok(mode) if mode <= 0o7777 => Ok(mode),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(value), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u32, E> {
        match u64::try_from(value) {
            Ok(value) => self.visit_u64(value),
            Err(_) => Err(E::invalid_value(de::Unexpected::Signed(value), &self)),
        }
    }
}

fn deserialize_file_mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    deserializer.deserialize_any(FileModeVisitor)
}

impl TabMatrixConfig {
    pub fn load() -> Result<TabMatrixConfig, Error> {
        let c = TabMatrixConfig::builder()
            .env()
            .file("tabmatrix.toml")
            .load()?;

        Ok(c)
    }
}

impl Default for TabMatrixConfig {
    fn default() -> Self {
        Self {
            preview_rows: DEFAULT_PREVIEW_ROWS,
            json_indent: DEFAULT_JSON_INDENT,
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

pub(crate) static TABMATRIX_CONFIG: OnceLock<Arc<TabMatrixConfig>> = OnceLock::new();
static DEFAULT_CONFIG: OnceLock<Arc<TabMatrixConfig>> = OnceLock::new();

pub fn set(config: Arc<TabMatrixConfig>) -> Result<(), Error> {
    match TABMATRIX_CONFIG.set(config) {
        Ok(_) => Ok(()),
        Err(e) => Err(Error::msg(format!("Failed to set configuration: {:?}", e))),
    }
}

pub fn get() -> Result<Arc<TabMatrixConfig>, Error> {
    TABMATRIX_CONFIG.get().cloned().ok_or_else(|| {
        Error::msg(
            "Configuration not loaded. Please call load_configuration() before using the configuration",
        )
    })
}

/// The installed configuration, or the built-in defaults when none was loaded.
pub fn current() -> Arc<TabMatrixConfig> {
    match TABMATRIX_CONFIG.get() {
        Some(config) => config.clone(),
        None => DEFAULT_CONFIG
            .get_or_init(|| Arc::new(TabMatrixConfig::default()))
            .clone(),
    }
}

pub fn load_configuration() -> Result<(), Error> {
    // Check if the configuration has already been loaded
    if TABMATRIX_CONFIG.get().is_some() {
        return Ok(());
    }

    let config = TabMatrixConfig::load()?;
    TABMATRIX_CONFIG.get_or_init(|| Arc::new(config));

    Ok(())
}

static TEST_CONFIG_INIT: Mutex<()> = Mutex::new(());

/// Loads the configuration exactly once per test run.
#[allow(dead_code)] // Used by integration tests
pub fn load_configuration_for_tests() -> Result<(), Error> {
    let _guard = TEST_CONFIG_INIT
        .lock()
        .map_err(|e| Error::msg(format!("Configuration lock poisoned: {e}")))?;
    load_configuration()
}
