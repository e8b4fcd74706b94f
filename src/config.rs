//! Smart-home settings, shared by injection.
//!
//! There is exactly one settings object per home because the program builds
//! exactly one and hands the same [`SharedConfig`] to every device. Nothing
//! global is involved: two homes in one process are two calls to
//! [`SmartHomeConfig::shared`].
//!
//! ```rust
//! use motif::config::{SmartDevice, SmartHomeConfig};
//!
//! let config = SmartHomeConfig::new().shared();
//! let thermostat = SmartDevice::new("Thermostat", &config);
//! let lights = SmartDevice::new("Living Room Lights", &config);
//!
//! let mut out = Vec::new();
//! thermostat.update_setting("temperature", 24, &mut out).unwrap();
//! assert_eq!(lights.setting("temperature"), Some(24.into()));
//! ```
//!
//! Settings can be seeded from TOML. Top-level keys become settings:
//!
//! ```toml
//! temperature = 22
//! lights = "dim"
//! ```

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::Result;

/// Handle every consumer of a home's settings holds.
pub type SharedConfig = Rc<RefCell<SmartHomeConfig>>;

/// Named settings, kept in the order they were first set.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SmartHomeConfig {
    settings: Map<String, Value>,
}

impl SmartHomeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), settings = config.settings.len(), "settings loaded");
        Ok(config)
    }

    /// Wraps `self` for sharing between devices.
    pub fn shared(self) -> SharedConfig {
        Rc::new(RefCell::new(self))
    }

    pub fn set_setting(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.settings.insert(key.into(), value.into());
    }

    pub fn get_setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    pub fn settings(&self) -> &Map<String, Value> {
        &self.settings
    }
}

/// Renders the settings as a compact JSON object.
impl fmt::Display for SmartHomeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// A named device reading and writing its home's settings.
#[derive(Clone, Debug)]
pub struct SmartDevice {
    name: String,
    config: SharedConfig,
}

impl SmartDevice {
    pub fn new(name: impl Into<String>, config: &SharedConfig) -> Self {
        Self { name: name.into(), config: Rc::clone(config) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn setting(&self, key: &str) -> Option<Value> {
        self.config.borrow().get_setting(key).cloned()
    }

    pub fn display_settings(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "[{}] Current Settings: {}", self.name, self.config.borrow())?;
        Ok(())
    }

    pub fn update_setting(
        &self,
        key: &str,
        value: impl Into<Value>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let value = value.into();
        writeln!(out, "[{}] Updating {key} to {}", self.name, Plain(&value))?;
        debug!(device = %self.name, key, "setting updated");
        self.config.borrow_mut().set_setting(key, value);
        Ok(())
    }
}

/// Strings without their JSON quotes, everything else as JSON.
struct Plain<'a>(&'a Value);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => fmt::Display::fmt(other, f),
        }
    }
}
