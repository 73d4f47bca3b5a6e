//! Global roomcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::booking_source::BookingFile;
use crate::error::{RoomCalError, RoomCalResult};
use crate::locale::Locale;

static CONFIG_DIR_NAME: &str = "roomcal";
static BOOKINGS_FILE_NAME: &str = "bookings.toml";
static ENV_PREFIX: &str = "ROOMCAL";

/// Configuration at ~/.config/roomcal/config.toml
///
/// Every key can be overridden by a `ROOMCAL_`-prefixed environment
/// variable, e.g. `ROOMCAL_LOCALE=nb`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RoomcalConfig {
    /// Where bookings are read from. Defaults to bookings.toml next to
    /// the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookings_file: Option<PathBuf>,

    #[serde(default)]
    pub locale: Locale,

    /// Resource shown when no filter is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_resource: Option<String>,
}

impl RoomcalConfig {
    pub fn config_dir() -> RoomCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RoomCalError::Config("Could not determine config directory".into()))?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    pub fn config_path() -> RoomCalResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load ~/.config/roomcal/config.toml, creating a commented default
    /// file on first use.
    pub fn load() -> RoomCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit file, which may be absent.
    pub fn load_from(path: &Path) -> RoomCalResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: &Path, environment: Environment) -> RoomCalResult<Self> {
        let config: RoomcalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(environment)
            .build()
            .map_err(|e| RoomCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| RoomCalError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), locale = %config.locale, "loaded config");
        Ok(config)
    }

    /// The bookings file with `~` expanded.
    pub fn bookings_path(&self) -> RoomCalResult<PathBuf> {
        match &self.bookings_file {
            Some(path) => Ok(expand_tilde(path)),
            None => Ok(Self::config_dir()?.join(BOOKINGS_FILE_NAME)),
        }
    }

    pub fn booking_source(&self) -> RoomCalResult<BookingFile> {
        Ok(BookingFile::new(self.bookings_path()?))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> RoomCalResult<()> {
        let contents = format!(
            "\
# roomcal configuration

# Where bookings are read from (TOML, or JSON with a .json extension):
# bookings_file = \"~/.config/{CONFIG_DIR_NAME}/{BOOKINGS_FILE_NAME}\"

# Month and weekday names: \"en\" or \"nb\"
# locale = \"en\"

# Only show bookings for this resource unless --resource is given:
# default_resource = \"Fellesrommet\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                RoomCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| RoomCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

pub fn expand_tilde(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
