//! Settings store - a line-oriented `key=value` file
//!
//! The file holds one setting per line:
//!
//! ```text
//! MatrixWidth=10
//! MatrixHeigth=10
//! NbCandies=5
//! NbMaxTimes=20
//! ```
//!
//! The key spelling (including `MatrixHeigth`) is the on-disk contract and is
//! kept as-is so existing files keep working. Lines that are not known
//! settings are preserved verbatim when the file is rewritten.
//!
//! A missing file is not an error: [`SettingsStore::load_or_create`] writes the
//! defaults and carries on.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info, warn};

use tui_crush_types::{
    GameConfig, DEFAULT_CANDIES, DEFAULT_HEIGHT, DEFAULT_MAX_MOVES, DEFAULT_WIDTH, MAX_CANDIES,
    MAX_HEIGHT, MAX_MOVES, MAX_WIDTH, MIN_CANDIES, MIN_GRID_HEIGHT, MIN_GRID_WIDTH, MIN_MOVES,
};

/// Default settings file name, relative to the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "config.cfg";

/// Errors that can occur while reading or editing settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown setting '{0}'")]
    UnknownKey(String),

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{key} must be between {min} and {max} (got {value})")]
    OutOfRange {
        key: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

/// The settings the game reads at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Width,
    Height,
    Candies,
    MaxMoves,
}

impl SettingKey {
    pub const ALL: [SettingKey; 4] = [
        SettingKey::Width,
        SettingKey::Height,
        SettingKey::Candies,
        SettingKey::MaxMoves,
    ];

    /// Key as written in the settings file.
    pub fn file_key(&self) -> &'static str {
        match self {
            SettingKey::Width => "MatrixWidth",
            SettingKey::Height => "MatrixHeigth",
            SettingKey::Candies => "NbCandies",
            SettingKey::MaxMoves => "NbMaxTimes",
        }
    }

    /// Short name used by the in-game settings screen.
    pub fn name(&self) -> &'static str {
        match self {
            SettingKey::Width => "width",
            SettingKey::Height => "height",
            SettingKey::Candies => "candies",
            SettingKey::MaxMoves => "moves",
        }
    }

    pub fn from_file_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.file_key() == s)
    }

    /// Parse the short name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|k| k.name() == s)
    }

    /// Inclusive legal range.
    pub fn range(&self) -> (u32, u32) {
        match self {
            SettingKey::Width => (MIN_GRID_WIDTH as u32, MAX_WIDTH as u32),
            SettingKey::Height => (MIN_GRID_HEIGHT as u32, MAX_HEIGHT as u32),
            SettingKey::Candies => (MIN_CANDIES as u32, MAX_CANDIES as u32),
            SettingKey::MaxMoves => (MIN_MOVES, MAX_MOVES),
        }
    }

    pub fn default_value(&self) -> u32 {
        match self {
            SettingKey::Width => DEFAULT_WIDTH as u32,
            SettingKey::Height => DEFAULT_HEIGHT as u32,
            SettingKey::Candies => DEFAULT_CANDIES as u32,
            SettingKey::MaxMoves => DEFAULT_MAX_MOVES,
        }
    }

    /// Check `value` against the legal range.
    pub fn validate(&self, value: u32) -> Result<u32, SettingsError> {
        let (min, max) = self.range();
        if value < min || value > max {
            return Err(SettingsError::OutOfRange {
                key: self.name(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }
}

impl FromStr for SettingKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SettingsError::UnknownKey(s.to_owned()))
    }
}

/// Split a `key=value` line at the first `=`.
fn split_line(line: &str) -> Option<(&str, &str)> {
    line.split_once('=').map(|(k, v)| (k.trim(), v.trim()))
}

/// File contents holding every default value.
pub fn default_contents() -> String {
    SettingKey::ALL
        .iter()
        .map(|k| format!("{}={}\n", k.file_key(), k.default_value()))
        .collect()
}

/// An editable view of the settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsStore {
    path: PathBuf,
    lines: Vec<String>,
}

impl SettingsStore {
    /// Parse settings text that belongs to `path` (nothing is read from disk).
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Read an existing settings file.
    pub fn open(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_text(path, &text))
    }

    /// Read the settings file, writing the defaults first if it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            debug!(path = %path.display(), "loading settings");
            Self::open(path)
        } else {
            info!(path = %path.display(), "settings file not found, writing defaults");
            let store = Self::from_text(path, &default_contents());
            store.save()?;
            Ok(store)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw value of a setting, if present and numeric.
    pub fn get(&self, key: SettingKey) -> Option<u32> {
        self.lines
            .iter()
            .filter_map(|l| split_line(l))
            .find(|(k, _)| SettingKey::from_file_key(k) == Some(key))
            .and_then(|(_, v)| v.parse().ok())
    }

    /// Value of a setting, falling back to the default when missing or out of range.
    pub fn value(&self, key: SettingKey) -> u32 {
        match self.get(key).map(|v| key.validate(v)) {
            Some(Ok(v)) => v,
            Some(Err(err)) => {
                warn!(%err, "using default");
                key.default_value()
            }
            None => key.default_value(),
        }
    }

    /// Game configuration built from the current values.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            width: self.value(SettingKey::Width) as u8,
            height: self.value(SettingKey::Height) as u8,
            candy_count: self.value(SettingKey::Candies) as u8,
            max_moves: self.value(SettingKey::MaxMoves),
        }
    }

    /// Change one setting in memory. The line is replaced in place, or appended.
    pub fn set(&mut self, key: SettingKey, value: u32) -> Result<(), SettingsError> {
        let value = key.validate(value)?;
        let line = format!("{}={}", key.file_key(), value);

        let existing = self.lines.iter_mut().find(|l| {
            split_line(l).and_then(|(k, _)| SettingKey::from_file_key(k)) == Some(key)
        });
        match existing {
            Some(l) => *l = line,
            None => self.lines.push(line),
        }
        Ok(())
    }

    /// Change one setting and rewrite the file.
    pub fn update(&mut self, key: SettingKey, value: u32) -> Result<(), SettingsError> {
        self.set(key, value)?;
        self.save()?;
        info!(key = key.file_key(), value, "setting changed");
        Ok(())
    }

    /// Settings file contents.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Write the file, replacing previous contents.
    pub fn save(&self) -> Result<(), SettingsError> {
        fs::write(&self.path, self.to_text()).map_err(|e| SettingsError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
