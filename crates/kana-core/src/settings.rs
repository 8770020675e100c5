//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::unicode::{hiragana_to_katakana, katakana_to_hiragana};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

/// Script the reading field is committed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadingScript {
    #[default]
    Katakana,
    Hiragana,
}

impl ReadingScript {
    /// Bring a reading from the field into the map's script (katakana).
    pub fn to_internal(self, reading: &str) -> String {
        match self {
            Self::Katakana => reading.to_string(),
            Self::Hiragana => hiragana_to_katakana(reading),
        }
    }

    /// Convert a rendered katakana reading into the committed script.
    pub fn to_field(self, rendered: String) -> String {
        match self {
            Self::Katakana => rendered,
            Self::Hiragana => katakana_to_hiragana(&rendered),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub reading: ReadingSettings,
    pub composition: CompositionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReadingSettings {
    script: String,
    #[serde(skip)]
    script_parsed: ReadingScript,
}

impl ReadingSettings {
    pub fn script(&self) -> ReadingScript {
        self.script_parsed
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompositionSettings {
    pub track_segments: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reading: ReadingSettings {
                script: "katakana".to_string(),
                script_parsed: ReadingScript::Katakana,
            },
            composition: CompositionSettings {
                track_segments: true,
            },
        }
    }
}

impl Settings {
    /// Same as the defaults but committing readings in `script`.
    pub fn with_script(mut self, script: ReadingScript) -> Self {
        self.reading.script = match script {
            ReadingScript::Katakana => "katakana",
            ReadingScript::Hiragana => "hiragana",
        }
        .to_string();
        self.reading.script_parsed = script;
        self
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.reading.script_parsed = parse_script(&s.reading.script)?;
    Ok(s)
}

fn parse_script(raw: &str) -> Result<ReadingScript, SettingsError> {
    match raw {
        "katakana" => Ok(ReadingScript::Katakana),
        "hiragana" => Ok(ReadingScript::Hiragana),
        other => Err(SettingsError::InvalidValue {
            field: "reading.script".to_string(),
            reason: format!("expected \"katakana\" or \"hiragana\", got {other:?}"),
        }),
    }
}
