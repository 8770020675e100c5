//! Recorded edit sessions for `kanatool replay`.
//!
//! ```toml
//! [[step]]
//! input = "かんじ"
//!
//! [[step]]
//! input = "漢"
//! reading = "カンジ"   # overwrite the reading field before this step
//! ```

use std::fs;
use std::path::Path;

use kana_core::furigana::FuriganaMap;
use kana_session::{InputResponse, KanaSession};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("cannot read transcript: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("transcript has no steps")]
    Empty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub input: String,
    /// Reading field contents to force before the input change.
    #[serde(default)]
    pub reading: Option<String>,
}

/// Outcome of one replayed step.
#[derive(Debug, Clone, Serialize)]
pub struct StepResult {
    pub input: String,
    pub reading: String,
    pub rebuilt: bool,
    pub map: FuriganaMap,
}

pub fn parse_transcript(toml_str: &str) -> Result<Transcript, TranscriptError> {
    let t: Transcript =
        toml::from_str(toml_str).map_err(|e| TranscriptError::Parse(e.to_string()))?;
    if t.steps.is_empty() {
        return Err(TranscriptError::Empty);
    }
    Ok(t)
}

pub fn load_transcript(path: &Path) -> Result<Transcript, TranscriptError> {
    let content = fs::read_to_string(path)?;
    parse_transcript(&content)
}

/// Run every step through `session` with an in-memory reading field.
pub fn replay(session: &mut KanaSession, transcript: &Transcript) -> Vec<StepResult> {
    let mut field = String::new();
    transcript
        .steps
        .iter()
        .map(|step| {
            if let Some(reading) = &step.reading {
                field = reading.clone();
            }
            let InputResponse { reading, rebuilt } =
                session.handle_input_change(&step.input, &mut field);
            StepResult {
                input: step.input.clone(),
                reading,
                rebuilt,
                map: (*session.furigana_map()).clone(),
            }
        })
        .collect()
}
