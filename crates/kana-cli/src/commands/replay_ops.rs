use std::fs;
use std::path::Path;
use std::process;

use kana_core::settings::{parse_settings_toml, Settings};
use kana_session::KanaSession;

use crate::transcript::{load_transcript, replay};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn replay_cmd(transcript_file: &str, settings_file: Option<&str>, json: bool) {
    let settings = match settings_file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(parse_settings_toml(&content), "Error in settings: {}")
        }
        None => Settings::default(),
    };
    let transcript = die!(
        load_transcript(Path::new(transcript_file)),
        "Error loading transcript: {}"
    );

    let mut session = KanaSession::with_settings(&settings);
    let results = replay(&mut session, &transcript);

    if json {
        for r in &results {
            let line = die!(serde_json::to_string(r), "Error serializing step: {}");
            println!("{line}");
        }
        return;
    }

    for (i, r) in results.iter().enumerate() {
        let marker = if r.rebuilt { "*" } else { " " };
        println!("#{:>2}{} {} => {}", i + 1, marker, r.input, r.reading);
        if r.rebuilt {
            for (key, value) in r.map.iter() {
                println!("      {key} -> {value}");
            }
        }
    }
}
