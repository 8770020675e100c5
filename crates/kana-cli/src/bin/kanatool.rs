use clap::{Parser, Subcommand};

use kana_cli::commands::{align_ops, config_ops, replay_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Reading alignment diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Align an input against a reading, starting from an empty map
    Align {
        /// Mixed kanji/kana input
        input: String,
        /// Katakana reading of the input
        reading: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay a TOML transcript of input changes through a session
    Replay {
        /// Path to the transcript TOML file
        transcript_file: String,
        /// Settings TOML to use instead of the defaults
        #[arg(long)]
        settings: Option<String>,
        /// Output one JSON object per step
        #[arg(long)]
        json: bool,
    },

    /// Inspect settings TOML
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the embedded default settings
    Export,
    /// Validate a settings file
    Validate {
        /// Path to the settings TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Align {
            input,
            reading,
            json,
        } => align_ops::align_cmd(&input, &reading, json),
        Command::Replay {
            transcript_file,
            settings,
            json,
        } => replay_ops::replay_cmd(&transcript_file, settings.as_deref(), json),
        Command::Settings { action } => match action {
            SettingsAction::Export => config_ops::settings_export(),
            SettingsAction::Validate { file } => config_ops::settings_validate(&file),
        },
    }
}
