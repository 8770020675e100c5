pub mod commands;
pub mod transcript;
