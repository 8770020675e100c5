pub mod furigana;
pub mod settings;
pub mod unicode;
