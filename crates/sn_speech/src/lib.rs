pub mod speech;
pub mod translate;

pub use speech::{GoogleSynthesizer, SpeechSynthesizer};
pub use translate::{translate_or_fallback, GoogleTranslator, Translator, TRANSLATION_FALLBACK};
