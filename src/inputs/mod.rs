pub mod recognizer;

pub use recognizer::{ConsoleRecognizer, Recognizer, ScriptedRecognizer};
