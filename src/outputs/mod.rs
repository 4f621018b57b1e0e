pub mod indicator;
pub mod recording;
pub mod speech;

pub use indicator::{ConsoleIndicator, Indicator, LightState};
pub use recording::{Observation, RecordingIndicator, RecordingSpeech, Transcript};
pub use speech::{CommandSpeech, ConsoleSpeech, SpeechSink};
