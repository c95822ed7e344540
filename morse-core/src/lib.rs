//! Morse Core - Platform-agnostic Decoder Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert die Blink-Decoder-State-Machine, die Morse-Tabelle,
//! Traits für LED/Buzzer und das Feedback-Timing.

#![no_std]

pub mod decoder;
pub mod feedback;
pub mod logic;
pub mod table;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use decoder::{BlinkDecoder, BlinkState};
pub use feedback::{MorseStation, StepReport, play_feedback};
pub use logic::{classify_blink, elapsed_ms};
pub use table::{MORSE_TABLE, decode, encode};
pub use traits::{FeedbackError, SignalLed, ToneBuzzer};
pub use types::{DecodeEvent, DecoderTimings, Mark, Message, Symbol, TextEvent, TickEvents};
