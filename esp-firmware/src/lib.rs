// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von morse-core
pub use morse_core::{
    BlinkDecoder, DecodeEvent, FeedbackError, Mark, MorseStation, SignalLed, TextEvent,
    ToneBuzzer,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

use crate::config::TEXT_CHANNEL_CAPACITY;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Sender<'static, NoopRawMutex, TextEvent, 16>
// Nutze:  TextEventSender

/// Channel für den dekodierten Text (Decoder Task → Console Task)
/// - TEXT_CHANNEL_CAPACITY: gepufferte Buchstaben/Zeilenenden
pub type TextEventChannel = Channel<NoopRawMutex, TextEvent, TEXT_CHANNEL_CAPACITY>;

/// Sender für Text-Events (Decoder Task sendet)
pub type TextEventSender = Sender<'static, NoopRawMutex, TextEvent, TEXT_CHANNEL_CAPACITY>;

/// Receiver für Text-Events (Console Task empfängt)
pub type TextEventReceiver = Receiver<'static, NoopRawMutex, TextEvent, TEXT_CHANNEL_CAPACITY>;
