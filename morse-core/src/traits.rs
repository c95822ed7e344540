//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für die Feedback-Ausgänge
//! ohne konkrete Implementierung.

/// Fehler-Typ für Feedback-Ausgänge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackError {
    LedFailed,
    BuzzerFailed,
}

/// Trait für die Feedback-LED (digital an/aus)
///
/// # Implementierungen
/// - **Production:** GpioLed (ESP32 GPIO Output)
/// - **Testing:** MockLed (in-memory Mock)
pub trait SignalLed {
    /// LED einschalten
    ///
    /// # Fehlerbehandlung
    /// Gibt `FeedbackError::LedFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_on(&mut self) -> Result<(), FeedbackError>;

    /// LED ausschalten
    fn set_off(&mut self) -> Result<(), FeedbackError>;
}

/// Trait für den Buzzer (Ton mit fester Frequenz)
///
/// # Implementierungen
/// - **Production:** LedcBuzzer (ESP32 LEDC PWM)
/// - **Testing:** MockBuzzer (in-memory Mock)
pub trait ToneBuzzer {
    /// Ton starten
    ///
    /// # Fehlerbehandlung
    /// Gibt `FeedbackError::BuzzerFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn start_tone(&mut self) -> Result<(), FeedbackError>;

    /// Ton stoppen
    fn stop_tone(&mut self) -> Result<(), FeedbackError>;
}

#[cfg(feature = "defmt")]
impl defmt::Format for FeedbackError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FeedbackError::LedFailed => defmt::write!(fmt, "LedFailed"),
            FeedbackError::BuzzerFailed => defmt::write!(fmt, "BuzzerFailed"),
        }
    }
}
