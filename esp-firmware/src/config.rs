// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

use morse_core::DecoderTimings;

// ============================================================================
// Pin-Belegung
// ============================================================================

/// GPIO-Pin für den Lidschlag-Sensor (OUT, high = Auge geschlossen)
pub const SENSOR_GPIO_PIN: u8 = 2;

/// GPIO-Pin für den Buzzer (LEDC PWM)
pub const BUZZER_GPIO_PIN: u8 = 3;

/// GPIO-Pin für die Feedback-LED (active high)
pub const LED_GPIO_PIN: u8 = 4;

// ============================================================================
// Decoder Konfiguration
// ============================================================================

/// Polling-Intervall für den Sensor in Millisekunden
/// 1 ms entspricht dem loop() Takt eines Mikrocontrollers ohne Delay
pub const POLL_INTERVAL_MS: u64 = 1;

/// Timing-Konstanten (Dot/Dash-Schwelle, Buchstaben-/Wortpause, Feedback)
/// Fest eingebaut, keine Kalibrierung zur Laufzeit
pub const DECODER_TIMINGS: DecoderTimings = DecoderTimings::DEFAULT;

// ============================================================================
// Buzzer Konfiguration
// ============================================================================

/// Ton-Frequenz des Buzzers in Hz
pub const BUZZER_FREQUENCY_HZ: u32 = 1000;

/// Duty Cycle während der Ton läuft (Prozent)
/// 50% = Rechteck mit maximaler Lautstärke
pub const BUZZER_DUTY_PCT: u8 = 50;

// ============================================================================
// Text-Stream Konfiguration
// ============================================================================

/// Kapazität des Text-Channels (Decoder-Task → Console-Task)
pub const TEXT_CHANNEL_CAPACITY: usize = 16;

/// Begrüßung auf der seriellen Konsole beim Start
pub const BANNER: [&str; 3] = [
    "=== Morse Code Eye Blink System ===",
    "Short blink = DOT, Long blink = DASH",
    "Look here for decoded letters/words:",
];
