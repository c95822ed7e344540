// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert die Feedback-Traits aus morse-core
// für die ESP32-C6 Peripherie (GPIO + LEDC).

pub mod buzzer;
pub mod led;

pub use buzzer::{BuzzerInitError, LedcBuzzer};
pub use led::GpioLed;
