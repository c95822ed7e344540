// Feedback-LED über einen einfachen GPIO-Ausgang
//
// Implementiert den SignalLed Trait aus morse-core,
// damit die Station Hardware und Mock gleich behandelt.

use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

use morse_core::{FeedbackError, SignalLed};

/// Real Hardware LED (active high)
pub struct GpioLed<'a> {
    pin: Output<'a>,
}

impl<'a> GpioLed<'a> {
    /// Erstellt eine GpioLed, die LED ist nach dem Start aus
    ///
    /// # Parameter
    /// - `pin`: GPIO Peripheral für die LED (z.B. GPIO4)
    pub fn new(pin: impl OutputPin + 'a) -> Self {
        Self {
            pin: Output::new(pin, Level::Low, OutputConfig::default()),
        }
    }

    pub fn is_on(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl<'a> SignalLed for GpioLed<'a> {
    // GPIO-Schreiben kann auf dem ESP32 nicht fehlschlagen
    fn set_on(&mut self) -> Result<(), FeedbackError> {
        self.pin.set_high();
        Ok(())
    }

    fn set_off(&mut self) -> Result<(), FeedbackError> {
        self.pin.set_low();
        Ok(())
    }
}
