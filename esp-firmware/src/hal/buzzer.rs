// Buzzer über LEDC PWM
//
// Der LEDC-Timer läuft fest auf der Ton-Frequenz. Ton an = Duty > 0,
// Ton aus = Duty 0. Damit ist der Buzzer ein ToneBuzzer für morse-core.

use esp_hal::gpio::DriveMode;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::LEDC;
use esp_hal::time::Rate;
use static_cell::StaticCell;

use morse_core::{FeedbackError, ToneBuzzer};

// LEDC-Treiber und Timer müssen 'static sein, weil der Channel eine
// Referenz auf den Timer hält
static LEDC_DRIVER: StaticCell<Ledc<'static>> = StaticCell::new();
static TONE_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

/// Fehler-Typ für die Buzzer-Initialisierung
#[derive(Debug)]
pub enum BuzzerInitError {
    /// LedcBuzzer::new() wurde mehr als einmal aufgerufen
    AlreadyInitialized,
    Timer(timer::Error),
    Channel(channel::Error),
}

/// Real Hardware Buzzer
///
/// Nutzt LEDC Timer0 + Channel0 (Low Speed) für ein Rechtecksignal.
pub struct LedcBuzzer {
    channel: channel::Channel<'static, LowSpeed>,
    duty_pct: u8,
}

impl LedcBuzzer {
    /// Erstellt einen neuen LedcBuzzer (nur einmal möglich)
    ///
    /// # Parameter
    /// - `ledc_peripheral`: LEDC Peripheral
    /// - `pin`: GPIO für den Buzzer (z.B. GPIO3)
    /// - `frequency_hz`: Ton-Frequenz (z.B. 1000)
    /// - `duty_pct`: Duty Cycle während der Ton läuft (z.B. 50)
    pub fn new(
        ledc_peripheral: LEDC<'static>,
        pin: impl PeripheralOutput<'static>,
        frequency_hz: u32,
        duty_pct: u8,
    ) -> Result<Self, BuzzerInitError> {
        let ledc = LEDC_DRIVER
            .try_init(Ledc::new(ledc_peripheral))
            .ok_or(BuzzerInitError::AlreadyInitialized)?;
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        // Timer: 10 Bit Auflösung reicht bei 1 kHz locker (APB = 80 MHz)
        let tone_timer = TONE_TIMER
            .try_init(ledc.timer::<LowSpeed>(timer::Number::Timer0))
            .ok_or(BuzzerInitError::AlreadyInitialized)?;
        tone_timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty10Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(frequency_hz),
            })
            .map_err(BuzzerInitError::Timer)?;
        let tone_timer: &'static timer::Timer<'static, LowSpeed> = tone_timer;

        // Channel startet stumm (Duty 0)
        let mut channel = ledc.channel(channel::Number::Channel0, pin);
        channel
            .configure(channel::config::Config {
                timer: tone_timer,
                duty_pct: 0,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(BuzzerInitError::Channel)?;

        Ok(Self { channel, duty_pct })
    }
}

impl ToneBuzzer for LedcBuzzer {
    fn start_tone(&mut self) -> Result<(), FeedbackError> {
        self.channel
            .set_duty(self.duty_pct)
            .map_err(|_| FeedbackError::BuzzerFailed)
    }

    fn stop_tone(&mut self) -> Result<(), FeedbackError> {
        self.channel
            .set_duty(0)
            .map_err(|_| FeedbackError::BuzzerFailed)
    }
}
