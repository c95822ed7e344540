// Blink Decoder Task - Liest den Lidschlag-Sensor und dekodiert Morse-Code
use defmt::{debug, error, info};
use embassy_time::{Delay, Duration, Instant, Timer};
use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};
use esp_hal::peripherals::LEDC;

use crate::config::{BUZZER_DUTY_PCT, BUZZER_FREQUENCY_HZ, DECODER_TIMINGS, POLL_INTERVAL_MS};
use crate::hal::{GpioLed, LedcBuzzer};
use crate::{BlinkDecoder, DecodeEvent, MorseStation, SignalLed, TextEventSender, ToneBuzzer};

/// Blink Decoder Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Diese Funktion enthält die komplette Polling-Schleife:
/// - Liest den Sensor einmal pro Tick
/// - Schaltet die Decoder State Machine weiter
/// - Spielt Feedback (LED + Buzzer) pro Blink ab
/// - Sendet Buchstaben und Zeilenenden an den Console Task
///
/// Das Feedback wird direkt in der Schleife awaited: während es läuft
/// (Mark-Dauer + Pause), wird der Sensor NICHT gelesen.
///
/// # Parameter
/// - `sensor`: Closure die `true` liefert solange das Auge geschlossen ist
/// - `led`: Feedback-LED (Hardware oder Mock)
/// - `buzzer`: Buzzer (Hardware oder Mock)
/// - `text_sender`: Channel Sender für den Text-Stream
pub async fn blink_decoder_logic<F, L, B>(
    mut sensor: F,
    led: L,
    buzzer: B,
    text_sender: TextEventSender,
) -> !
where
    F: FnMut() -> bool,
    L: SignalLed,
    B: ToneBuzzer,
{
    let decoder = BlinkDecoder::with_timings(DECODER_TIMINGS);
    let mut station = MorseStation::with_decoder(decoder, led, buzzer, Delay);

    info!("Decoder: polling sensor every {} ms", POLL_INTERVAL_MS);

    loop {
        let sensor_high = sensor();
        let now_ms = Instant::now().as_millis();

        let report = station.step(sensor_high, now_ms).await;

        if let Some(e) = report.feedback_error {
            error!("Decoder: feedback failed: {}", e);
        }

        for event in report.events.iter() {
            match event {
                DecodeEvent::Mark(mark) => {
                    debug!("Decoder: {} (symbol {})", mark, station.decoder().symbol().as_str());
                }
                DecodeEvent::Letter(letter) => debug!("Decoder: letter {}", letter),
                DecodeEvent::Discarded { marks } => {
                    debug!("Decoder: unknown symbol discarded ({} marks)", marks);
                }
                DecodeEvent::WordEnd => debug!("Decoder: word end"),
            }

            if let Some(text) = event.text() {
                text_sender.send(text).await;
            }
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Blink Decoder Task - Embassy Task für die Polling-Schleife
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `blink_decoder_logic()` Funktion auf.
///
/// # Parameter
/// - `sensor_pin`: GPIO für den Sensor-Ausgang
/// - `led_pin`: GPIO für die Feedback-LED
/// - `buzzer_pin`: GPIO für den Buzzer
/// - `ledc_peripheral`: LEDC Peripheral für den Buzzer-Ton
/// - `text_sender`: Channel Sender für den Text-Stream
#[embassy_executor::task]
pub async fn blink_decoder_task(
    sensor_pin: esp_hal::peripherals::GPIO2<'static>,
    led_pin: esp_hal::peripherals::GPIO4<'static>,
    buzzer_pin: esp_hal::peripherals::GPIO3<'static>,
    ledc_peripheral: LEDC<'static>,
    text_sender: TextEventSender,
) {
    let sensor = sensor_input(sensor_pin);
    let led = GpioLed::new(led_pin);

    let buzzer = match LedcBuzzer::new(
        ledc_peripheral,
        buzzer_pin,
        BUZZER_FREQUENCY_HZ,
        BUZZER_DUTY_PCT,
    ) {
        Ok(buzzer) => buzzer,
        Err(e) => {
            error!("Decoder: buzzer init failed: {}", defmt::Debug2Format(&e));
            return;
        }
    };

    info!("Decoder: hardware ready (buzzer {} Hz)", BUZZER_FREQUENCY_HZ);

    // Business Logic aufrufen (Sensor als Closure)
    blink_decoder_logic(move || sensor.is_high(), led, buzzer, text_sender).await
}

/// Sensor-Eingang ohne Pull (Sensor-Modul treibt den Pegel aktiv)
fn sensor_input<'a>(pin: impl InputPin + 'a) -> Input<'a> {
    Input::new(pin, InputConfig::default().with_pull(Pull::None))
}
