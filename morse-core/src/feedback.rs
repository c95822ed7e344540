//! Feedback-Playback und Station
//!
//! Pro klassifiziertem Blink werden LED und Buzzer für die Dauer des Marks
//! eingeschaltet, danach folgt eine feste Pause. Das Playback wird im
//! Decoder-Loop awaited: während es läuft, wird der Sensor nicht gelesen.

use embedded_hal_async::delay::DelayNs;

use crate::decoder::BlinkDecoder;
use crate::traits::{FeedbackError, SignalLed, ToneBuzzer};
use crate::types::{DecodeEvent, DecoderTimings, Mark, TickEvents};

/// Spielt das Feedback für ein Mark ab
///
/// Ablauf: LED an + Ton an → `feedback_ms(mark)` warten → LED aus + Ton aus
/// → `feedback_pause_ms` warten.
///
/// Schlägt ein Ausgang fehl, läuft das Timing trotzdem komplett durch und
/// beide Ausgänge werden ausgeschaltet. Zurückgegeben wird der erste Fehler.
pub async fn play_feedback<L, B, D>(
    led: &mut L,
    buzzer: &mut B,
    delay: &mut D,
    mark: Mark,
    timings: &DecoderTimings,
) -> Result<(), FeedbackError>
where
    L: SignalLed,
    B: ToneBuzzer,
    D: DelayNs,
{
    // Result::and wertet das Argument immer aus → beide Ausgänge werden geschaltet
    let on_result = led.set_on().and(buzzer.start_tone());
    delay.delay_ms(timings.feedback_ms(mark)).await;

    let off_result = led.set_off().and(buzzer.stop_tone());
    delay.delay_ms(timings.feedback_pause_ms).await;

    on_result.and(off_result)
}

/// Ergebnis eines Station-Ticks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub events: TickEvents,
    /// Fehler beim Feedback-Playback (Decoding läuft trotzdem weiter)
    pub feedback_error: Option<FeedbackError>,
}

/// Decoder + Feedback-Ausgänge
///
/// Der generische Aufbau (`L: SignalLed`, `B: ToneBuzzer`, `D: DelayNs`)
/// ermöglicht Real Hardware in der Firmware und Mocks in den Tests.
pub struct MorseStation<L, B, D> {
    decoder: BlinkDecoder,
    led: L,
    buzzer: B,
    delay: D,
}

impl<L, B, D> MorseStation<L, B, D>
where
    L: SignalLed,
    B: ToneBuzzer,
    D: DelayNs,
{
    pub fn new(led: L, buzzer: B, delay: D) -> Self {
        Self::with_decoder(BlinkDecoder::new(), led, buzzer, delay)
    }

    pub fn with_decoder(decoder: BlinkDecoder, led: L, buzzer: B, delay: D) -> Self {
        Self {
            decoder,
            led,
            buzzer,
            delay,
        }
    }

    /// Ein Tick: Decoder weiterschalten und bei einem Mark Feedback abspielen
    pub async fn step(&mut self, sensor_high: bool, now_ms: u64) -> StepReport {
        let events = self.decoder.on_tick(sensor_high, now_ms);

        let mut feedback_error = None;
        for event in events.iter() {
            if let DecodeEvent::Mark(mark) = *event {
                let timings = *self.decoder.timings();
                if let Err(e) = play_feedback(
                    &mut self.led,
                    &mut self.buzzer,
                    &mut self.delay,
                    mark,
                    &timings,
                )
                .await
                {
                    feedback_error = Some(e);
                }
            }
        }

        StepReport {
            events,
            feedback_error,
        }
    }

    pub fn decoder(&self) -> &BlinkDecoder {
        &self.decoder
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn buzzer(&self) -> &B {
        &self.buzzer
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }
}
