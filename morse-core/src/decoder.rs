//! Blink-Decoder State Machine
//!
//! Wird einmal pro Tick mit dem Sensor-Zustand und der aktuellen Zeit
//! aufgerufen. Misst Blink-Dauern, baut daraus Symbole und löst diese nach
//! genügend Stille zu Buchstaben bzw. Wörtern auf.
//!
//! ```text
//!   sensor high            sensor low
//!  IDLE ──────────► BLINKING ──────────► IDLE  (+ Mark)
//!
//!  Stille > letter_gap_ms  → Symbol auflösen (Letter / Discarded)
//!  Stille > word_gap_ms    → Nachricht abschließen (WordEnd)
//! ```

use crate::logic::{classify_blink, elapsed_ms};
use crate::types::{DecodeEvent, DecoderTimings, Message, Symbol, TickEvents};

/// Zustand eines Blink-Zyklus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkState {
    /// Sensor low, kein Blink aktiv
    Idle,
    /// Sensor high, Blink läuft seit `start_ms`
    Blinking { start_ms: u64 },
}

/// Decoder-Zustand: gehört exklusiv der Polling-Schleife
#[derive(Debug, Clone)]
pub struct BlinkDecoder {
    timings: DecoderTimings,
    state: BlinkState,
    last_activity_ms: u64,
    symbol: Symbol,
    message: Message,
}

impl BlinkDecoder {
    pub fn new() -> Self {
        Self::with_timings(DecoderTimings::DEFAULT)
    }

    pub fn with_timings(timings: DecoderTimings) -> Self {
        Self {
            timings,
            state: BlinkState::Idle,
            last_activity_ms: 0,
            symbol: Symbol::new(),
            message: Message::new(),
        }
    }

    /// Ein Tick der State Machine
    ///
    /// Reihenfolge innerhalb eines Ticks:
    /// 1. Flanken auswerten (Blink-Start / Blink-Ende → `Mark`)
    /// 2. Aktivität merken oder nach Buchstaben-Pause Symbol auflösen
    /// 3. Nach Wort-Pause Nachricht abschließen
    ///
    /// Schritt 3 sieht die Nachricht so, wie Schritt 2 sie im selben Tick
    /// hinterlassen hat. Buchstabe und Wortende können also im selben Tick
    /// feuern.
    pub fn on_tick(&mut self, sensor_high: bool, now_ms: u64) -> TickEvents {
        let mut events = TickEvents::new();

        match (self.state, sensor_high) {
            (BlinkState::Idle, true) => {
                self.state = BlinkState::Blinking { start_ms: now_ms };
            }
            (BlinkState::Blinking { start_ms }, false) => {
                self.state = BlinkState::Idle;
                let mark = classify_blink(elapsed_ms(start_ms, now_ms), &self.timings);
                self.symbol.push(mark);
                // Max. 3 Events pro Tick (Mark, Letter/Discarded, WordEnd) - passt immer
                let _ = events.push(DecodeEvent::Mark(mark));
            }
            _ => {}
        }

        if sensor_high || self.is_blinking() {
            self.last_activity_ms = now_ms;
        } else if self.silence_ms(now_ms) > self.timings.letter_gap_ms && !self.symbol.is_empty() {
            let event = self.resolve_symbol();
            let _ = events.push(event);
        }

        if self.silence_ms(now_ms) > self.timings.word_gap_ms && !self.message.is_empty() {
            self.message.clear();
            let _ = events.push(DecodeEvent::WordEnd);
        }

        events
    }

    /// Symbol gegen die Tabelle auflösen und danach immer leeren
    fn resolve_symbol(&mut self) -> DecodeEvent {
        let event = match self.symbol.resolve() {
            Some(letter) => {
                // Voller Buffer: Buchstabe wird trotzdem gestreamt
                let _ = self.message.push(letter);
                DecodeEvent::Letter(letter)
            }
            None => DecodeEvent::Discarded {
                marks: self.symbol.len(),
            },
        };
        self.symbol.clear();
        event
    }

    fn silence_ms(&self, now_ms: u64) -> u64 {
        elapsed_ms(self.last_activity_ms, now_ms)
    }

    pub fn is_blinking(&self) -> bool {
        matches!(self.state, BlinkState::Blinking { .. })
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    pub fn timings(&self) -> &DecoderTimings {
        &self.timings
    }

    /// Noch nicht aufgelöste Marks des aktuellen Buchstabens
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Buchstaben seit der letzten Wortgrenze
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn last_activity_ms(&self) -> u64 {
        self.last_activity_ms
    }
}

impl Default for BlinkDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_rising_edge_starts_blink() {
        let mut decoder = BlinkDecoder::new();
        let events = decoder.on_tick(true, 1000);
        assert!(events.is_empty());
        assert_eq!(decoder.state(), BlinkState::Blinking { start_ms: 1000 });
        assert_eq!(decoder.last_activity_ms(), 1000);
    }

    #[test]
    fn test_falling_edge_reports_mark() {
        let mut decoder = BlinkDecoder::new();
        decoder.on_tick(true, 1000);
        let events = decoder.on_tick(false, 1150);
        assert_eq!(events.as_slice(), &[DecodeEvent::Mark(Mark::Dot)]);
        assert_eq!(decoder.symbol().as_str(), ".");
        assert!(!decoder.is_blinking());
    }

    #[test]
    fn test_falling_edge_does_not_refresh_activity() {
        let mut decoder = BlinkDecoder::new();
        decoder.on_tick(true, 1000);
        decoder.on_tick(true, 1100);
        decoder.on_tick(false, 1150);
        assert_eq!(decoder.last_activity_ms(), 1100);
    }

    #[test]
    fn test_empty_symbol_never_resolves() {
        let mut decoder = BlinkDecoder::new();
        for now in [0, 2000, 5000, 10_000] {
            assert!(decoder.on_tick(false, now).is_empty());
        }
        assert_eq!(decoder.message(), "");
    }

    #[test]
    fn test_letter_and_word_end_same_tick() {
        let mut decoder = BlinkDecoder::new();
        decoder.on_tick(true, 1000);
        decoder.on_tick(false, 1150);
        // Erster Tick nach langer Pause: Buchstabe und Wortende zusammen
        let events = decoder.on_tick(false, 4500);
        assert_eq!(
            events.as_slice(),
            &[DecodeEvent::Letter('E'), DecodeEvent::WordEnd]
        );
        assert_eq!(decoder.message(), "");
        assert!(decoder.symbol().is_empty());
    }

    #[test]
    fn test_mark_letter_and_word_end_same_tick() {
        let mut decoder = BlinkDecoder::new();
        decoder.on_tick(true, 1000);
        let events = decoder.on_tick(false, 5000);
        assert_eq!(
            events.as_slice(),
            &[
                DecodeEvent::Mark(Mark::Dash),
                DecodeEvent::Letter('T'),
                DecodeEvent::WordEnd
            ]
        );
    }

    #[test]
    fn test_letter_gap_is_strictly_greater() {
        let mut decoder = BlinkDecoder::new();
        decoder.on_tick(true, 1000);
        decoder.on_tick(true, 1100);
        decoder.on_tick(false, 1150);
        assert!(decoder.on_tick(false, 2100).is_empty());
        assert_eq!(
            decoder.on_tick(false, 2101).as_slice(),
            &[DecodeEvent::Letter('E')]
        );
    }
}
