//! Integration Tests für den Blink-Decoder
//!
//! Diese Tests laufen auf dem Host (x86_64) und simulieren den Sensor
//! mit einer Tick-Schleife (1 ms pro Tick, wie in der Firmware).

use morse_core::{
    BlinkDecoder, DecodeEvent, DecoderTimings, MORSE_TABLE, Mark, TextEvent, classify_blink,
    decode, encode,
};

// ============================================================================
// Sensor-Simulation
// ============================================================================

/// Treibt einen BlinkDecoder Tick für Tick und sammelt alle Events
pub struct SensorSim {
    pub decoder: BlinkDecoder,
    pub now_ms: u64,
    pub events: Vec<DecodeEvent>,
}

impl SensorSim {
    pub fn new() -> Self {
        Self {
            decoder: BlinkDecoder::new(),
            // Start nicht bei 0, damit die Stille vor dem ersten Blink realistisch ist
            now_ms: 10_000,
            events: Vec::new(),
        }
    }

    fn tick(&mut self, sensor_high: bool) {
        let events = self.decoder.on_tick(sensor_high, self.now_ms);
        self.events.extend(events.iter().copied());
        self.now_ms += 1;
    }

    /// Sensor für `duration_ms` high halten, dann eine Low-Flanke
    pub fn blink(&mut self, duration_ms: u64) {
        for _ in 0..duration_ms {
            self.tick(true);
        }
        self.tick(false);
    }

    /// Sensor für `duration_ms` low halten
    pub fn pause(&mut self, duration_ms: u64) {
        for _ in 0..duration_ms {
            self.tick(false);
        }
    }

    /// Nur der Text-Stream (Buchstaben + Zeilenenden)
    pub fn text(&self) -> String {
        self.events
            .iter()
            .filter_map(DecodeEvent::text)
            .map(|t| match t {
                TextEvent::Letter(c) => c,
                TextEvent::LineEnd => '\n',
            })
            .collect()
    }

    pub fn marks(&self) -> Vec<Mark> {
        self.events
            .iter()
            .filter_map(|e| match e {
                DecodeEvent::Mark(m) => Some(*m),
                _ => None,
            })
            .collect()
    }

    /// Sendet einen Code-String als Blinks (Dot 150 ms, Dash 600 ms, 100 ms Abstand)
    pub fn send_code(&mut self, code: &str) {
        for (i, c) in code.chars().enumerate() {
            if i > 0 {
                self.pause(100);
            }
            match c {
                '.' => self.blink(150),
                '-' => self.blink(600),
                _ => panic!("invalid mark {}", c),
            }
        }
    }
}

// ============================================================================
// Tests: Klassifikation
// ============================================================================

#[test]
fn test_classification_boundary() {
    let timings = DecoderTimings::DEFAULT;
    assert_eq!(classify_blink(399, &timings), Mark::Dot);
    assert_eq!(classify_blink(400, &timings), Mark::Dash);
}

#[test]
fn test_blink_durations_through_decoder() {
    let mut sim = SensorSim::new();
    sim.blink(399);
    sim.pause(50);
    sim.blink(400);
    assert_eq!(sim.marks(), vec![Mark::Dot, Mark::Dash]);
    assert_eq!(sim.decoder.symbol().as_str(), ".-");
}

// ============================================================================
// Tests: Morse-Tabelle
// ============================================================================

#[test]
fn test_every_table_entry_decodes_end_to_end() {
    for (code, letter) in MORSE_TABLE {
        let mut sim = SensorSim::new();
        sim.send_code(code);
        sim.pause(1100);
        assert_eq!(sim.text(), letter.to_string(), "code {}", code);
        assert_eq!(sim.decoder.message(), letter.to_string());
    }
}

#[test]
fn test_encode_decode_agree() {
    for c in ('A'..='Z').chain('0'..='9') {
        let code = encode(c).expect("every letter and digit has a code");
        assert_eq!(decode(code), Some(c));
    }
}

// ============================================================================
// Tests: End-to-End Szenarien
// ============================================================================

#[test]
fn test_single_dot_decodes_e() {
    let mut sim = SensorSim::new();
    sim.blink(150);
    sim.pause(1100);
    assert_eq!(sim.text(), "E");
}

#[test]
fn test_two_dots_decode_i() {
    let mut sim = SensorSim::new();
    sim.blink(150);
    sim.pause(100);
    sim.blink(150);
    sim.pause(1100);
    assert_eq!(sim.text(), "I");
}

#[test]
fn test_single_dash_decodes_t() {
    let mut sim = SensorSim::new();
    sim.blink(600);
    sim.pause(1100);
    assert_eq!(sim.text(), "T");
}

#[test]
fn test_unknown_symbol_is_discarded() {
    let mut sim = SensorSim::new();
    sim.send_code("......");
    sim.pause(1100);

    assert_eq!(sim.text(), "");
    assert!(sim.decoder.symbol().is_empty());
    assert_eq!(sim.decoder.message(), "");
    assert!(sim.events.contains(&DecodeEvent::Discarded { marks: 6 }));
}

#[test]
fn test_five_dots_decode_5() {
    let mut sim = SensorSim::new();
    sim.send_code(".....");
    sim.pause(1100);
    assert_eq!(sim.text(), "5");
}

#[test]
fn test_word_end_after_three_seconds() {
    let mut sim = SensorSim::new();
    sim.blink(150);
    sim.pause(1100);
    assert_eq!(sim.text(), "E");
    assert_eq!(sim.decoder.message(), "E");

    sim.pause(2000);
    assert_eq!(sim.text(), "E\n");
    assert_eq!(sim.decoder.message(), "");
}

#[test]
fn test_word_end_fires_only_once() {
    let mut sim = SensorSim::new();
    sim.blink(150);
    sim.pause(10_000);
    let word_ends = sim
        .events
        .iter()
        .filter(|e| **e == DecodeEvent::WordEnd)
        .count();
    assert_eq!(word_ends, 1);
}

#[test]
fn test_no_word_end_for_discarded_symbol() {
    let mut sim = SensorSim::new();
    sim.send_code("......");
    sim.pause(5000);
    assert!(!sim.events.contains(&DecodeEvent::WordEnd));
}

#[test]
fn test_multiple_words() {
    let mut sim = SensorSim::new();
    // "SOS"
    for code in ["...", "---", "..."] {
        sim.send_code(code);
        sim.pause(1100);
    }
    sim.pause(2000);
    // "OK"
    for code in ["---", "-.-"] {
        sim.send_code(code);
        sim.pause(1100);
    }
    sim.pause(2000);
    assert_eq!(sim.text(), "SOS\nOK\n");
}

#[test]
fn test_letter_gap_under_one_second_keeps_symbol() {
    let mut sim = SensorSim::new();
    sim.blink(150);
    sim.pause(900);
    sim.blink(600);
    sim.pause(1100);
    // ".-" statt "E" + "T"
    assert_eq!(sim.text(), "A");
}

#[test]
fn test_events_are_streamed_before_word_end() {
    let mut sim = SensorSim::new();
    sim.send_code("....");
    sim.pause(1100);
    sim.send_code(".");
    sim.pause(1100);
    // Buchstaben kommen einzeln, noch ohne Zeilenende
    assert_eq!(sim.text(), "HE");
    assert_eq!(sim.decoder.message(), "HE");
}
