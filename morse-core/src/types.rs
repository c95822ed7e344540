//! Core Types für den Blink-Morse-Decoder
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Maximale Anzahl Marks in einem Symbol
///
/// Die längsten Tabellen-Einträge (Ziffern) haben 5 Marks.
pub const MAX_SYMBOL_MARKS: usize = 8;

/// Maximale Anzahl Buchstaben in einer Nachricht (bis zur Wortgrenze)
pub const MAX_MESSAGE_LEN: usize = 64;

/// Ein einzelnes Morse-Element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    /// Kurzer Blink
    Dot,
    /// Langer Blink
    Dash,
}

impl Mark {
    /// Textdarstellung wie in der Morse-Tabelle ('.' oder '-')
    pub fn as_char(self) -> char {
        match self {
            Mark::Dot => '.',
            Mark::Dash => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Mark::Dot),
            '-' => Some(Mark::Dash),
            _ => None,
        }
    }
}

/// Feste Timing-Konstanten des Decoders (alle Werte in Millisekunden)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoderTimings {
    /// Blinks ab dieser Dauer sind ein Dash, kürzere ein Dot
    pub dash_threshold_ms: u64,
    /// Stille nach der das Symbol zu einem Buchstaben aufgelöst wird
    pub letter_gap_ms: u64,
    /// Stille nach der die Nachricht als Wort abgeschlossen wird
    pub word_gap_ms: u64,
    /// Feedback-Dauer für einen Dot
    pub dot_feedback_ms: u32,
    /// Feedback-Dauer für einen Dash
    pub dash_feedback_ms: u32,
    /// Pause nach jedem Feedback (Mindestabstand zwischen zwei Marks)
    pub feedback_pause_ms: u32,
}

impl DecoderTimings {
    pub const DEFAULT: Self = Self {
        dash_threshold_ms: 400,
        letter_gap_ms: 1000,
        word_gap_ms: 3000,
        dot_feedback_ms: 200,
        dash_feedback_ms: 600,
        feedback_pause_ms: 200,
    };

    /// Feedback-Dauer (LED + Buzzer an) für ein Mark
    pub fn feedback_ms(&self, mark: Mark) -> u32 {
        match mark {
            Mark::Dot => self.dot_feedback_ms,
            Mark::Dash => self.dash_feedback_ms,
        }
    }
}

impl Default for DecoderTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Symbol: Marks eines Buchstabens, die noch nicht aufgelöst wurden
///
/// Wird als Code-String ('.' / '-') gespeichert, damit der Lookup in der
/// Tabelle direkt per `&str` funktioniert. Läuft der Buffer über, werden
/// weitere Marks nur gezählt und das Symbol matcht nie - es gibt keinen Fehler.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Symbol {
    code: heapless::String<MAX_SYMBOL_MARKS>,
    count: usize,
}

impl Symbol {
    pub const fn new() -> Self {
        Self {
            code: heapless::String::new(),
            count: 0,
        }
    }

    pub fn push(&mut self, mark: Mark) {
        // Bei vollem Buffer nur noch zählen
        let _ = self.code.push(mark.as_char());
        self.count += 1;
    }

    /// Anzahl der aufgezeichneten Marks (inkl. übergelaufener)
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_overflowed(&self) -> bool {
        self.count > MAX_SYMBOL_MARKS
    }

    /// Code-String für den Tabellen-Lookup
    pub fn as_str(&self) -> &str {
        &self.code
    }

    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.code.chars().filter_map(Mark::from_char)
    }

    /// Löst das Symbol gegen die Morse-Tabelle auf
    pub fn resolve(&self) -> Option<char> {
        if self.is_overflowed() {
            return None;
        }
        crate::table::decode(&self.code)
    }

    pub fn clear(&mut self) {
        self.code.clear();
        self.count = 0;
    }
}

/// Aufgelöste Buchstaben seit der letzten Wortgrenze
pub type Message = heapless::String<MAX_MESSAGE_LEN>;

/// Ereignis aus einem Decoder-Tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeEvent {
    /// Ein Blink wurde beendet und klassifiziert (Feedback fällig)
    Mark(Mark),
    /// Symbol wurde zu einem Buchstaben aufgelöst
    Letter(char),
    /// Symbol ohne Tabellen-Eintrag wurde verworfen
    Discarded { marks: usize },
    /// Wortgrenze: Nachricht abgeschlossen und geleert
    WordEnd,
}

impl DecodeEvent {
    /// Der Teil des Events, der im Text-Stream landet
    pub fn text(&self) -> Option<TextEvent> {
        match *self {
            DecodeEvent::Letter(c) => Some(TextEvent::Letter(c)),
            DecodeEvent::WordEnd => Some(TextEvent::LineEnd),
            DecodeEvent::Mark(_) | DecodeEvent::Discarded { .. } => None,
        }
    }
}

/// Text-Stream Event (Decoder-Task → Console-Task)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent {
    /// Einzelner Buchstabe, sofort ohne Zeilenumbruch ausgeben
    Letter(char),
    /// Zeilenende nach einem Wort
    LineEnd,
}

/// Events eines Ticks in Reihenfolge: Mark, Letter/Discarded, WordEnd
pub type TickEvents = heapless::Vec<DecodeEvent, 3>;

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Mark {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Mark::Dot => defmt::write!(fmt, "Dot"),
            Mark::Dash => defmt::write!(fmt, "Dash"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecodeEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DecodeEvent::Mark(mark) => defmt::write!(fmt, "Mark({})", mark),
            DecodeEvent::Letter(c) => defmt::write!(fmt, "Letter({})", c),
            DecodeEvent::Discarded { marks } => {
                defmt::write!(fmt, "Discarded {{ marks: {} }}", marks)
            }
            DecodeEvent::WordEnd => defmt::write!(fmt, "WordEnd"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TextEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TextEvent::Letter(c) => defmt::write!(fmt, "Letter({})", c),
            TextEvent::LineEnd => defmt::write!(fmt, "LineEnd"),
        }
    }
}
