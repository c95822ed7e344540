//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{DecoderTimings, Mark};

/// Klassifiziert eine Blink-Dauer als Dot oder Dash
///
/// Alles unter `dash_threshold_ms` ist ein Dot, der Schwellwert selbst
/// zählt bereits als Dash.
///
/// # Beispiele
///
/// ```
/// # use morse_core::{classify_blink, DecoderTimings, Mark};
/// let timings = DecoderTimings::DEFAULT;
/// assert_eq!(classify_blink(150, &timings), Mark::Dot);
/// assert_eq!(classify_blink(400, &timings), Mark::Dash);
/// ```
pub fn classify_blink(duration_ms: u64, timings: &DecoderTimings) -> Mark {
    if duration_ms < timings.dash_threshold_ms {
        Mark::Dot
    } else {
        Mark::Dash
    }
}

/// Vergangene Zeit seit `since_ms` (sättigt bei 0 statt Underflow)
pub fn elapsed_ms(since_ms: u64, now_ms: u64) -> u64 {
    now_ms.saturating_sub(since_ms)
}
