// Console Task - Gibt den dekodierten Text auf der seriellen Konsole aus
use esp_println::{print, println};

use crate::config::BANNER;
use crate::{TextEvent, TextEventReceiver};

/// Schreibt die Begrüßung (drei Zeilen) auf die Konsole
pub fn print_banner() {
    for line in BANNER {
        println!("{}", line);
    }
}

/// Console Task - streamt Buchstaben ohne Puffer-Verzögerung
///
/// - `TextEvent::Letter`: Zeichen sofort ausgeben, kein Zeilenumbruch
/// - `TextEvent::LineEnd`: Zeilenumbruch nach einem Wort
///
/// # Parameter
/// - `text_receiver`: Channel Receiver für Text-Events vom Decoder Task
#[embassy_executor::task]
pub async fn console_task(text_receiver: TextEventReceiver) {
    loop {
        match text_receiver.receive().await {
            TextEvent::Letter(letter) => print!("{}", letter),
            TextEvent::LineEnd => println!(),
        }
    }
}
