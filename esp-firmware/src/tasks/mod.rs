// Task-Modul: Enthält alle Embassy Tasks
//
// Der Decoder Task besitzt den kompletten Decoder-Zustand.
// Dekodierter Text geht über einen Embassy Channel an den Console Task.

pub mod blink_decoder;
pub mod console;

// Re-export Tasks für einfachen Import
pub use blink_decoder::blink_decoder_task;
pub use console::{console_task, print_banner};
