pub mod catalog;
pub mod clock;
pub mod ollama;
pub mod ports;
