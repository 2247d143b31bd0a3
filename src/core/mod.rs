//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod history;
pub mod log;
pub mod prompt;

// Re-export main types for cleaner imports
pub use currency::CurrencyConverter;
pub use history::{ConversionRecord, History};
pub use prompt::Prompter;
