//! Session history of completed conversions.

use std::fmt::Display;

/// One successful conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRecord {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted: f64,
}

impl ConversionRecord {
    pub fn new(amount: f64, from: &str, to: &str, converted: f64) -> Self {
        ConversionRecord {
            amount,
            from: from.to_string(),
            to: to.to_string(),
            converted,
        }
    }
}

impl Display for ConversionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            self.amount, self.from, self.converted, self.to
        )
    }
}

/// Append-only list of conversions, in the order they completed.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<ConversionRecord>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: ConversionRecord) {
        self.entries.push(entry);
    }

    pub fn list(&self) -> &[ConversionRecord] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
