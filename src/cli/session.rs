//! Interactive conversion session: prompt, convert, display, record, repeat.

use super::ui;
use crate::core::config::{AppConfig, POPULAR_CURRENCIES};
use crate::core::{ConversionRecord, CurrencyConverter, History, Prompter};
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const FAREWELL: &str = "\nThank you for using the converter. Goodbye!";

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub popular_currencies: Vec<String>,
    /// Pause after an unparseable amount so the user can read the error.
    pub retry_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            popular_currencies: POPULAR_CURRENCIES.iter().map(|c| c.to_string()).collect(),
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl From<&AppConfig> for SessionSettings {
    fn from(config: &AppConfig) -> Self {
        SessionSettings {
            popular_currencies: config.popular_currencies.clone(),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

/// Next action picked from the menu shown after every conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewConversion,
    ViewHistory,
    Exit,
}

impl MenuChoice {
    /// Only the exact strings "1" and "2" are options; everything else exits.
    pub fn parse(input: &str) -> Self {
        match input {
            "1" => MenuChoice::NewConversion,
            "2" => MenuChoice::ViewHistory,
            _ => MenuChoice::Exit,
        }
    }
}

/// Result of one pass through the amount/currency prompts.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    InvalidAmount,
    Converted(ConversionRecord),
    Failed(String),
    InputClosed,
}

/// Parses a user supplied amount. The whole (trimmed) input must be a finite number.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

pub fn normalize_currency(code: &str) -> String {
    code.to_uppercase()
}

pub struct Session<'a> {
    converter: &'a dyn CurrencyConverter,
    prompter: &'a mut dyn Prompter,
    settings: SessionSettings,
    history: History,
}

impl<'a> Session<'a> {
    pub fn new(
        converter: &'a dyn CurrencyConverter,
        prompter: &'a mut dyn Prompter,
        settings: SessionSettings,
    ) -> Self {
        Session {
            converter,
            prompter,
            settings,
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn into_history(self) -> History {
        self.history
    }

    /// Runs conversion cycles until the user exits or input is closed.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.run_cycle().await? {
                CycleOutcome::InvalidAmount => continue,
                // A closed input ends the session like the Exit option
                CycleOutcome::InputClosed => break,
                CycleOutcome::Converted(_) | CycleOutcome::Failed(_) => {}
            }

            match self.choose_next().await? {
                Some(MenuChoice::NewConversion) => {}
                Some(MenuChoice::ViewHistory) => {
                    self.show_history();
                    // Only waits for acknowledgement, the answer itself is ignored
                    if self
                        .prompter
                        .ask("\nPress Enter to continue...")
                        .await?
                        .is_none()
                    {
                        break;
                    }
                }
                Some(MenuChoice::Exit) | None => break,
            }
        }

        debug!(conversions = self.history.count(), "Session finished");
        self.prompter.say(FAREWELL);
        Ok(())
    }

    /// One conversion cycle, from the amount prompt to the result display.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome> {
        self.print_header();

        let Some(amount_input) = self
            .prompter
            .ask("\n> Enter the amount to convert: ")
            .await?
        else {
            return Ok(CycleOutcome::InputClosed);
        };

        let Some(amount) = parse_amount(&amount_input) else {
            debug!(input = %amount_input, "Rejected non-numeric amount");
            self.prompter.say(&ui::style_text(
                "ERROR: The value entered is not a number. Please try again.",
                ui::StyleType::Error,
            ));
            tokio::time::sleep(self.settings.retry_delay).await;
            return Ok(CycleOutcome::InvalidAmount);
        };

        let Some(from) = self.prompter.ask("> Source Currency (e.g., USD): ").await? else {
            return Ok(CycleOutcome::InputClosed);
        };
        let Some(to) = self.prompter.ask("> Target Currency (e.g., EUR): ").await? else {
            return Ok(CycleOutcome::InputClosed);
        };
        let from = normalize_currency(&from);
        let to = normalize_currency(&to);

        // Compared after uppercasing, so "eur" matches EUR
        if let Some(code) = self.settings.popular_currencies.iter().find(|c| **c == to) {
            self.prompter.say(&format!("ℹ️  Info: {code} is a high-volume currency."));
        }

        Ok(self.convert_and_record(amount, &from, &to).await)
    }

    #[instrument(skip(self))]
    async fn convert_and_record(&mut self, amount: f64, from: &str, to: &str) -> CycleOutcome {
        self.prompter.begin_fetch("🔄 Fetching rates from international market...");
        let result = self.converter.convert(from, to, amount).await;
        self.prompter.end_fetch();

        match result {
            Ok(converted) => {
                let record = ConversionRecord::new(amount, from, to, converted);
                self.prompter.say(&format!(
                    "\n✅ FINAL RESULT: {}",
                    ui::style_text(&record.to_string(), ui::StyleType::Highlight)
                ));
                self.history.record(record.clone());
                CycleOutcome::Converted(record)
            }
            Err(e) => {
                warn!(error = %e, "Conversion failed");
                let message = e.to_string();
                self.prompter.say(&format!(
                    "\n❌ An unexpected error occurred: {}",
                    ui::style_text(&message, ui::StyleType::Error)
                ));
                self.prompter.say("Please check your internet connection or currency codes.");
                CycleOutcome::Failed(message)
            }
        }
    }

    async fn choose_next(&mut self) -> Result<Option<MenuChoice>> {
        self.prompter.say("\n[1] New Conversion");
        self.prompter.say("[2] View History");
        self.prompter.say("[3] Exit");

        let option = self.prompter.ask("\nSelect an option: ").await?;
        Ok(option.as_deref().map(MenuChoice::parse))
    }

    fn print_header(&mut self) {
        self.prompter.clear();
        self.prompter.say("\n=========================================");
        self.prompter.say(&ui::style_text(
            "   REAL-TIME CURRENCY CONVERTER",
            ui::StyleType::Title,
        ));
        self.prompter.say("=========================================");

        if !self.history.is_empty() {
            self.prompter.say(&format!("Records in memory: {}", self.history.count()));
        }
    }

    fn show_history(&mut self) {
        if self.history.is_empty() {
            self.prompter.say(&ui::style_text(
                "\n--- No history yet ---",
                ui::StyleType::Subtle,
            ));
            return;
        }

        self.prompter.say("\n--- Session History ---");
        for (index, entry) in self.history.list().iter().enumerate() {
            self.prompter.say(&format!("{}. {}", index + 1, entry));
        }
        self.prompter.say("-----------------------");
    }
}
