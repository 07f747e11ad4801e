use chrono::Weekday;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::error::AcademyError;
use super::numbering::ReceiptNumberSequence;
use super::types::Receipt;

/// Back-office configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcademyConfig {
    /// Academy name shown in headers and receipts.
    pub academy_name: String,
    /// ISO 4217 currency code for fees and receipts.
    pub currency_code: String,
    /// First day of the week for schedules and weekly counts.
    pub week_start: Weekday,
    /// Receipt number prefix (e.g. "REC-").
    pub receipt_prefix: String,
    /// Zero-padding width of the receipt counter.
    pub receipt_padding: usize,
    /// Default UI locale.
    pub locale: String,
}

impl Default for AcademyConfig {
    fn default() -> Self {
        Self {
            academy_name: "Academy".into(),
            currency_code: "EUR".into(),
            week_start: Weekday::Mon,
            receipt_prefix: "REC-".into(),
            receipt_padding: 3,
            locale: "es-ES".into(),
        }
    }
}

impl AcademyConfig {
    /// Check values that would produce malformed output.
    pub fn validate(&self) -> Result<(), AcademyError> {
        if self.receipt_prefix.trim().is_empty() {
            return Err(AcademyError::Config(
                "receipt prefix must not be empty".into(),
            ));
        }
        if self.currency_code.len() != 3
            || !self.currency_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(AcademyError::Config(format!(
                "currency code '{}' must be 3 uppercase letters",
                self.currency_code
            )));
        }
        if self.receipt_padding > 12 {
            return Err(AcademyError::Config(format!(
                "receipt padding {} exceeds 12",
                self.receipt_padding
            )));
        }
        Ok(())
    }

    /// Receipt sequence for `year` using the configured prefix and padding.
    pub fn receipt_sequence(&self, year: i32) -> ReceiptNumberSequence {
        ReceiptNumberSequence::new(self.receipt_prefix.clone(), year)
            .with_padding(self.receipt_padding)
    }

    /// `amount` with two decimals and the currency code, e.g. "65.00 EUR".
    pub fn format_amount(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        format!("{rounded} {}", self.currency_code)
    }

    /// One-line receipt heading: academy name, receipt number, amount.
    pub fn receipt_heading(&self, receipt: &Receipt) -> String {
        format!(
            "{} | {} | {}",
            self.academy_name,
            receipt.number,
            self.format_amount(receipt.amount)
        )
    }
}

/// Builder for [`AcademyConfig`].
///
/// # Example
///
/// ```
/// use academy::core::AcademyConfigBuilder;
/// use chrono::Weekday;
///
/// let config = AcademyConfigBuilder::new("Academia Sol")
///     .week_start(Weekday::Sun)
///     .receipt_prefix("SOL-")
///     .build()
///     .unwrap();
/// assert_eq!(config.receipt_sequence(2024).peek(), "SOL-2024-001");
/// ```
pub struct AcademyConfigBuilder {
    config: AcademyConfig,
}

impl AcademyConfigBuilder {
    pub fn new(academy_name: impl Into<String>) -> Self {
        Self {
            config: AcademyConfig {
                academy_name: academy_name.into(),
                ..Default::default()
            },
        }
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.config.currency_code = code.into();
        self
    }

    pub fn week_start(mut self, day: Weekday) -> Self {
        self.config.week_start = day;
        self
    }

    pub fn receipt_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.receipt_prefix = prefix.into();
        self
    }

    pub fn receipt_padding(mut self, width: usize) -> Self {
        self.config.receipt_padding = width;
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<AcademyConfig, AcademyError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
