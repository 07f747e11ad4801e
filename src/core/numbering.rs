use chrono::{Datelike, NaiveDate};

use super::error::AcademyError;

/// Gapless receipt number generator.
///
/// Produces numbers shaped `{prefix}{year}-{n}` with `n` zero-padded,
/// e.g. "REC-2024-001". The counter restarts at 1 each year.
#[derive(Debug, Clone)]
pub struct ReceiptNumberSequence {
    prefix: String,
    year: i32,
    next: u64,
    padding: usize,
}

impl ReceiptNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self::starting_at(prefix, year, 1)
    }

    /// Continue an existing sequence, e.g. after loading issued receipts.
    pub fn starting_at(prefix: impl Into<String>, year: i32, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next,
            padding: 3,
        }
    }

    /// Set zero-padding width (default: 3).
    pub fn with_padding(mut self, width: usize) -> Self {
        self.padding = width;
        self
    }

    /// Issue the next receipt number.
    pub fn next_number(&mut self) -> String {
        let number = self.format(self.next);
        self.next += 1;
        number
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format(self.next)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The next counter value, unformatted.
    pub fn next_raw(&self) -> u64 {
        self.next
    }

    /// Move to a later year and restart the counter.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), AcademyError> {
        if new_year <= self.year {
            return Err(AcademyError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next = 1;
        Ok(())
    }

    /// Advance the year if `date` lies in a later one. Returns true if it did.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        self.advance_year(date.year()).is_ok()
    }

    fn format(&self, n: u64) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            n,
            width = self.padding
        )
    }
}
