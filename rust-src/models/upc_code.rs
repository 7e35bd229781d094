//! Validated UPC-A input number.

use std::fmt;

use thiserror::Error;

use crate::config::UPC_INPUT_DIGITS;


/// Reasons a barcode number is rejected before it reaches the history.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("expected {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("barcode number must contain only digits 0-9")]
    NonDigit,
}


/// An 11-digit UPC-A number without its check digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcCode(String);


impl UpcCode {
    /// Validate user input.
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let input = input.trim();

        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeError::NonDigit);
        }
        if input.len() != UPC_INPUT_DIGITS {
            return Err(CodeError::WrongLength {
                expected: UPC_INPUT_DIGITS,
                actual: input.len(),
            });
        }

        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits as numbers.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    /// Compute the UPC-A check digit.
    ///
    /// Digits in odd positions (1st, 3rd, ...) weigh 3, the rest weigh 1.
    pub fn check_digit(&self) -> u8 {
        let sum: u32 = self
            .digits()
            .enumerate()
            .map(|(i, d)| if i % 2 == 0 { d as u32 * 3 } else { d as u32 })
            .sum();
        ((10 - sum % 10) % 10) as u8
    }

    /// All 12 digits including the check digit.
    pub fn full_digits(&self) -> Vec<u8> {
        let mut digits: Vec<u8> = self.digits().collect();
        digits.push(self.check_digit());
        digits
    }
}


impl fmt::Display for UpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
