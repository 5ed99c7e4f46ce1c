use std::fmt::Display;

use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::AsRefln;

use crate::KernelError;

const PLATE_LENGTH: usize = 6;
const LETTER_PREFIX: usize = 3;

/// Registration plate: three letters followed by three digits, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefln)]
pub struct LicensePlate(String);

impl LicensePlate {
    /// Validates `plate` and returns its normalized (trimmed, uppercase) form.
    ///
    /// Absent, empty and malformed values are rejected with
    /// [`KernelError::InvalidArgument`].
    pub fn new<'a>(plate: impl Into<Option<&'a str>>) -> error_stack::Result<Self, KernelError> {
        let plate = plate.into();
        match plate.map(str::trim) {
            Some(trimmed) if Self::is_valid(trimmed) => Ok(Self(trimmed.to_ascii_uppercase())),
            _ => Err(Report::new(KernelError::InvalidArgument)
                .attach_printable(format!("Invalid license plate: {}", plate.unwrap_or("null")))),
        }
    }

    fn is_valid(plate: &str) -> bool {
        let chars = plate.chars().collect::<Vec<_>>();
        if chars.len() != PLATE_LENGTH {
            return false;
        }
        let (letters, digits) = chars.split_at(LETTER_PREFIX);
        letters.iter().all(char::is_ascii_alphabetic) && digits.iter().all(char::is_ascii_digit)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw plate string.
    pub fn matches(&self, plate: &str) -> bool {
        self.0.to_lowercase() == plate.trim().to_lowercase()
    }
}

impl Display for LicensePlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}
