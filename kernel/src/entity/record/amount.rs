use std::fmt::Display;

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalAmount(f64);

impl RentalAmount {
    pub fn new(amount: impl Into<f64>) -> Self {
        Self(amount.into())
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Display for RentalAmount {
    /// Shortest text that parses back to the same value, always with a decimal point.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod test {
    use crate::entity::RentalAmount;

    #[test]
    fn display_keeps_decimal_point() {
        assert_eq!(RentalAmount::new(100.0).to_string(), "100.0");
        assert_eq!(RentalAmount::new(49.95).to_string(), "49.95");
        assert_eq!(RentalAmount::new(0.0).to_string(), "0.0");
    }
}
