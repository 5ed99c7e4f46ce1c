mod amount;
mod date;
mod record_type;

pub use self::{amount::*, date::*, record_type::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

use crate::entity::{CustomerId, LicensePlate};

/// One RENT or RETURN transaction. Vehicle and customer are referenced by key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct RentalRecord {
    record_type: RecordType,
    license_plate: LicensePlate,
    customer_id: CustomerId,
    record_date: RecordDate,
    total_amount: RentalAmount,
}

impl RentalRecord {
    pub fn new(
        record_type: RecordType,
        license_plate: LicensePlate,
        customer_id: CustomerId,
        record_date: RecordDate,
        total_amount: RentalAmount,
    ) -> Self {
        Self {
            record_type,
            license_plate,
            customer_id,
            record_date,
            total_amount,
        }
    }
}
