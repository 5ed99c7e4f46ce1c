use error_stack::Report;

use kernel::prelude::entity::{CustomerId, LicensePlate, VehicleStatus};
use kernel::KernelError;

/// Result of a registry mutation (add, rent or return).
#[derive(Debug)]
#[must_use]
pub enum Outcome {
    /// Accepted and written to the backing file.
    Applied,
    /// Accepted in memory, but the file append failed. The mutation is kept.
    Unpersisted(Report<KernelError>),
    /// Refused; nothing changed.
    Rejected(Rejection),
}

impl Outcome {
    /// Whether the in-memory state changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::Rejected(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }

    pub fn persistence_error(&self) -> Option<&Report<KernelError>> {
        match self {
            Outcome::Unpersisted(report) => Some(report),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("A vehicle with plate {0} already exists.")]
    DuplicateVehicle(LicensePlate),
    #[error("A customer with ID {0} already exists.")]
    DuplicateCustomer(CustomerId),
    #[error("A vehicle needs a license plate before it can be registered.")]
    MissingPlate,
    #[error("No vehicle with plate {0} is registered.")]
    UnknownVehicle(String),
    #[error("No customer with ID {0} is registered.")]
    UnknownCustomer(CustomerId),
    #[error("Vehicle {plate} is not available for renting (status: {status}).")]
    NotAvailable {
        plate: LicensePlate,
        status: VehicleStatus,
    },
    #[error("Vehicle {plate} is not rented (status: {status}).")]
    NotRented {
        plate: LicensePlate,
        status: VehicleStatus,
    },
}
