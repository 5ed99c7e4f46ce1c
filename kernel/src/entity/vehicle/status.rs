use std::fmt::Display;
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[default]
    Available,
    Held,
    Rented,
    UnderMaintenance,
    OutOfService,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 5] = [
        VehicleStatus::Available,
        VehicleStatus::Held,
        VehicleStatus::Rented,
        VehicleStatus::UnderMaintenance,
        VehicleStatus::OutOfService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::Held => "Held",
            VehicleStatus::Rented => "Rented",
            VehicleStatus::UnderMaintenance => "UnderMaintenance",
            VehicleStatus::OutOfService => "OutOfService",
        }
    }
}

impl Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Report::new(KernelError::InvalidArgument)
                    .attach_printable(format!("Unknown vehicle status: {s}"))
            })
    }
}
