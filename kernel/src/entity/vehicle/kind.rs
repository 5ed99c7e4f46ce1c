use serde::{Deserialize, Serialize};

pub const DEFAULT_CAR_SEATS: u32 = 5;

/// Variant-specific payload of a [`Vehicle`](crate::entity::Vehicle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VehicleKind {
    Car { seats: u32 },
    Minibus { accessible: bool },
    PickupTruck { cargo_size: f64, has_trailer: bool },
}

impl VehicleKind {
    /// Tag written to the vehicles file.
    pub fn type_name(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "Car",
            VehicleKind::Minibus { .. } => "Minibus",
            VehicleKind::PickupTruck { .. } => "PickupTruck",
        }
    }

    /// Label used in reports and log messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleKind::Car { .. } => "Car",
            VehicleKind::Minibus { .. } => "Minibus",
            VehicleKind::PickupTruck { .. } => "Pickup Truck",
        }
    }

    /// Resolves a stored tag to the variant with its default payload.
    ///
    /// Payload fields are not persisted, so a reloaded vehicle always carries
    /// the defaults.
    pub fn from_type_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("Car") {
            Some(VehicleKind::Car {
                seats: DEFAULT_CAR_SEATS,
            })
        } else if name.eq_ignore_ascii_case("Minibus") {
            Some(VehicleKind::Minibus { accessible: false })
        } else if name.eq_ignore_ascii_case("PickupTruck")
            || name.eq_ignore_ascii_case("Pickup Truck")
        {
            Some(VehicleKind::PickupTruck {
                cargo_size: 0.0,
                has_trailer: false,
            })
        } else {
            None
        }
    }

    pub(crate) fn detail(&self) -> String {
        match self {
            VehicleKind::Car { seats } => format!(" | Seats: {seats}"),
            VehicleKind::Minibus { accessible } => {
                format!(" | Accessible: {}", yes_no(*accessible))
            }
            VehicleKind::PickupTruck {
                cargo_size,
                has_trailer,
            } => format!(
                " | Cargo Size: {cargo_size:.1} | Trailer: {}",
                yes_no(*has_trailer)
            ),
        }
    }
}

impl Default for VehicleKind {
    fn default() -> Self {
        VehicleKind::Car {
            seats: DEFAULT_CAR_SEATS,
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod test {
    use crate::entity::VehicleKind;

    #[test]
    fn type_names_resolve_case_insensitively() {
        assert!(matches!(
            VehicleKind::from_type_name("car"),
            Some(VehicleKind::Car { seats: 5 })
        ));
        assert!(matches!(
            VehicleKind::from_type_name("MINIBUS"),
            Some(VehicleKind::Minibus { accessible: false })
        ));
        assert!(matches!(
            VehicleKind::from_type_name("Pickup Truck"),
            Some(VehicleKind::PickupTruck { .. })
        ));
        assert!(matches!(
            VehicleKind::from_type_name("pickuptruck"),
            Some(VehicleKind::PickupTruck { .. })
        ));
        assert_eq!(VehicleKind::from_type_name("Tractor"), None);
    }

    #[test]
    fn display_name_differs_from_stored_tag_for_trucks() {
        let truck = VehicleKind::PickupTruck {
            cargo_size: 1.5,
            has_trailer: true,
        };
        assert_eq!(truck.type_name(), "PickupTruck");
        assert_eq!(truck.display_name(), "Pickup Truck");
    }
}
