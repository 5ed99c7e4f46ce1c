mod kind;
mod name;
mod plate;
mod status;
mod year;

pub use self::{kind::*, name::*, plate::*, status::*, year::*};
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Vehicle {
    license_plate: Option<LicensePlate>,
    make: VehicleMake,
    model: VehicleModel,
    year: VehicleYear,
    status: VehicleStatus,
    kind: VehicleKind,
}

impl Vehicle {
    pub fn new<'a, 'b>(
        make: impl Into<Option<&'a str>>,
        model: impl Into<Option<&'b str>>,
        year: impl Into<i32>,
        kind: VehicleKind,
    ) -> Self {
        Self {
            license_plate: None,
            make: VehicleMake::new(make),
            model: VehicleModel::new(model),
            year: VehicleYear::new(year),
            status: VehicleStatus::Available,
            kind,
        }
    }

    /// Builds a vehicle whose plate is already known, as when reading it back
    /// from storage.
    pub fn with_plate<'a, 'b>(
        license_plate: &str,
        make: impl Into<Option<&'a str>>,
        model: impl Into<Option<&'b str>>,
        year: impl Into<i32>,
        kind: VehicleKind,
    ) -> error_stack::Result<Self, KernelError> {
        let mut vehicle = Self::new(make, model, year, kind);
        vehicle.set_license_plate(license_plate)?;
        Ok(vehicle)
    }

    /// Assigns a new plate. The vehicle is left untouched when `plate` is invalid.
    pub fn set_license_plate<'a>(
        &mut self,
        plate: impl Into<Option<&'a str>>,
    ) -> error_stack::Result<(), KernelError> {
        self.license_plate = Some(LicensePlate::new(plate)?);
        Ok(())
    }

    pub fn set_status(&mut self, status: VehicleStatus) {
        self.status = status;
    }

    pub fn license_plate(&self) -> Option<&LicensePlate> {
        self.license_plate.as_ref()
    }

    pub fn make(&self) -> &VehicleMake {
        &self.make
    }

    pub fn model(&self) -> &VehicleModel {
        &self.model
    }

    pub fn year(&self) -> &VehicleYear {
        &self.year
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn info(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {} |{}",
            self.plate_label(),
            self.make,
            self.model,
            self.year.as_ref(),
            self.status,
            self.kind.detail()
        )
    }

    pub fn plate_label(&self) -> &str {
        self.license_plate
            .as_ref()
            .map(LicensePlate::as_str)
            .unwrap_or("null")
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{Vehicle, VehicleKind, VehicleStatus};
    use crate::KernelError;

    fn corolla() -> Vehicle {
        Vehicle::new("Toyota", "Corolla", 2020, VehicleKind::Car { seats: 5 })
    }

    #[test]
    fn new_vehicle_is_available_without_plate() {
        let vehicle = corolla();
        assert_eq!(vehicle.status(), VehicleStatus::Available);
        assert!(vehicle.license_plate().is_none());
        assert_eq!(vehicle.make().as_str(), "Toyota");
        assert_eq!(*vehicle.year().as_ref(), 2020);
    }

    #[test]
    fn set_license_plate_stores_uppercase() -> error_stack::Result<(), KernelError> {
        let mut vehicle = corolla();
        vehicle.set_license_plate("AAA100")?;
        assert_eq!(vehicle.plate_label(), "AAA100");

        vehicle.set_license_plate("abc567")?;
        assert_eq!(vehicle.plate_label(), "ABC567");
        Ok(())
    }

    #[test]
    fn invalid_plate_keeps_previous_value() -> error_stack::Result<(), KernelError> {
        let mut vehicle = corolla();
        vehicle.set_license_plate("ZZZ999")?;

        assert!(vehicle.set_license_plate("AAA1000").is_err());
        assert!(vehicle.set_license_plate("ZZZ99").is_err());
        assert!(vehicle.set_license_plate("").is_err());
        assert!(vehicle.set_license_plate(None::<&str>).is_err());
        assert_eq!(vehicle.plate_label(), "ZZZ999");
        Ok(())
    }

    #[test]
    fn default_vehicle_is_unknown_car() {
        let vehicle = Vehicle::default();
        assert_eq!(vehicle.make().as_str(), "Unknown");
        assert_eq!(vehicle.model().as_str(), "Unknown");
        assert_eq!(*vehicle.year().as_ref(), 0);
        assert_eq!(vehicle.kind().type_name(), "Car");
    }

    #[test]
    fn info_appends_variant_detail() -> error_stack::Result<(), KernelError> {
        let bus = Vehicle::with_plate(
            "BUS001",
            "mercedes",
            "sprinter",
            2018,
            VehicleKind::Minibus { accessible: true },
        )?;
        assert_eq!(
            bus.info(),
            "| BUS001 | Mercedes | Sprinter | 2018 | Available | | Accessible: Yes"
        );
        Ok(())
    }
}
