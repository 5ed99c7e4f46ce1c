use std::path::{Path, PathBuf};

use error_stack::{Report, ResultExt};
use tracing::warn;

use kernel::interface::query::{Loaded, VehicleQuery};
use kernel::interface::update::VehicleModifier;
use kernel::prelude::entity::{Vehicle, VehicleKind};
use kernel::KernelError;

use crate::database::flatfile::LineFile;
use crate::error::ConvertError;

const VEHICLE_FIELDS: usize = 5;

/// `plate,make,model,year,typeName`
#[derive(Debug, Clone)]
pub struct FlatFileVehicleRepository {
    file: LineFile,
}

impl FlatFileVehicleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: LineFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl VehicleQuery for FlatFileVehicleRepository {
    fn find_all(&self) -> error_stack::Result<Loaded<Vehicle>, KernelError> {
        self.file.load(VEHICLE_FIELDS, FlatFileVehicleInternal::parse)
    }
}

impl VehicleModifier for FlatFileVehicleRepository {
    fn create(&self, vehicle: &Vehicle) -> error_stack::Result<(), KernelError> {
        let line = FlatFileVehicleInternal::format(vehicle)?;
        self.file.append(&line)
    }
}

pub(in crate::database) struct FlatFileVehicleInternal;

impl FlatFileVehicleInternal {
    fn format(vehicle: &Vehicle) -> error_stack::Result<String, KernelError> {
        let plate = vehicle.license_plate().ok_or_else(|| {
            Report::new(KernelError::InvalidArgument)
                .attach_printable("cannot store a vehicle without a license plate")
        })?;
        Ok(format!(
            "{},{},{},{},{}",
            plate,
            vehicle.make(),
            vehicle.model(),
            vehicle.year().as_ref(),
            vehicle.kind().type_name()
        ))
    }

    fn parse(fields: &[&str]) -> error_stack::Result<Option<Vehicle>, KernelError> {
        let (plate, make, model, year, type_name) =
            (fields[0], fields[1], fields[2], fields[3], fields[4]);
        let year = year.parse::<i32>().convert_error()?;
        let Some(kind) = VehicleKind::from_type_name(type_name) else {
            warn!("skipping vehicle {plate} with unknown type {type_name:?}");
            return Ok(None);
        };
        let vehicle = Vehicle::with_plate(plate, make, model, year, kind)
            .change_context(KernelError::Parse)?;
        Ok(Some(vehicle))
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::tempdir;

    use kernel::interface::query::VehicleQuery;
    use kernel::interface::update::VehicleModifier;
    use kernel::prelude::entity::{Vehicle, VehicleKind, VehicleStatus};
    use kernel::KernelError;

    use crate::database::FlatFileVehicleRepository;

    #[test]
    fn appended_vehicles_reload() -> error_stack::Result<(), KernelError> {
        let dir = tempdir().expect("temp dir");
        let repository = FlatFileVehicleRepository::new(dir.path().join("vehicles.txt"));

        let car = Vehicle::with_plate("AAA100", "Toyota", "Corolla", 2020, VehicleKind::Car { seats: 7 })?;
        let bus = Vehicle::with_plate(
            "bus200",
            "Ford",
            "Transit",
            2017,
            VehicleKind::Minibus { accessible: true },
        )?;
        let truck = Vehicle::with_plate(
            "TRK300",
            "Nissan",
            "Navara",
            2021,
            VehicleKind::PickupTruck {
                cargo_size: 2.5,
                has_trailer: true,
            },
        )?;
        for vehicle in [&car, &bus, &truck] {
            repository.create(vehicle)?;
        }

        let content = fs::read_to_string(repository.path()).expect("vehicles file");
        assert_eq!(
            content,
            "AAA100,Toyota,Corolla,2020,Car\n\
             BUS200,Ford,Transit,2017,Minibus\n\
             TRK300,Nissan,Navara,2021,PickupTruck\n"
        );

        let loaded = repository.find_all()?;
        assert!(loaded.error().is_none());
        let loaded = loaded.items();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].plate_label(), "AAA100");
        assert_eq!(loaded[0].make().as_str(), "Toyota");
        assert_eq!(loaded[0].model().as_str(), "Corolla");
        assert_eq!(*loaded[0].year().as_ref(), 2020);
        assert_eq!(loaded[0].status(), VehicleStatus::Available);
        // payload is not persisted and comes back as the variant default
        assert_eq!(loaded[0].kind(), &VehicleKind::Car { seats: 5 });
        assert_eq!(loaded[1].kind(), &VehicleKind::Minibus { accessible: false });
        assert_eq!(loaded[2].kind().type_name(), "PickupTruck");
        Ok(())
    }

    #[test]
    fn short_and_unknown_lines_are_skipped() -> error_stack::Result<(), KernelError> {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("vehicles.txt");
        fs::write(
            &path,
            "AAA100,Toyota,Corolla\n\
             \n\
             BBB200,John,Deere,2001,Tractor\n\
             CCC300,Ford,Ranger,2019,Pickup Truck\n\
             DDD400,Vw,Crafter,2015,minibus\n",
        )
        .expect("write fixture");

        let loaded = FlatFileVehicleRepository::new(path).find_all()?;
        assert!(loaded.error().is_none());
        let plates = loaded
            .items()
            .iter()
            .map(|v| v.plate_label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(plates, vec!["CCC300", "DDD400"]);
        Ok(())
    }

    #[test]
    fn bad_year_stops_the_file_but_keeps_earlier_lines() -> error_stack::Result<(), KernelError> {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("vehicles.txt");
        fs::write(
            &path,
            "AAA100,Toyota,Corolla,2020,Car\n\
             BBB200,Honda,Civic,twenty,Car\n\
             CCC300,Mazda,Demio,2012,Car\n",
        )
        .expect("write fixture");

        let loaded = FlatFileVehicleRepository::new(path).find_all()?;
        assert_eq!(loaded.items().len(), 1);
        let error = loaded.error().expect("year should fail to parse");
        assert_eq!(error.current_context(), &KernelError::Parse);
        Ok(())
    }

    #[test]
    fn malformed_plate_stops_the_file() -> error_stack::Result<(), KernelError> {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("vehicles.txt");
        fs::write(&path, "null,Toyota,Corolla,2020,Car\nAAA100,Kia,Rio,2016,Car\n")
            .expect("write fixture");

        let loaded = FlatFileVehicleRepository::new(path).find_all()?;
        assert!(loaded.items().is_empty());
        assert_eq!(
            loaded.error().map(|e| *e.current_context()),
            Some(KernelError::Parse)
        );
        Ok(())
    }

    #[test]
    fn vehicle_without_plate_is_not_written() {
        let dir = tempdir().expect("temp dir");
        let repository = FlatFileVehicleRepository::new(dir.path().join("vehicles.txt"));
        let vehicle = Vehicle::new("Toyota", "Yaris", 2010, VehicleKind::default());

        let error = repository.create(&vehicle).expect_err("plate is required");
        assert_eq!(error.current_context(), &KernelError::InvalidArgument);
        assert!(!repository.path().exists());
    }

    #[test]
    fn non_ascii_plate_never_reaches_the_file() -> error_stack::Result<(), KernelError> {
        let dir = tempdir().expect("temp dir");
        let repository = FlatFileVehicleRepository::new(dir.path().join("vehicles.txt"));

        let mut vehicle = Vehicle::new("Vw", "Golf", 2019, VehicleKind::default());
        assert!(vehicle.set_license_plate("ßßß123").is_err());
        assert!(repository.create(&vehicle).is_err());

        let first = Vehicle::with_plate("abc123", "Vw", "Golf", 2019, VehicleKind::default())?;
        let second = Vehicle::with_plate("DEF456", "Kia", "Rio", 2016, VehicleKind::default())?;
        repository.create(&first)?;
        repository.create(&second)?;

        let loaded = repository.find_all()?;
        assert!(loaded.error().is_none());
        let plates = loaded
            .items()
            .iter()
            .map(|v| v.plate_label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(plates, vec!["ABC123", "DEF456"]);
        Ok(())
    }
}
