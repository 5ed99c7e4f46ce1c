use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use tracing::debug;
use vodca::References;

use kernel::interface::query::{
    DependOnCustomerQuery, DependOnRentalRecordQuery, DependOnVehicleQuery, Loaded,
};
use kernel::interface::update::{
    DependOnCustomerModifier, DependOnRentalRecordModifier, DependOnVehicleModifier,
};
use kernel::KernelError;

use crate::env_or;
use crate::error::ConvertError;

pub use self::{customer::*, record::*, vehicle::*};

mod customer;
mod record;
mod vehicle;

static VEHICLES_FILE: &str = "RENTAL_VEHICLES_FILE";
static CUSTOMERS_FILE: &str = "RENTAL_CUSTOMERS_FILE";
static RECORDS_FILE: &str = "RENTAL_RECORDS_FILE";

pub const DEFAULT_VEHICLES_FILE: &str = "vehicles.txt";
pub const DEFAULT_CUSTOMERS_FILE: &str = "customers.txt";
pub const DEFAULT_RECORDS_FILE: &str = "rental_records.txt";

/// The three comma-separated files backing the rental registry.
#[derive(Debug, Clone, References)]
pub struct FlatFileDatabase {
    vehicles: FlatFileVehicleRepository,
    customers: FlatFileCustomerRepository,
    records: FlatFileRentalRecordRepository,
}

impl FlatFileDatabase {
    pub fn new(
        vehicles: impl Into<PathBuf>,
        customers: impl Into<PathBuf>,
        records: impl Into<PathBuf>,
    ) -> Self {
        Self {
            vehicles: FlatFileVehicleRepository::new(vehicles),
            customers: FlatFileCustomerRepository::new(customers),
            records: FlatFileRentalRecordRepository::new(records),
        }
    }

    /// Uses the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(DEFAULT_VEHICLES_FILE),
            dir.join(DEFAULT_CUSTOMERS_FILE),
            dir.join(DEFAULT_RECORDS_FILE),
        )
    }

    /// Reads `RENTAL_VEHICLES_FILE`, `RENTAL_CUSTOMERS_FILE` and
    /// `RENTAL_RECORDS_FILE`, defaulting to the working directory.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let vehicles = env_or(VEHICLES_FILE, DEFAULT_VEHICLES_FILE).convert_error()?;
        let customers = env_or(CUSTOMERS_FILE, DEFAULT_CUSTOMERS_FILE).convert_error()?;
        let records = env_or(RECORDS_FILE, DEFAULT_RECORDS_FILE).convert_error()?;
        Ok(Self::new(vehicles, customers, records))
    }
}

impl DependOnVehicleQuery for FlatFileDatabase {
    type VehicleQuery = FlatFileVehicleRepository;
    fn vehicle_query(&self) -> &Self::VehicleQuery {
        &self.vehicles
    }
}

impl DependOnVehicleModifier for FlatFileDatabase {
    type VehicleModifier = FlatFileVehicleRepository;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier {
        &self.vehicles
    }
}

impl DependOnCustomerQuery for FlatFileDatabase {
    type CustomerQuery = FlatFileCustomerRepository;
    fn customer_query(&self) -> &Self::CustomerQuery {
        &self.customers
    }
}

impl DependOnCustomerModifier for FlatFileDatabase {
    type CustomerModifier = FlatFileCustomerRepository;
    fn customer_modifier(&self) -> &Self::CustomerModifier {
        &self.customers
    }
}

impl DependOnRentalRecordQuery for FlatFileDatabase {
    type RentalRecordQuery = FlatFileRentalRecordRepository;
    fn rental_record_query(&self) -> &Self::RentalRecordQuery {
        &self.records
    }
}

impl DependOnRentalRecordModifier for FlatFileDatabase {
    type RentalRecordModifier = FlatFileRentalRecordRepository;
    fn rental_record_modifier(&self) -> &Self::RentalRecordModifier {
        &self.records
    }
}

/// A line-oriented text file opened in append mode for every write.
#[derive(Debug, Clone)]
pub(in crate::database) struct LineFile {
    path: PathBuf,
}

impl LineFile {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(in crate::database) fn path(&self) -> &Path {
        &self.path
    }

    pub(in crate::database) fn append(&self, line: &str) -> error_stack::Result<(), KernelError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .convert_error()
            .attach_printable_lazy(|| format!("failed to open {}", self.path.display()))?;
        writeln!(file, "{line}")
            .convert_error()
            .attach_printable_lazy(|| format!("failed to write {}", self.path.display()))?;
        debug!("appended to {}: {line}", self.path.display());
        Ok(())
    }

    /// Parses every line with at least `min_fields` fields, top to bottom.
    ///
    /// Shorter lines are skipped, `Ok(None)` from `parse` skips the line, and
    /// the first `Err` stops the read while keeping what was parsed so far.
    /// A missing file yields an empty result.
    pub(in crate::database) fn load<T>(
        &self,
        min_fields: usize,
        mut parse: impl FnMut(&[&str]) -> error_stack::Result<Option<T>, KernelError>,
    ) -> error_stack::Result<Loaded<T>, KernelError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Loaded::default()),
            Err(error) => {
                return Err::<Loaded<T>, _>(error)
                    .convert_error()
                    .attach_printable_lazy(|| format!("failed to read {}", self.path.display()))
            }
        };

        let mut items = Vec::new();
        for (index, line) in content.lines().enumerate() {
            let fields = split_fields(line);
            if fields.len() < min_fields {
                continue;
            }
            match parse(&fields) {
                Ok(Some(item)) => items.push(item),
                Ok(None) => {}
                Err(report) => {
                    let report = report.attach_printable(format!(
                        "{}:{}: {line}",
                        self.path.display(),
                        index + 1
                    ));
                    return Ok(Loaded::interrupted(items, report));
                }
            }
        }
        Ok(Loaded::complete(items))
    }
}

/// Splits on commas, dropping trailing empty fields.
pub(in crate::database) fn split_fields(line: &str) -> Vec<&str> {
    let mut fields = line.split(',').collect::<Vec<_>>();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
