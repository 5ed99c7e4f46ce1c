use std::path::{Path, PathBuf};

use tracing::warn;

use kernel::interface::query::{Loaded, RentalRecordQuery};
use kernel::interface::update::RentalRecordModifier;
use kernel::prelude::entity::{
    CustomerId, LicensePlate, RecordDate, RecordType, RentalAmount, RentalRecord,
};
use kernel::KernelError;

use crate::database::flatfile::LineFile;
use crate::error::ConvertError;

const RECORD_FIELDS: usize = 5;

/// `type,plate,customerId,isoDate,amount`
#[derive(Debug, Clone)]
pub struct FlatFileRentalRecordRepository {
    file: LineFile,
}

impl FlatFileRentalRecordRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: LineFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl RentalRecordQuery for FlatFileRentalRecordRepository {
    fn find_all(&self) -> error_stack::Result<Loaded<RentalRecord>, KernelError> {
        self.file.load(RECORD_FIELDS, FlatFileRecordInternal::parse)
    }
}

impl RentalRecordModifier for FlatFileRentalRecordRepository {
    fn create(&self, record: &RentalRecord) -> error_stack::Result<(), KernelError> {
        self.file.append(&FlatFileRecordInternal::format(record))
    }
}

pub(in crate::database) struct FlatFileRecordInternal;

impl FlatFileRecordInternal {
    fn format(record: &RentalRecord) -> String {
        format!(
            "{},{},{},{},{}",
            record.record_type(),
            record.license_plate(),
            record.customer_id(),
            record.record_date(),
            record.total_amount()
        )
    }

    fn parse(fields: &[&str]) -> error_stack::Result<Option<RentalRecord>, KernelError> {
        let (tag, plate) = (fields[0], fields[1]);
        let customer_id = fields[2].parse::<i32>().convert_error()?;
        let date = RecordDate::parse(fields[3]).convert_error()?;
        let amount = fields[4].trim().parse::<f64>().convert_error()?;

        let Some(record_type) = RecordType::from_tag(tag) else {
            warn!("skipping record with unknown type {tag:?}");
            return Ok(None);
        };
        // a plate that can never match a vehicle leaves the record unresolvable
        let Ok(license_plate) = LicensePlate::new(plate) else {
            return Ok(None);
        };
        Ok(Some(RentalRecord::new(
            record_type,
            license_plate,
            CustomerId::new(customer_id),
            date,
            RentalAmount::new(amount),
        )))
    }
}
