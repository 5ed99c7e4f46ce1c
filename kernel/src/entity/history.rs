use serde::{Deserialize, Serialize};

use crate::entity::RentalRecord;

/// Append-only log of rental records in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RentalHistory {
    records: Vec<RentalRecord>,
}

impl RentalHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: RentalRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RentalRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;

    use crate::entity::{
        CustomerId, LicensePlate, RecordDate, RecordType, RentalAmount, RentalHistory,
        RentalRecord,
    };
    use crate::KernelError;

    #[test]
    fn keeps_insertion_order_and_duplicates() -> error_stack::Result<(), KernelError> {
        let record = |record_type| -> error_stack::Result<RentalRecord, KernelError> {
            Ok(RentalRecord::new(
                record_type,
                LicensePlate::new("AAA100")?,
                CustomerId::new(1),
                RecordDate::new(date!(2024 - 01 - 01)),
                RentalAmount::new(10.0),
            ))
        };
        let mut history = RentalHistory::new();
        history.add_record(record(RecordType::Rent)?);
        history.add_record(record(RecordType::Return)?);
        history.add_record(record(RecordType::Return)?);

        let types = history
            .iter()
            .map(|r| *r.record_type())
            .collect::<Vec<_>>();
        assert_eq!(
            types,
            vec![RecordType::Rent, RecordType::Return, RecordType::Return]
        );
        assert_eq!(history.len(), 3);
        Ok(())
    }
}
