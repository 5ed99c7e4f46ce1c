use crate::entity::RentalRecord;
use crate::KernelError;

pub trait RentalRecordModifier: 'static + Sync + Send {
    fn create(&self, record: &RentalRecord) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnRentalRecordModifier: 'static + Sync + Send {
    type RentalRecordModifier: RentalRecordModifier;
    fn rental_record_modifier(&self) -> &Self::RentalRecordModifier;
}
