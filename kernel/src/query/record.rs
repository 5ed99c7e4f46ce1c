use crate::entity::RentalRecord;
use crate::query::Loaded;
use crate::KernelError;

/// Reads stored records. Plates and customer ids are returned unresolved.
pub trait RentalRecordQuery: 'static + Sync + Send {
    fn find_all(&self) -> error_stack::Result<Loaded<RentalRecord>, KernelError>;
}

pub trait DependOnRentalRecordQuery: 'static + Sync + Send {
    type RentalRecordQuery: RentalRecordQuery;
    fn rental_record_query(&self) -> &Self::RentalRecordQuery;
}
