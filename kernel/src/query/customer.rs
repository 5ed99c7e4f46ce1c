use crate::entity::Customer;
use crate::query::Loaded;
use crate::KernelError;

pub trait CustomerQuery: 'static + Sync + Send {
    fn find_all(&self) -> error_stack::Result<Loaded<Customer>, KernelError>;
}

pub trait DependOnCustomerQuery: 'static + Sync + Send {
    type CustomerQuery: CustomerQuery;
    fn customer_query(&self) -> &Self::CustomerQuery;
}
