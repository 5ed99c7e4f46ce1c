use crate::entity::Customer;
use crate::KernelError;

pub trait CustomerModifier: 'static + Sync + Send {
    fn create(&self, customer: &Customer) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCustomerModifier: 'static + Sync + Send {
    type CustomerModifier: CustomerModifier;
    fn customer_modifier(&self) -> &Self::CustomerModifier;
}
