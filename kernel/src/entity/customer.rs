mod id;
mod name;

pub use self::{id::*, name::*};
use destructure::Destructure;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Destructure, References)]
pub struct Customer {
    customer_id: CustomerId,
    customer_name: CustomerName,
}

impl Customer {
    pub fn new(customer_id: CustomerId, customer_name: CustomerName) -> Self {
        Self {
            customer_id,
            customer_name,
        }
    }
}

impl Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Customer ID: {} | Name: {}",
            self.customer_id, self.customer_name
        )
    }
}
