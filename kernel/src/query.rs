mod customer;
mod record;
mod vehicle;

pub use self::{customer::*, record::*, vehicle::*};
use error_stack::Report;

use crate::KernelError;

/// Entries read from a backing store, possibly cut short by a parse failure.
///
/// Entries read before the failure are kept; `interrupted` carries the
/// error that stopped the read.
#[derive(Debug)]
pub struct Loaded<T> {
    items: Vec<T>,
    interrupted: Option<Report<KernelError>>,
}

impl<T> Loaded<T> {
    pub fn complete(items: Vec<T>) -> Self {
        Self {
            items,
            interrupted: None,
        }
    }

    pub fn interrupted(items: Vec<T>, error: Report<KernelError>) -> Self {
        Self {
            items,
            interrupted: Some(error),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&Report<KernelError>> {
        self.interrupted.as_ref()
    }

    pub fn into_parts(self) -> (Vec<T>, Option<Report<KernelError>>) {
        (self.items, self.interrupted)
    }
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self::complete(Vec::new())
    }
}
