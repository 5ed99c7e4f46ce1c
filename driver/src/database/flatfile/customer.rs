use std::path::{Path, PathBuf};

use kernel::interface::query::{CustomerQuery, Loaded};
use kernel::interface::update::CustomerModifier;
use kernel::prelude::entity::{Customer, CustomerId, CustomerName};
use kernel::KernelError;

use crate::database::flatfile::LineFile;
use crate::error::ConvertError;

const CUSTOMER_FIELDS: usize = 2;

/// `id,name`
#[derive(Debug, Clone)]
pub struct FlatFileCustomerRepository {
    file: LineFile,
}

impl FlatFileCustomerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: LineFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl CustomerQuery for FlatFileCustomerRepository {
    fn find_all(&self) -> error_stack::Result<Loaded<Customer>, KernelError> {
        self.file.load(CUSTOMER_FIELDS, |fields| {
            let id = fields[0].parse::<i32>().convert_error()?;
            Ok(Some(Customer::new(
                CustomerId::new(id),
                CustomerName::new(fields[1]),
            )))
        })
    }
}

impl CustomerModifier for FlatFileCustomerRepository {
    fn create(&self, customer: &Customer) -> error_stack::Result<(), KernelError> {
        self.file.append(&format!(
            "{},{}",
            customer.customer_id(),
            customer.customer_name()
        ))
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::tempdir;

    use kernel::interface::query::CustomerQuery;
    use kernel::interface::update::CustomerModifier;
    use kernel::prelude::entity::{Customer, CustomerId, CustomerName};
    use kernel::KernelError;

    use crate::database::FlatFileCustomerRepository;

    #[test]
    fn appended_customers_reload() -> error_stack::Result<(), KernelError> {
        let dir = tempdir().expect("temp dir");
        let repository = FlatFileCustomerRepository::new(dir.path().join("customers.txt"));
        let george = Customer::new(CustomerId::new(1), CustomerName::new("George"));
        let ada = Customer::new(CustomerId::new(42), CustomerName::new("Ada Lovelace"));
        repository.create(&george)?;
        repository.create(&ada)?;

        let content = fs::read_to_string(repository.path()).expect("customers file");
        assert_eq!(content, "1,George\n42,Ada Lovelace\n");

        let loaded = repository.find_all()?;
        assert!(loaded.error().is_none());
        assert_eq!(loaded.items(), &[george, ada]);
        Ok(())
    }

    #[test]
    fn bad_id_stops_the_file() -> error_stack::Result<(), KernelError> {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("customers.txt");
        fs::write(&path, "7\n1,George\nx,Broken\n2,Later\n").expect("write fixture");

        let loaded = FlatFileCustomerRepository::new(path).find_all()?;
        let ids = loaded
            .items()
            .iter()
            .map(|c| *c.customer_id())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![CustomerId::new(1)]);
        assert_eq!(
            loaded.error().map(|e| *e.current_context()),
            Some(KernelError::Parse)
        );
        Ok(())
    }
}
