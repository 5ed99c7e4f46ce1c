use error_stack::Report;

use kernel::KernelError;

/// What happened while reading one backing file at startup.
#[derive(Debug, Default)]
pub struct FileLoad {
    pub loaded: usize,
    /// Duplicates and records whose vehicle or customer is unknown.
    pub skipped: usize,
    /// Set when the file could not be read or a line failed to parse.
    pub error: Option<Report<KernelError>>,
}

impl FileLoad {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub vehicles: FileLoad,
    pub customers: FileLoad,
    pub records: FileLoad,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.vehicles.is_complete() && self.customers.is_complete() && self.records.is_complete()
    }
}
