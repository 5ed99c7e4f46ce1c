use std::ops::Deref;
use std::sync::Arc;

use application::service::RentalSystem;
use application::transfer::{FileLoad, LoadReport};
use driver::database::FlatFileDatabase;
use kernel::KernelError;
use tracing::{info, warn};
use vodca::References;

use crate::request::ReportRequest;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init()?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

#[derive(References)]
pub struct Handler {
    rental: RentalSystem<FlatFileDatabase>,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let database = FlatFileDatabase::from_env()?;
        let (rental, report) = RentalSystem::load(database);
        log_load(&report);
        Ok(Self { rental })
    }

    pub fn render(&self, request: ReportRequest) -> String {
        match request {
            ReportRequest::Vehicles(status) => self.rental.display_vehicles(status),
            ReportRequest::Customers => self.rental.display_all_customers(),
            ReportRequest::History => self.rental.display_rental_history(),
            ReportRequest::All => [
                self.rental.display_vehicles(None),
                self.rental.display_all_customers(),
                self.rental.display_rental_history(),
            ]
            .concat(),
        }
    }
}

fn log_load(report: &LoadReport) {
    for (name, file) in [
        ("vehicles", &report.vehicles),
        ("customers", &report.customers),
        ("rental records", &report.records),
    ] {
        log_file(name, file);
    }
}

fn log_file(name: &str, file: &FileLoad) {
    if file.is_complete() {
        info!("{name}: {} loaded, {} skipped", file.loaded, file.skipped);
    } else {
        warn!(
            "{name}: {} loaded, {} skipped, stopped early",
            file.loaded, file.skipped
        );
    }
}
