use error_stack::Report;
use tracing::{error, info, warn};

use kernel::interface::query::{
    CustomerQuery, DependOnCustomerQuery, DependOnRentalRecordQuery, DependOnVehicleQuery,
    Loaded, RentalRecordQuery, VehicleQuery,
};
use kernel::interface::update::{
    CustomerModifier, DependOnCustomerModifier, DependOnRentalRecordModifier,
    DependOnVehicleModifier, RentalRecordModifier, VehicleModifier,
};
use kernel::prelude::entity::{
    Customer, CustomerId, RecordDate, RecordType, RentalAmount, RentalHistory, RentalRecord,
    Vehicle, VehicleStatus,
};
use kernel::KernelError;

use crate::transfer::{FileLoad, LoadReport, Outcome, Rejection};

/// Registry of vehicles and customers plus the rental history.
///
/// Every accepted mutation is appended to the store immediately. A failed
/// append is logged and reported through [`Outcome::Unpersisted`] but never
/// rolls back the in-memory change.
#[derive(Debug)]
pub struct RentalSystem<Store> {
    store: Store,
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    history: RentalHistory,
}

impl<Store> RentalSystem<Store> {
    /// An empty registry. Nothing is read from `store`.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            vehicles: Vec::new(),
            customers: Vec::new(),
            history: RentalHistory::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn history(&self) -> &RentalHistory {
        &self.history
    }

    /// Case-insensitive lookup.
    pub fn find_vehicle_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicle_index(plate).map(|index| &self.vehicles[index])
    }

    /// Mutable access for direct status changes such as maintenance.
    pub fn find_vehicle_by_plate_mut(&mut self, plate: &str) -> Option<&mut Vehicle> {
        let index = self.vehicle_index(plate)?;
        Some(&mut self.vehicles[index])
    }

    pub fn find_customer_by_id(&self, id: CustomerId) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|customer| *customer.customer_id() == id)
    }

    fn vehicle_index(&self, plate: &str) -> Option<usize> {
        self.vehicles.iter().position(|vehicle| {
            vehicle
                .license_plate()
                .is_some_and(|registered| registered.matches(plate))
        })
    }
}

impl<Store> RentalSystem<Store>
where
    Store: DependOnVehicleModifier + DependOnCustomerModifier + DependOnRentalRecordModifier,
{
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Outcome {
        let Some(plate) = vehicle.license_plate() else {
            return reject(Rejection::MissingPlate);
        };
        if self.find_vehicle_by_plate(plate.as_str()).is_some() {
            return reject(Rejection::DuplicateVehicle(plate.clone()));
        }

        let persisted = self.store.vehicle_modifier().create(&vehicle);
        self.vehicles.push(vehicle);
        settle(persisted, "vehicle")
    }

    pub fn add_customer(&mut self, customer: Customer) -> Outcome {
        let id = *customer.customer_id();
        if self.find_customer_by_id(id).is_some() {
            return reject(Rejection::DuplicateCustomer(id));
        }

        let persisted = self.store.customer_modifier().create(&customer);
        self.customers.push(customer);
        settle(persisted, "customer")
    }

    /// Moves an Available vehicle to Rented and logs a RENT record.
    pub fn rent_vehicle(
        &mut self,
        plate: &str,
        customer_id: CustomerId,
        date: RecordDate,
        amount: RentalAmount,
    ) -> Outcome {
        self.transition(RecordType::Rent, plate, customer_id, date, amount)
    }

    /// Moves a Rented vehicle back to Available and logs a RETURN record.
    pub fn return_vehicle(
        &mut self,
        plate: &str,
        customer_id: CustomerId,
        date: RecordDate,
        extra_fees: RentalAmount,
    ) -> Outcome {
        self.transition(RecordType::Return, plate, customer_id, date, extra_fees)
    }

    fn transition(
        &mut self,
        record_type: RecordType,
        plate: &str,
        customer_id: CustomerId,
        date: RecordDate,
        amount: RentalAmount,
    ) -> Outcome {
        let Some(customer) = self.find_customer_by_id(customer_id) else {
            return reject(Rejection::UnknownCustomer(customer_id));
        };
        let customer_name = customer.customer_name().clone();
        let Some(index) = self.vehicle_index(plate) else {
            return reject(Rejection::UnknownVehicle(plate.trim().to_uppercase()));
        };

        let vehicle = &mut self.vehicles[index];
        let Some(license_plate) = vehicle.license_plate().cloned() else {
            return reject(Rejection::MissingPlate);
        };
        let status = vehicle.status();
        let next = match (record_type, status) {
            (RecordType::Rent, VehicleStatus::Available) => VehicleStatus::Rented,
            (RecordType::Return, VehicleStatus::Rented) => VehicleStatus::Available,
            (RecordType::Rent, _) => {
                return reject(Rejection::NotAvailable {
                    plate: license_plate,
                    status,
                })
            }
            (RecordType::Return, _) => {
                return reject(Rejection::NotRented {
                    plate: license_plate,
                    status,
                })
            }
        };

        vehicle.set_status(next);
        announce(vehicle, record_type);
        match record_type {
            RecordType::Rent => info!("Vehicle rented to {customer_name}"),
            RecordType::Return => info!("Vehicle returned by {customer_name}"),
        }

        let record = RentalRecord::new(record_type, license_plate, customer_id, date, amount);
        let persisted = self.store.rental_record_modifier().create(&record);
        self.history.add_record(record);
        settle(persisted, "rental record")
    }
}

impl<Store> RentalSystem<Store>
where
    Store: DependOnVehicleQuery + DependOnCustomerQuery + DependOnRentalRecordQuery,
{
    /// Builds the registry from the store: vehicles, then customers, then
    /// records, so record references resolve against what is already loaded.
    ///
    /// A file that fails part-way keeps the entries read before the failure;
    /// the other files still load. Vehicle status is replayed from each
    /// vehicle's latest record.
    pub fn load(store: Store) -> (Self, LoadReport) {
        let mut system = Self::new(store);
        let report = system.load_data();
        (system, report)
    }

    fn load_data(&mut self) -> LoadReport {
        let vehicles = self.load_vehicles();
        let customers = self.load_customers();
        let records = self.load_records();
        self.replay_status();
        info!(
            "loaded {} vehicles, {} customers, {} rental records",
            vehicles.loaded, customers.loaded, records.loaded
        );
        LoadReport {
            vehicles,
            customers,
            records,
        }
    }

    fn load_vehicles(&mut self) -> FileLoad {
        let (vehicles, error) = unpack(self.store.vehicle_query().find_all(), "vehicles");
        let mut summary = FileLoad {
            error,
            ..FileLoad::default()
        };
        for vehicle in vehicles {
            let duplicate = vehicle
                .license_plate()
                .map_or(true, |plate| self.find_vehicle_by_plate(plate.as_str()).is_some());
            if duplicate {
                warn!("skipping duplicate vehicle {}", vehicle.plate_label());
                summary.skipped += 1;
                continue;
            }
            self.vehicles.push(vehicle);
            summary.loaded += 1;
        }
        summary
    }

    fn load_customers(&mut self) -> FileLoad {
        let (customers, error) = unpack(self.store.customer_query().find_all(), "customers");
        let mut summary = FileLoad {
            error,
            ..FileLoad::default()
        };
        for customer in customers {
            if self.find_customer_by_id(*customer.customer_id()).is_some() {
                warn!("skipping duplicate customer {}", customer.customer_id());
                summary.skipped += 1;
                continue;
            }
            self.customers.push(customer);
            summary.loaded += 1;
        }
        summary
    }

    fn load_records(&mut self) -> FileLoad {
        let (records, error) = unpack(self.store.rental_record_query().find_all(), "rental records");
        let mut summary = FileLoad {
            error,
            ..FileLoad::default()
        };
        for record in records {
            let resolved = self
                .find_vehicle_by_plate(record.license_plate().as_str())
                .is_some()
                && self.find_customer_by_id(*record.customer_id()).is_some();
            if !resolved {
                summary.skipped += 1;
                continue;
            }
            self.history.add_record(record);
            summary.loaded += 1;
        }
        summary
    }

    fn replay_status(&mut self) {
        for record in self.history.records() {
            let status = match record.record_type() {
                RecordType::Rent => VehicleStatus::Rented,
                RecordType::Return => VehicleStatus::Available,
            };
            if let Some(vehicle) = self
                .vehicles
                .iter_mut()
                .find(|vehicle| vehicle.license_plate() == Some(record.license_plate()))
            {
                vehicle.set_status(status);
            }
        }
    }
}

fn reject(rejection: Rejection) -> Outcome {
    info!("{rejection}");
    Outcome::Rejected(rejection)
}

fn settle(persisted: error_stack::Result<(), KernelError>, what: &str) -> Outcome {
    match persisted {
        Ok(()) => Outcome::Applied,
        Err(report) => {
            error!("Error saving {what}: {report:?}");
            Outcome::Unpersisted(report)
        }
    }
}

fn unpack<T>(
    result: error_stack::Result<Loaded<T>, KernelError>,
    file: &str,
) -> (Vec<T>, Option<Report<KernelError>>) {
    let (items, error) = match result {
        Ok(loaded) => loaded.into_parts(),
        Err(report) => (Vec::new(), Some(report)),
    };
    if let Some(report) = &error {
        error!("Error loading {file}: {report:?}");
    }
    (items, error)
}

fn announce(vehicle: &Vehicle, record_type: RecordType) {
    let verb = match record_type {
        RecordType::Rent => "rented",
        RecordType::Return => "returned",
    };
    info!(
        "{} {} has been {verb}.",
        vehicle.kind().display_name(),
        vehicle.plate_label()
    );
}
