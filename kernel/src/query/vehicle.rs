use crate::entity::Vehicle;
use crate::query::Loaded;
use crate::KernelError;

pub trait VehicleQuery: 'static + Sync + Send {
    fn find_all(&self) -> error_stack::Result<Loaded<Vehicle>, KernelError>;
}

pub trait DependOnVehicleQuery: 'static + Sync + Send {
    type VehicleQuery: VehicleQuery;
    fn vehicle_query(&self) -> &Self::VehicleQuery;
}
