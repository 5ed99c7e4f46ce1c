use crate::entity::Vehicle;
use crate::KernelError;

pub trait VehicleModifier: 'static + Sync + Send {
    fn create(&self, vehicle: &Vehicle) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnVehicleModifier: 'static + Sync + Send {
    type VehicleModifier: VehicleModifier;
    fn vehicle_modifier(&self) -> &Self::VehicleModifier;
}
