use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VehicleYear(i32);

impl VehicleYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }
}
