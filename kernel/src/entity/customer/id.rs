use std::fmt::Display;

use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Default, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn new(id: impl Into<i32>) -> Self {
        Self(id.into())
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
