use std::fmt::Display;

use serde::{Deserialize, Serialize};
use vodca::AsRefln;

const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefln)]
pub struct VehicleMake(String);

impl VehicleMake {
    pub fn new<'a>(make: impl Into<Option<&'a str>>) -> Self {
        Self(capitalize_or_unknown(make.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VehicleMake {
    fn default() -> Self {
        Self(UNKNOWN.to_string())
    }
}

impl Display for VehicleMake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefln)]
pub struct VehicleModel(String);

impl VehicleModel {
    pub fn new<'a>(model: impl Into<Option<&'a str>>) -> Self {
        Self(capitalize_or_unknown(model.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VehicleModel {
    fn default() -> Self {
        Self(UNKNOWN.to_string())
    }
}

impl Display for VehicleModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

fn capitalize_or_unknown(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    let mut chars = trimmed.chars();
    match chars.next() {
        None => UNKNOWN.to_string(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}
