use std::fmt::Display;

use serde::{Deserialize, Serialize};

const RENT: &str = "RENT";
const RETURN: &str = "RETURN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    Rent,
    Return,
}

impl RecordType {
    pub fn tag(&self) -> &'static str {
        match self {
            RecordType::Rent => RENT,
            RecordType::Return => RETURN,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            RENT => Some(RecordType::Rent),
            RETURN => Some(RecordType::Return),
            _ => None,
        }
    }
}

impl Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.tag())
    }
}
