use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;
use vodca::{AsRefln, Fromln};

const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar day of a transaction, written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RecordDate(Date);

impl RecordDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    pub fn parse(raw: &str) -> Result<Self, time::error::Parse> {
        Date::parse(raw.trim(), ISO_DATE).map(Self)
    }
}

impl Display for RecordDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.0.format(ISO_DATE).map_err(|_| std::fmt::Error)?;
        f.pad(&text)
    }
}
