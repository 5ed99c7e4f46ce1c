mod customer;
mod record;
mod vehicle;

pub use self::{customer::*, record::*, vehicle::*};
