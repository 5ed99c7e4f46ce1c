mod customer;
mod history;
mod record;
mod vehicle;

pub use self::{customer::*, history::*, record::*, vehicle::*};
