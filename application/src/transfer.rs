mod load;
mod outcome;

pub use self::{load::*, outcome::*};
