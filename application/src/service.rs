mod rental;
mod report;

pub use self::rental::*;
