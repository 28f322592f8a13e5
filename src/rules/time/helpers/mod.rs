pub mod calendar;
pub mod months;
pub mod vocab;

pub use vocab::*;
