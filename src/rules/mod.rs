pub mod numeral;
pub mod time;
