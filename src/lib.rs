pub mod errors;
pub mod units;
pub mod formula;
pub mod analysis;
pub mod parser;
pub mod form;
