pub mod governance_errors;

pub use governance_errors::*;
