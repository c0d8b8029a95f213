pub mod governance_events;

pub use governance_events::*;
