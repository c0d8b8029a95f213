mod accounts;
mod contexts;

pub use accounts::*;
pub use contexts::*;
