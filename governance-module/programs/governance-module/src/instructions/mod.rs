pub mod execution;
pub mod governor;
pub mod proposal;
pub mod vote;
