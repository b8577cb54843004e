mod callable;
pub mod stats;

pub use callable::*;
