pub mod review;

pub use review::{ReviewError, ReviewService};
