mod detailed;
mod public;

pub use detailed::Detailed;
pub use public::Public;
