mod name;
pub mod status;
pub mod tags;

pub use name::{Stack, short_name};
