/// Command implementations.
pub mod fetch;

pub use fetch::run;
