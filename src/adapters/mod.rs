// Adapters layer: concrete implementations of the domain ports (stores, clocks).

pub mod clock;
#[cfg(feature = "lambda")]
pub mod dynamodb;
pub mod local_file;
pub mod memory;
