pub mod abi;
pub mod cairo_type;
pub mod constants;
pub mod error;
pub mod felt;
pub mod value;

// Re export libraries
pub use num_bigint;
