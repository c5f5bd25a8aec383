pub mod contract;
pub mod error;
pub mod input;
pub mod output;

pub use contract::{ContractAdapter, DecodedEvent};
pub use error::{AdaptResult, Error};
pub use input::adapt_input;
pub use output::adapt_output;
