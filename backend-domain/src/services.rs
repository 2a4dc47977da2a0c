// Domain services

pub mod aggregator;
pub mod bounded_stream;
pub mod filter;

pub use aggregator::*;
pub use bounded_stream::*;
pub use filter::*;
