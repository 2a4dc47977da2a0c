pub mod simulated_feed;
pub mod thread_rng;

pub use simulated_feed::*;
pub use thread_rng::*;
