pub mod config;
pub mod feed;
pub mod seed;

pub use config::*;
pub use feed::*;
pub use seed::*;
