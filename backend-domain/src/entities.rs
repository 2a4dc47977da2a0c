// Domain entities

pub mod event_log;
pub mod qr_code;
pub mod runtime_config;
pub mod scan;

pub use event_log::*;
pub use qr_code::*;
pub use runtime_config::*;
pub use scan::*;
