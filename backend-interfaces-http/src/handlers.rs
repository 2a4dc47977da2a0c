pub mod event_handlers;
pub mod ops_handlers;
pub mod qr_handlers;

pub use event_handlers::*;
pub use ops_handlers::*;
pub use qr_handlers::*;
