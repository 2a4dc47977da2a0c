// Domain value objects
pub mod event_category;
pub mod occupancy;
pub mod qr_category;
pub mod severity;

pub use event_category::*;
pub use occupancy::*;
pub use qr_category::*;
pub use severity::*;
