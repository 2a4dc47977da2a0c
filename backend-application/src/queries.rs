pub mod event_queries;
pub mod qr_queries;
