pub mod feed_commands;
pub mod qr_commands;
