//! Recipe search client: an iced window and a CLI over one recipe provider.

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod utils;
