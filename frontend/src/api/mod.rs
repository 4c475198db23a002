pub mod client;
mod reset;
pub mod types;

pub use client::*;
pub use types::*;
