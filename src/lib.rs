pub mod arch;
pub mod builder;
pub mod config;
pub mod error;
pub mod initialization;

pub use error::{InitErr, Result};
