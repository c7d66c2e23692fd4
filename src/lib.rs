#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

pub mod config;
pub mod core;
pub mod error;
pub mod gateway;

pub use config::Config;
pub use error::{ForgeError, Result, ValidationError};
