pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod propagate;
pub mod ui;
pub mod workspace;

pub use error::{Result, VerstampError};
