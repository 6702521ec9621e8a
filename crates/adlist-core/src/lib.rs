pub mod config;
pub mod logging;

pub mod apply;
pub mod error;
pub mod list;
pub mod reload;
pub mod storage;

pub use error::{Error, Result};
