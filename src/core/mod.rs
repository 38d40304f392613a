// src/core/mod.rs

pub mod error;
pub mod net;

pub use error::ScrapeError;
