#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod services;
pub mod tools;


pub use config::Config;
pub use error::*;
pub use services::*;
pub use tools::snapshot::OutputSnapshot;
