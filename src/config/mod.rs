//! Configuration management module

pub mod home;

pub use home::{HomeConfig, HomeConfigLookup};
