//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod catalog_file;
pub mod config;
pub mod pokeapi;
mod pokeapi_types;
pub mod ports;
pub mod storage;
