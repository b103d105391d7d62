// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod log;
pub mod specs;
pub mod verify;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod store;
