// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod categories;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub mod catalog;
pub mod detect;
pub mod digest;
pub mod mail;
pub mod progress;
pub mod runner;
pub mod snapshot;
pub mod store;
