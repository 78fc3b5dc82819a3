// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod browse;
pub mod card;
pub mod cli;
pub mod error;
pub mod gui;
pub mod lookup;
pub mod normalize;
pub mod progress;
pub mod registry;
pub mod resolve;
pub mod runner;
pub mod store;
