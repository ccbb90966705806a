pub mod config;
pub mod delegate;
pub mod listener;
pub mod service;
pub mod telemetry;
