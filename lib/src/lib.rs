pub mod env_keys;
pub mod config;
pub mod utilities;
pub mod mood;
pub mod tables;
pub mod service;
pub mod handlers;
pub mod client;
