pub mod config;
pub mod preflight;
pub mod services;
pub mod submit_commands;

pub use config::SubmitConfig;
