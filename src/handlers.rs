pub mod client_config;
pub mod health;
