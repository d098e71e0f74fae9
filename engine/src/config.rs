pub mod chunk_config;
pub mod config_manager;
