pub mod config;
pub mod moneris_service;
