mod env_helper;
mod service_config;

pub use service_config::ServiceConfig;
