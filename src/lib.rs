pub mod api;
#[path = "bootstrap/app_bootstrap.rs"]
pub mod app_bootstrap;
pub mod auth;
pub mod conf;
pub mod context;
pub mod error;
pub mod export;
pub mod model;
pub mod repo;
pub mod session;
pub mod store;
pub mod upload;
pub mod view;
