//! # StudyDesk
//!
//! Development asset host for the StudyDesk study dashboard.
//!
//! The dashboard itself is a static multi-page site whose behavior lives in
//! the `studydesk-ui` WASM crate. This crate serves that site: pages, the
//! shared `_sidebar.html` / `_header.html` fragments, and the compiled
//! bundle, over plain HTTP GET.
//!
//! ## Modules
//!
//! - [`config`]: TOML + environment configuration
//! - [`server`]: Axum router, static file service and health probes

pub mod config;
pub mod server;

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
pub use server::{build_router, serve, AppState, ServerError};
