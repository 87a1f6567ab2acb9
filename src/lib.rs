pub mod api;
pub mod config;
pub mod consts;
pub mod draws;
pub mod error;
pub mod export;
pub mod loader;
pub mod scorer;
pub mod selector;
pub mod stats;
pub mod strategies;
// cmd and reports belong to the binary (main.rs).
