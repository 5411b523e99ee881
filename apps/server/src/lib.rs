pub mod api;
pub mod cgi;
pub mod config;
pub mod error;
mod main_lib;

pub use main_lib::{build_state, init_tracing, init_tracing_with_writer, AppState};
