//! Tagging Question Application
//!
//! A terminal host for the tagging question widget: loads a tag dataset,
//! renders the pool and answer area as text, and turns typed commands
//! into engine operations.

mod app;
mod commands;
mod error;
mod render;

pub use app::{App, AppConfig};
pub use commands::{Command, CommandHelp, CommandRegistry};
pub use error::AppError;
pub use render::render_view;
