//! API layer - Command line entry point and text rendering.

pub mod browse;
pub mod cli;
pub mod render;

pub use browse::browse;
pub use cli::{run, Cli, Command, CommandOutput};
pub use render::{Renderer, Style};
