//! ZoneDex Engine library.
//!
//! Aggregates the static zone catalog with live creature directory data and
//! presents it through the `zonedex` command line.
//!
//! ## Structure
//!
//! - `use_cases/` - Navigation, aggregation and detail orchestration
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Command line entry point and text rendering
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
