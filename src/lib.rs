//! TUI Orrery (workspace facade crate).
//!
//! Re-exports the member crates under `tui_orrery::{core,input,term,types}`
//! and hosts the binary's settings and logging setup.

pub mod logging;
pub mod settings;

pub use tui_orrery_core as core;
pub use tui_orrery_input as input;
pub use tui_orrery_term as term;
pub use tui_orrery_types as types;
