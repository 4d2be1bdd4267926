//! Fluent Studio Shell - session persistence and shell-owned screens
//!
//! The binary target (`src/main.rs` + `src/app.rs` + `src/cli.rs`) wires
//! these into the root application.

pub mod session;
pub mod widgets;

pub use session::Session;
