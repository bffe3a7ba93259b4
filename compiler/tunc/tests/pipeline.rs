// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end driver tests.
//!
//! - `commands` - each `tun` subcommand against files in `demos/`
//! - `properties` - whole-pipeline behaviour on inline sources
//! - `common` - shared helpers
//!
//! ```bash
//! cargo test -p tunc --test pipeline
//! ```

#[path = "pipeline/common/mod.rs"]
mod common;

#[path = "pipeline/commands.rs"]
mod commands;

#[path = "pipeline/properties.rs"]
mod properties;
