//! Production runtime for the mnemo engine.
//!
//! This crate wires the sans-IO engine to real time and a terminal:
//!
//! ```text
//! mnemo-cli
//!   ├─ SystemEnv     (production Environment impl)
//!   ├─ GameDriver    (executes engine actions against the tokio clock)
//!   ├─ renderer      (text board + status line)
//!   └─ main          (clap arguments, tracing setup, interactive loop)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod driver;
pub mod renderer;
mod system_env;

pub use driver::{DriverNotice, GameDriver, StartError};
pub use system_env::SystemEnv;
