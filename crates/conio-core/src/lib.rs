//! # conio-core
//!
//! Styled terminal output and validated interactive prompts.
//!
//! ## Main Types
//!
//! - [`ConsoleOutput`] – renders `<style>` markup, status messages and tables
//! - [`ConsoleInput`] – `ask`, `confirm` and `choice` prompts over any reader
//! - [`CapabilityProbe`] – decides whether a stream can show ANSI colors
//! - [`ConsoleError`] – error type
//!
//! ## Modules
//!
//! - [`capability`] – terminal capability detection (POSIX and Windows rules)
//! - [`color`] – color mode override (`always`/`never`/`auto`)
//! - [`config`] – `~/.conio/config.yaml`
//! - [`markup`] – style-tag rendering
//! - [`style`] – style table and status message templates
//! - [`table`] – fixed-width table layout
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use conio_core::{Answer, ConsoleInput, ConsoleOutput};
//!
//! let output = ConsoleOutput::plain(Vec::new());
//! let mut input = ConsoleInput::new(Cursor::new("2\n"), output);
//!
//! let env = input.choice("Deploy to", &["staging", "production"], Some(1))?;
//! assert_eq!(env, "production");
//!
//! assert_eq!(input.ask("Tag", Some("latest"))?, Answer::EndOfInput);
//! # Ok::<(), conio_core::ConsoleError>(())
//! ```

pub mod capability;
pub mod color;
pub mod config;
pub mod errors;
pub mod input;
pub mod markup;
pub mod output;
pub mod style;
pub mod table;

pub use capability::{CapabilityProbe, Environment, SystemEnvironment};
pub use color::ColorMode;
pub use config::ConsoleConfig;
pub use errors::{ConsoleError, Result};
pub use input::{Answer, ConsoleInput};
pub use markup::Formatter;
pub use output::ConsoleOutput;
pub use style::{MessageType, StyleTable};
