//! Interactive `init` flow using cliclack prompts and a console-backed wizard
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
mod wizard;

#[cfg(feature = "tui")]
pub use prompts::run_init;
#[cfg(feature = "tui")]
pub use wizard::TermKeys;
