//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod output;
mod types;

pub use check::{BindingGroup, CheckReport};
pub use output::{Report, TerminalOutput};
pub use types::{TypesReport, TypesResult};

#[cfg(test)]
pub(crate) use output::testing;
