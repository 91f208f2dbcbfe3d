//! Command handlers that delegate to the composed `CliContext`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<_, CliError>`
//! - Thin wrappers that:
//!   1. Resolve CLI-specific input (title names, files)
//!   2. Call core services or the catalog adapter
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain comparison logic.

pub mod catalog;
pub mod check;
pub mod specs;
pub mod titles;
