//! Command implementations for the claro CLI.

mod batch;
mod enhance;
mod preset;

// Re-export all command functions
pub use batch::cmd_batch;
pub use enhance::cmd_enhance;
pub use preset::{cmd_preset_create, cmd_preset_show};
