//! Shared utilities for claro-cli
//!
//! Reusable path and processing helpers kept out of `main.rs` so the
//! command implementations stay small and the helpers stay testable.

pub mod processing;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use processing::{
    determine_output_path, expand_inputs, process_single_image, OutputNaming,
    SUPPORTED_EXTENSIONS,
};
pub use types::ProcessingParams;
