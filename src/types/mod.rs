// topicdeck shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod settings;
pub mod topic;
