//! External tool invocation
//!
//! This module provides:
//! - Generic subprocess helpers with inherit/capture stream modes
//! - Package-manager install and dev-server launch
//! - Git init, commit, and lygia submodule attachment
//! - Editor launch

pub mod editor;
pub mod git;
pub mod invoke;
pub mod pm;

pub use invoke::{is_available, run, run_checked};
