//! glsketch-core - Library for scaffolding GLSL shader-sketch projects
//!
//! Given a project name and a handful of flags, this library renders a small
//! static file set (Vite + three.js + GLSL shaders), writes it into a fresh
//! directory, and drives a fixed sequence of optional external-tool stages:
//! dependency install, git init, lygia submodule attachment, editor launch,
//! dev-server launch.
//!
//! # Architecture
//!
//! - **Pure layer** - name validation (`validate`), config model (`config`),
//!   template rendering (`templates`): no side effects, byte-deterministic.
//! - **Effect layer** - filesystem writes (`fsops`), subprocess invocation
//!   (`tools`), the fatal creation pipeline (`scaffold`).
//! - **Prompt layer** - cliclack-based interactive flow (`prompts`), gated
//!   behind the default-on `tui` feature.
//!
//! Only the binary reads process environment (the `npm_config_user_agent`
//! hint); everything here takes explicit arguments.

pub mod config;
pub mod fsops;
pub mod scaffold;
pub mod templates;
pub mod tools;
pub mod validate;

#[cfg(feature = "tui")]
pub mod prompts;

// Re-export main types for convenience
pub use config::{PackageManager, ScaffoldConfig, Template};
pub use fsops::ScaffoldError;
pub use scaffold::create_project;
pub use templates::{render_project, RenderedFile};
pub use validate::NameError;

#[cfg(feature = "tui")]
pub use prompts::{run, CreateArgs};
