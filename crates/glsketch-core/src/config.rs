//! Resolved scaffold configuration
//!
//! A `ScaffoldConfig` is built once per invocation from CLI flags, prompts
//! and the environment, then threaded through every stage. Nothing here
//! reads ambient process state; the binary hands the `npm_config_user_agent`
//! value in explicitly.

use clap::ValueEnum;
use std::fmt;

/// Which starter variant to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Template {
    /// three.js bootstrap with file-based shaders under src/shaders/
    #[default]
    Three,
    /// Shadertoy-style `mainImage` wrapper with inlined shader sources
    Raw,
}

impl Template {
    pub fn display_name(&self) -> &'static str {
        match self {
            Template::Three => "three",
            Template::Raw => "raw",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Supported package managers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Binary name of the package manager
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments for installing dependencies
    pub fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }

    /// Arguments for launching the dev server
    pub fn dev_args(&self) -> &'static [&'static str] {
        match self {
            PackageManager::Npm => &["run", "dev"],
            PackageManager::Pnpm => &["dev"],
            PackageManager::Yarn => &["dev"],
            PackageManager::Bun => &["run", "dev"],
        }
    }

    /// The full install command as the user would type it
    pub fn install_command(&self) -> String {
        format!("{} {}", self.command(), self.install_args().join(" "))
    }

    /// The full dev-server command as the user would type it
    pub fn dev_command(&self) -> String {
        format!("{} {}", self.command(), self.dev_args().join(" "))
    }

    /// Detect the package manager from the `npm_config_user_agent` value
    /// (e.g. "pnpm/9.1.0 npm/? node/v20.11.0 linux x64"). Unknown or absent
    /// values fall back to npm.
    pub fn detect(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.starts_with("pnpm") => PackageManager::Pnpm,
            Some(ua) if ua.starts_with("yarn") => PackageManager::Yarn,
            Some(ua) if ua.starts_with("bun") => PackageManager::Bun,
            _ => PackageManager::Npm,
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Fully resolved configuration for one scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Validated project name; also the target directory name
    pub project_name: String,
    pub template: Template,
    pub use_typescript: bool,
    pub package_manager: PackageManager,
    pub auto_install: bool,
    pub auto_git: bool,
    pub auto_shader_lib: bool,
    pub auto_editor: bool,
    pub auto_run: bool,
}

impl ScaffoldConfig {
    /// A config with every optional stage enabled, as the plain
    /// `glsketch <name>` invocation resolves to.
    pub fn with_defaults(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            template: Template::default(),
            use_typescript: false,
            package_manager: PackageManager::default(),
            auto_install: true,
            auto_git: true,
            auto_shader_lib: true,
            auto_editor: true,
            auto_run: true,
        }
    }

    /// Bootstrap module path relative to the project root
    pub fn main_module(&self) -> &'static str {
        if self.use_typescript {
            "src/main.ts"
        } else {
            "src/main.js"
        }
    }
}
