//! Rendering of the generated project files
//!
//! This module provides:
//! - `RenderedFile`, a (relative path, content) pair
//! - `render_project`, mapping a `ScaffoldConfig` to the complete file set
//!
//! Rendering is pure: the same config always yields byte-identical output,
//! and nothing here touches the filesystem.

pub mod shader;
pub mod web;

use crate::config::{ScaffoldConfig, Template};

/// One file of the generated project, path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: String,
    pub content: String,
}

impl RenderedFile {
    fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Render every file of the project described by `config`.
pub fn render_project(config: &ScaffoldConfig) -> Vec<RenderedFile> {
    let mut files = vec![
        RenderedFile::new("package.json", web::package_json(config)),
        RenderedFile::new(web::vite_config_path(config), web::vite_config(config)),
        RenderedFile::new("index.html", web::index_html(config)),
        RenderedFile::new(".gitignore", web::gitignore()),
        RenderedFile::new(config.main_module(), shader::bootstrap(config)),
    ];

    // Raw sketches inline their shader sources in the bootstrap
    if config.template == Template::Three {
        files.push(RenderedFile::new(
            "src/shaders/vert.glsl",
            shader::vertex_shader(),
        ));
        files.push(RenderedFile::new(
            "src/shaders/frag.glsl",
            shader::fragment_shader(),
        ));
    }

    if config.use_typescript {
        files.push(RenderedFile::new("tsconfig.json", web::tsconfig()));
    }

    files.push(RenderedFile::new("README.md", web::readme(config)));

    files
}
