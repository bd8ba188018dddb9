//! Web-side files: package manifest, Vite config, HTML shell, housekeeping

use crate::config::{ScaffoldConfig, Template};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct PackageManifest<'a> {
    name: &'a str,
    private: bool,
    version: &'a str,
    #[serde(rename = "type")]
    module_type: &'a str,
    scripts: Scripts,
    dependencies: BTreeMap<&'a str, &'a str>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: BTreeMap<&'a str, &'a str>,
}

#[derive(Serialize)]
struct Scripts {
    dev: &'static str,
    build: &'static str,
    preview: &'static str,
}

/// Render `package.json`. Serialized from a typed manifest so the output is
/// always valid JSON regardless of the embedded name.
pub fn package_json(config: &ScaffoldConfig) -> String {
    let mut dev_dependencies = BTreeMap::from([("vite", "^5.4.0")]);
    if config.template == Template::Three {
        dev_dependencies.insert("vite-plugin-glsl", "^1.3.0");
    }
    if config.use_typescript {
        dev_dependencies.insert("typescript", "^5.5.0");
    }

    let manifest = PackageManifest {
        name: &config.project_name,
        private: true,
        version: "0.0.1",
        module_type: "module",
        scripts: Scripts {
            dev: "vite",
            build: "vite build",
            preview: "vite preview",
        },
        dependencies: BTreeMap::from([("three", "^0.168.0")]),
        dev_dependencies,
    };

    // A struct of strings cannot fail to serialize
    let mut out = serde_json::to_string_pretty(&manifest).unwrap_or_default();
    out.push('\n');
    out
}

/// File name of the Vite config (`.ts` when TypeScript is enabled)
pub fn vite_config_path(config: &ScaffoldConfig) -> &'static str {
    if config.use_typescript {
        "vite.config.ts"
    } else {
        "vite.config.js"
    }
}

/// Render the Vite config. The `three` template registers the glsl plugin
/// rooted at `src/shaders` so lygia-style `#include`s resolve.
pub fn vite_config(config: &ScaffoldConfig) -> String {
    match config.template {
        Template::Three => r#"import { defineConfig } from 'vite';
import glsl from 'vite-plugin-glsl';

export default defineConfig({
  server: {
    open: true,
  },
  plugins: [
    glsl({
      include: ['src/shaders/**/*.glsl'],
      root: 'src/shaders',
    }),
  ],
});
"#
        .to_string(),
        Template::Raw => r#"import { defineConfig } from 'vite';

export default defineConfig({
  server: {
    open: true,
  },
});
"#
        .to_string(),
    }
}

/// Render the HTML shell: a single full-viewport canvas plus the module
/// script tag for the bootstrap.
pub fn index_html(config: &ScaffoldConfig) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{name}</title>
    <style>
      html,
      body {{
        margin: 0;
        height: 100%;
        overflow: hidden;
        background: #000;
      }}
      #sketch {{
        width: 100%;
        height: 100%;
        display: block;
      }}
    </style>
  </head>
  <body>
    <canvas id="sketch"></canvas>
    <script type="module" src="/{main}"></script>
  </body>
</html>
"#,
        name = config.project_name,
        main = config.main_module(),
    )
}

pub fn gitignore() -> String {
    "node_modules/\ndist/\n.DS_Store\n*.local\n".to_string()
}

pub fn tsconfig() -> String {
    r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ESNext",
    "moduleResolution": "bundler",
    "strict": true,
    "skipLibCheck": true,
    "noEmit": true
  },
  "include": ["src"]
}
"#
    .to_string()
}

pub fn readme(config: &ScaffoldConfig) -> String {
    let shaders = match config.template {
        Template::Three => {
            "Shaders live in `src/shaders/`. With git enabled, the [lygia](https://lygia.xyz)\n\
             shader library is attached at `src/shaders/lygia` and can be pulled in with\n\
             `#include \"lygia/...\"` directives."
        }
        Template::Raw => {
            "Shader sources are inlined in the bootstrap module. Edit the\n\
             `mainImage(out vec4 fragColor, in vec2 fragCoord)` body to change the sketch."
        }
    };

    format!(
        "# {name}\n\
         \n\
         A GLSL shader sketch scaffolded with glsketch.\n\
         \n\
         ## Getting started\n\
         \n\
         ```sh\n\
         {install}\n\
         {dev}\n\
         ```\n\
         \n\
         {shaders}\n",
        name = config.project_name,
        install = config.package_manager.install_command(),
        dev = config.package_manager.dev_command(),
        shaders = shaders,
    )
}
