//! Rendering bootstrap and GLSL sources

use crate::config::{ScaffoldConfig, Template};

/// Clip-space pass-through vertex shader for the full-screen quad
pub fn vertex_shader() -> String {
    "varying vec2 vUv;

void main() {
  vUv = uv;
  gl_Position = vec4(position, 1.0);
}
"
    .to_string()
}

/// Default fragment shader: an animated cosine color cycle
pub fn fragment_shader() -> String {
    r#"varying vec2 vUv;

uniform float u_time;
uniform vec2 u_resolution;
uniform vec2 u_mouse;

// #include "lygia/generative/snoise.glsl"

void main() {
  vec2 st = gl_FragCoord.xy / u_resolution.xy;
  vec3 color = 0.5 + 0.5 * cos(u_time + st.xyx + vec3(0.0, 2.0, 4.0));
  gl_FragColor = vec4(color, 1.0);
}
"#
    .to_string()
}

/// Shadertoy-style fragment shader: user code lives in `mainImage`,
/// invoked from a fixed `main()`.
pub fn shadertoy_fragment_shader() -> String {
    "uniform float u_time;
uniform vec2 u_resolution;
uniform vec2 u_mouse;

void mainImage(out vec4 fragColor, in vec2 fragCoord) {
  vec2 uv = fragCoord / u_resolution.xy;
  vec3 color = 0.5 + 0.5 * cos(u_time + uv.xyx + vec3(0.0, 2.0, 4.0));
  fragColor = vec4(color, 1.0);
}

void main() {
  mainImage(gl_FragColor, gl_FragCoord.xy);
}
"
    .to_string()
}

// Bootstrap skeleton shared by every variant. Placeholders are substituted
// below; the project name never appears here, so no escaping is needed.
const BOOTSTRAP: &str = r#"import * as THREE from 'three';
__SHADERS__
const canvas = document.querySelector('#sketch')__CANVAS_CAST__;
const renderer = new THREE.WebGLRenderer({ canvas, antialias: true });
const scene = new THREE.Scene();
const camera = new THREE.OrthographicCamera(-1, 1, 1, -1, 0, 1);

const uniforms = {
  u_time: { value: 0 },
  u_resolution: { value: new THREE.Vector2() },
  u_mouse: { value: new THREE.Vector2() },
};

const material = new THREE.ShaderMaterial({
  vertexShader,
  fragmentShader,
  uniforms,
});
scene.add(new THREE.Mesh(new THREE.PlaneGeometry(2, 2), material));

function resize() {
  const dpr = Math.min(window.devicePixelRatio, 2);
  renderer.setPixelRatio(dpr);
  renderer.setSize(window.innerWidth, window.innerHeight);
  uniforms.u_resolution.value.set(window.innerWidth * dpr, window.innerHeight * dpr);
}
window.addEventListener('resize', resize);
resize();

window.addEventListener('pointermove', (event__EVENT_TYPE__) => {
  uniforms.u_mouse.value.set(event.clientX, window.innerHeight - event.clientY);
});

renderer.setAnimationLoop((time__TIME_TYPE__) => {
  uniforms.u_time.value = time * 0.001;
  renderer.render(scene, camera);
});
"#;

// Shader imports for file-based templates
const FILE_SHADERS: &str = r#"import vertexShader from './shaders/vert.glsl';
import fragmentShader from './shaders/frag.glsl';
"#;

/// Render the bootstrap module (`src/main.js` / `src/main.ts`): renderer,
/// orthographic camera over a clip-space quad, uniforms, resize handler and
/// render loop. The `raw` template inlines its shader sources.
pub fn bootstrap(config: &ScaffoldConfig) -> String {
    let shaders = match config.template {
        Template::Three => FILE_SHADERS.to_string(),
        Template::Raw => format!(
            "const vertexShader = /* glsl */ `\n{}`;\n\nconst fragmentShader = /* glsl */ `\n{}`;\n",
            vertex_shader(),
            shadertoy_fragment_shader(),
        ),
    };

    let (cast, event_ty, time_ty) = if config.use_typescript {
        (" as HTMLCanvasElement", ": PointerEvent", ": number")
    } else {
        ("", "", "")
    };

    BOOTSTRAP
        .replace("__SHADERS__", &shaders)
        .replace("__CANVAS_CAST__", cast)
        .replace("__EVENT_TYPE__", event_ty)
        .replace("__TIME_TYPE__", time_ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_bootstrap_imports_shader_files() {
        let config = ScaffoldConfig::with_defaults("demo");
        let js = bootstrap(&config);
        assert!(js.contains("from './shaders/vert.glsl'"));
        assert!(js.contains("from './shaders/frag.glsl'"));
        assert!(!js.contains("mainImage"));
    }

    #[test]
    fn test_raw_bootstrap_inlines_shadertoy_wrapper() {
        let mut config = ScaffoldConfig::with_defaults("demo");
        config.template = Template::Raw;
        let js = bootstrap(&config);
        assert!(js.contains("void mainImage(out vec4 fragColor, in vec2 fragCoord)"));
        assert!(js.contains("mainImage(gl_FragColor, gl_FragCoord.xy);"));
        assert!(!js.contains("./shaders/"));
    }

    #[test]
    fn test_typescript_annotations() {
        let mut config = ScaffoldConfig::with_defaults("demo");
        config.use_typescript = true;
        let ts = bootstrap(&config);
        assert!(ts.contains("as HTMLCanvasElement"));
        assert!(ts.contains("time: number"));

        config.use_typescript = false;
        let js = bootstrap(&config);
        assert!(!js.contains("HTMLCanvasElement"));
    }

    #[test]
    fn test_no_placeholders_survive_rendering() {
        for (template, ts) in [
            (Template::Three, false),
            (Template::Three, true),
            (Template::Raw, false),
            (Template::Raw, true),
        ] {
            let mut config = ScaffoldConfig::with_defaults("demo");
            config.template = template;
            config.use_typescript = ts;
            assert!(!bootstrap(&config).contains("__"));
        }
    }

    #[test]
    fn test_uniforms_present_in_default_fragment() {
        let frag = fragment_shader();
        for uniform in ["u_time", "u_resolution", "u_mouse"] {
            assert!(frag.contains(uniform));
        }
    }
}
