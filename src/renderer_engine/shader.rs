use lazy_static::lazy_static;
use log::{error, info};
use regex::Regex;
use std::ffi::{CStr, CString};

use super::device::{
    AttribLocation, GraphicsDevice, ProgramHandle, ShaderHandle, ShaderKind, UniformLocation,
};
use super::error::RendererError;

pub const POSITION_ATTRIB: &CStr = c"aVertexPosition";
pub const COLOR_ATTRIB: &CStr = c"aColor";
pub const MODEL_VIEW_UNIFORM: &CStr = c"uModelViewMatrix";
pub const PROJECTION_UNIFORM: &CStr = c"uProjectionMatrix";

const POINT_SIZE_PLACEHOLDER: &str = "POINT_SIZE";

const VERTEX_SRC: &str = r#"#version 330 core
in vec4 aVertexPosition;
in vec4 aColor;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

out vec4 vColor;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    gl_PointSize = POINT_SIZE;
    vColor = aColor;
}
"#;

const FRAGMENT_SRC: &str = r#"#version 330 core
in vec4 vColor;
out vec4 FragColor;

void main() {
    FragColor = vColor;
}
"#;

/// Paire de sources GLSL d'un programme.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSources {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSources {
    /// Shaders du nuage de points : chaque sommet est dessiné comme un point
    /// de `point_size` pixels, coloré par son attribut `aColor`.
    ///
    /// L'attribut position est lu en `vec4` depuis un buffer de 3 floats : la
    /// composante `w` manquante vaut 1.0.
    pub fn particles(point_size: f32) -> Self {
        Self {
            vertex: VERTEX_SRC.replace(POINT_SIZE_PLACEHOLDER, &format!("{:.1}", point_size)),
            fragment: FRAGMENT_SRC.to_string(),
        }
    }
}

/// Programme lié + localisations résolues une fois pour toutes.
///
/// Les localisations restent valides tant que le programme n'est pas détruit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderProgram {
    pub id: ProgramHandle,
    pub position_attrib: AttribLocation,
    pub color_attrib: AttribLocation,
    pub model_view_uniform: UniformLocation,
    pub projection_uniform: UniformLocation,
}

impl ShaderProgram {
    /// Compile les deux étapes, lie le programme et l'active sur le device.
    pub fn build<D: GraphicsDevice>(
        device: &mut D,
        sources: &ShaderSources,
    ) -> Result<Self, RendererError> {
        let vs = compile_shader(device, ShaderKind::Vertex, &sources.vertex)?;
        let fs = match compile_shader(device, ShaderKind::Fragment, &sources.fragment) {
            Ok(fs) => fs,
            Err(e) => {
                device.delete_shader(vs);
                return Err(e);
            }
        };
        let program = link_program(device, vs, fs)?;
        device.use_program(program.id);
        Ok(program)
    }

    pub fn delete<D: GraphicsDevice>(&self, device: &mut D) {
        device.delete_program(self.id);
    }
}

/// Compile un shader.
///
/// En cas d'échec le shader est détruit avant de renvoyer l'erreur, qui porte
/// le journal du driver et un extrait de la source autour de la ligne fautive.
pub fn compile_shader<D: GraphicsDevice>(
    device: &mut D,
    kind: ShaderKind,
    source: &str,
) -> Result<ShaderHandle, RendererError> {
    let c_src = CString::new(source).map_err(|_| RendererError::SourceContainsNul)?;

    let shader = device.create_shader(kind);
    if device.compile_shader(shader, &c_src) {
        return Ok(shader);
    }

    let driver_log = device.shader_info_log(shader);
    device.delete_shader(shader);

    let mut log = driver_log.clone();
    match parse_glsl_error_line(&driver_log) {
        Some(line) => log.push_str(&format_glsl_error_context(source, line)),
        None => log.push_str("\n(no line number found in the driver log)"),
    }
    error!("❌ {} shader compilation failed:\n{}", kind, log);
    Err(RendererError::ShaderCompile { kind, log })
}

/// Lie deux shaders compilés et résout les attributs / uniforms du nuage.
///
/// Les shaders sont détruits dans tous les cas (le programme lié les garde en
/// vie). En cas d'échec le programme l'est aussi.
pub fn link_program<D: GraphicsDevice>(
    device: &mut D,
    vs: ShaderHandle,
    fs: ShaderHandle,
) -> Result<ShaderProgram, RendererError> {
    let program = device.create_program();
    device.attach_shader(program, vs);
    device.attach_shader(program, fs);
    let linked = device.link_program(program);

    device.delete_shader(vs);
    device.delete_shader(fs);

    if !linked {
        let log = device.program_info_log(program);
        device.delete_program(program);
        error!("❌ Shader link failed:\n{}", log);
        return Err(RendererError::Link { log });
    }

    let resolved = resolve_locations(device, program);
    if resolved.is_err() {
        device.delete_program(program);
    }
    let program = resolved?;
    info!(
        "✅ Shader program {} linked (attribs: position={}, color={}; uniforms: modelView={}, projection={})",
        program.id,
        program.position_attrib,
        program.color_attrib,
        program.model_view_uniform,
        program.projection_uniform
    );
    Ok(program)
}

fn resolve_locations<D: GraphicsDevice>(
    device: &D,
    program: ProgramHandle,
) -> Result<ShaderProgram, RendererError> {
    let attrib = |name: &CStr| {
        let loc = device.attrib_location(program, name);
        AttribLocation::try_from(loc).map_err(|_| missing(name))
    };
    let uniform = |name: &CStr| {
        let loc = device.uniform_location(program, name);
        if loc < 0 {
            Err(missing(name))
        } else {
            Ok(loc)
        }
    };

    Ok(ShaderProgram {
        id: program,
        position_attrib: attrib(POSITION_ATTRIB)?,
        color_attrib: attrib(COLOR_ATTRIB)?,
        model_view_uniform: uniform(MODEL_VIEW_UNIFORM)?,
        projection_uniform: uniform(PROJECTION_UNIFORM)?,
    })
}

fn missing(name: &CStr) -> RendererError {
    RendererError::MissingLocation {
        name: name.to_string_lossy().into_owned(),
    }
}

lazy_static! {
    // Formats des journaux GLSL, par ordre de priorité ; le groupe 1 est la ligne.
    static ref GLSL_LINE_PATTERNS: [Regex; 3] = [
        // Mesa / Intel : "0:12(105): error: ..."
        Regex::new(r"\d+:(\d+)\(\d+\)").expect("valid regex"),
        // NVIDIA : "0(12) : error C1000: ..."
        Regex::new(r"\d+\((\d+)\)\s*:").expect("valid regex"),
        // AMD : "ERROR: 0:12: ..."
        Regex::new(r":\s*\d+:(\d+):").expect("valid regex"),
    ];
}

/// Extrait le numéro de ligne d'un journal de compilation GLSL.
fn parse_glsl_error_line(log: &str) -> Option<usize> {
    GLSL_LINE_PATTERNS.iter().find_map(|re| {
        re.captures(log)
            .and_then(|cap| cap.get(1))
            .and_then(|m| m.as_str().parse().ok())
    })
}

/// Extrait de la source autour de `line_number` (1-based), ligne fautive marquée.
fn format_glsl_error_context(src: &str, line_number: usize) -> String {
    const CONTEXT: usize = 2;

    let lines: Vec<&str> = src.lines().collect();
    if line_number == 0 || line_number > lines.len() {
        return String::new();
    }

    let start = line_number.saturating_sub(1 + CONTEXT);
    let end = (line_number + CONTEXT).min(lines.len());

    let mut out = format!("\n🔍 Error context (line {}):\n", line_number);
    for (i, line) in lines[start..end].iter().enumerate() {
        let current = start + i + 1;
        let marker = if current == line_number { '>' } else { ' ' };
        out.push_str(&format!("{} {:>3} | {}\n", marker, current, line));
    }
    out
}
