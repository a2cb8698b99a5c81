//! Validation of extracted shader variables against the standard
//!
//! Diagnostics are printed the moment they are found; the only things
//! handed back to the caller are the raw extracted maps and the lists of
//! symbols that validated. A failed variable stays visible in the raw map
//! but never reaches the valid lists the generator consumes.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::color::*;
use crate::extract::{extract_variables, ShaderVariables};
use crate::standard::{
    registry_key_for_attribute, registry_key_for_uniform, ShaderType, ShaderUniformVariable,
    ShaderVertexAttributeVariable, SHADER_CATALOG, UNIFORM_REGISTRY, VERTEX_ATTRIBUTE_REGISTRY,
};

/// Symbols that validated for a single shader stage, in extraction order
#[derive(Debug, Clone, Default)]
pub struct StageValidation {
    pub valid_attributes: SmallVec<[ShaderVertexAttributeVariable; 8]>,
    pub valid_uniforms: SmallVec<[ShaderUniformVariable; 8]>,
}

/// Everything the generator needs to know about one shader program
///
/// The raw maps and the valid attributes come from the vertex stage only;
/// the valid uniforms are the vertex stage's followed by the fragment
/// stage's, concatenated without deduplication.
#[derive(Debug, Clone)]
pub struct ShaderInfo {
    pub attributes: IndexMap<String, String>,
    pub uniforms: IndexMap<String, String>,
    pub valid_attributes: SmallVec<[ShaderVertexAttributeVariable; 8]>,
    pub valid_uniforms: SmallVec<[ShaderUniformVariable; 8]>,
}

/// Per-program validation results, in catalog order
pub type ShaderInfoMap = IndexMap<ShaderType, ShaderInfo>;

/// Check extracted variables against the registries, reporting each
/// mismatch as it is found
pub fn validate_types(shader_variables: &ShaderVariables, verbose: bool) -> StageValidation {
    let mut validation = StageValidation::default();

    for (name, v_type) in &shader_variables.uniforms {
        match registry_key_for_uniform(name) {
            Some(symbol) => {
                let expected = &UNIFORM_REGISTRY[&symbol];
                if expected.glsl_type != v_type {
                    colored_println(
                        &format!(
                            "    Error: Uniform '{}' expected type '{}' but found '{}', fix the type in the shader.",
                            name, expected.glsl_type, v_type
                        ),
                        ANSI_RED,
                    );
                } else {
                    validation.valid_uniforms.push(symbol);
                    if verbose {
                        colored_println(
                            &format!("    Verified uniform '{}' with type '{}'.", name, v_type),
                            ANSI_WHITE,
                        );
                    }
                }
            }
            None => {
                colored_println(
                    &format!(
                        "    ERROR: Uniform '{}' is not recognized, you either have a typo or you need to register the new attribute in the standard.",
                        name
                    ),
                    ANSI_RED,
                );
            }
        }
    }

    for (name, v_type) in &shader_variables.attributes {
        match registry_key_for_attribute(name) {
            Some(symbol) => {
                let expected = &VERTEX_ATTRIBUTE_REGISTRY[&symbol];
                if expected.glsl_type != v_type {
                    colored_println(
                        &format!(
                            "    Error: Attribute '{}' expected type '{}' but found '{}', fix the type in the shader.",
                            name, expected.glsl_type, v_type
                        ),
                        ANSI_RED,
                    );
                } else {
                    validation.valid_attributes.push(symbol);
                    if verbose {
                        colored_println(
                            &format!("    Verified attribute '{}' with type '{}'", name, v_type),
                            ANSI_GRAY,
                        );
                    }
                }
            }
            None => {
                colored_println(
                    &format!(
                        "    ERROR: Attribute '{}' is not recognized, you either have a typo or you need to register the new attribute in the standard.",
                        name
                    ),
                    ANSI_RED,
                );
            }
        }
    }

    validation
}

/// Extract and validate one shader stage's source text
pub fn validate_shader(shader_code: &str, verbose: bool) -> (ShaderVariables, StageValidation) {
    let shader_variables = extract_variables(shader_code);
    let validation = validate_types(&shader_variables, verbose);
    (shader_variables, validation)
}

/// Validate every program in the catalog against the sources in
/// `shader_directory`
///
/// A missing file for either stage skips the whole program: it gets no
/// entry in the returned map at all. Processing always continues to the
/// next program.
pub fn validate_all_shaders(shader_directory: &Path, verbose: bool, summary: bool) -> ShaderInfoMap {
    let mut shader_info = ShaderInfoMap::new();

    for (&shader_type, shader_program) in SHADER_CATALOG.iter() {
        let vertex_shader_path = shader_directory.join(shader_program.vertex_shader_filename);
        let fragment_shader_path = shader_directory.join(shader_program.fragment_shader_filename);

        let vertex_shader_code = match fs::read_to_string(&vertex_shader_path) {
            Ok(code) => code,
            Err(_) => {
                colored_println(
                    &format!(
                        "Error: Vertex shader file '{}' not found.",
                        vertex_shader_path.display()
                    ),
                    ANSI_RED,
                );
                continue;
            }
        };

        let fragment_shader_code = match fs::read_to_string(&fragment_shader_path) {
            Ok(code) => code,
            Err(_) => {
                colored_println(
                    &format!(
                        "Error: Fragment shader file '{}' not found.",
                        fragment_shader_path.display()
                    ),
                    ANSI_RED,
                );
                continue;
            }
        };

        colored_println(&format!("Validating shaders for {}:", shader_type), ANSI_GREEN);

        colored_println(
            &format!(
                "  Validating vertex shader: {}",
                shader_program.vertex_shader_filename
            ),
            ANSI_GREEN,
        );
        let (vertex_variables, vertex_validation) = validate_shader(&vertex_shader_code, verbose);

        colored_println(
            &format!(
                "  Validating fragment shader: {}",
                shader_program.fragment_shader_filename
            ),
            ANSI_GREEN,
        );
        let (_fragment_variables, fragment_validation) =
            validate_shader(&fragment_shader_code, verbose);

        // Uniforms union across both stages, not deduplicated; attributes
        // come from the vertex stage only.
        let mut valid_uniforms = vertex_validation.valid_uniforms;
        valid_uniforms.extend(fragment_validation.valid_uniforms);

        shader_info.insert(
            shader_type,
            ShaderInfo {
                attributes: vertex_variables.attributes,
                uniforms: vertex_variables.uniforms,
                valid_attributes: vertex_validation.valid_attributes,
                valid_uniforms,
            },
        );
    }

    if summary {
        print_summary(&shader_info);
    }

    shader_info
}

/// Human-readable per-shader variable report
fn print_summary(shader_info: &ShaderInfoMap) {
    colored_println("Shader Information:", ANSI_BRIGHT_BLUE);
    for (shader_type, info) in shader_info {
        colored_println(&format!("Shader Type: {}", shader_type.name()), ANSI_GREEN);
        colored_println("  Vertex Attributes:", ANSI_MAGENTA);
        for (attr, attr_type) in &info.attributes {
            colored_println(&format!("    {}: {}", attr, attr_type), ANSI_GRAY);
        }
        colored_println("  Uniforms:", ANSI_MAGENTA);
        for (uniform, uniform_type) in &info.uniforms {
            colored_println(&format!("    {}: {}", uniform, uniform_type), ANSI_GRAY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_uniform_reaches_the_valid_list() {
        let (_, validation) = validate_shader("uniform mat4 transform;", false);
        assert_eq!(
            validation.valid_uniforms.as_slice(),
            [ShaderUniformVariable::Transform]
        );
    }

    #[test]
    fn unrecognized_uniform_is_excluded() {
        // FOO is not a registered symbol
        let (variables, validation) = validate_shader("uniform vec3 foo;", false);
        assert!(variables.uniforms.contains_key("foo"));
        assert!(validation.valid_uniforms.is_empty());
    }

    #[test]
    fn type_mismatch_is_excluded_but_stays_in_the_raw_map() {
        // RGB_COLOR's registered type is vec3
        let (variables, validation) = validate_shader("uniform mat4 rgb_color;", false);
        assert!(variables.uniforms.contains_key("rgb_color"));
        assert!(validation.valid_uniforms.is_empty());
    }

    #[test]
    fn unregistered_enum_member_is_excluded() {
        // COLOR is in the enum but has no registry entry
        let (_, validation) = validate_shader("uniform vec4 color;", false);
        assert!(validation.valid_uniforms.is_empty());
    }

    #[test]
    fn valid_attribute_reaches_the_valid_list() {
        let (_, validation) = validate_shader("in vec3 xyz_position;", false);
        assert_eq!(
            validation.valid_attributes.as_slice(),
            [ShaderVertexAttributeVariable::XyzPosition]
        );
    }

    #[test]
    fn mismatched_attribute_is_excluded() {
        // XYZ_POSITION's registered type is vec3
        let (variables, validation) = validate_shader("in vec2 xyz_position;", false);
        assert!(variables.attributes.contains_key("xyz_position"));
        assert!(validation.valid_attributes.is_empty());
    }

    #[test]
    fn attribute_matching_is_by_symbolic_name_not_human_name() {
        // XYZ_POSITION's registered singular name is "position", but
        // resolution goes through the symbolic name only
        let (variables, validation) = validate_shader("in vec3 position;", false);
        assert!(variables.attributes.contains_key("position"));
        assert!(validation.valid_attributes.is_empty());
    }

    #[test]
    fn valid_lists_follow_extraction_order() {
        let source = "\
uniform mat4 local_to_world;
uniform mat4 world_to_camera;
uniform mat4 camera_to_clip;
";
        let (_, validation) = validate_shader(source, false);
        assert_eq!(
            validation.valid_uniforms.as_slice(),
            [
                ShaderUniformVariable::LocalToWorld,
                ShaderUniformVariable::WorldToCamera,
                ShaderUniformVariable::CameraToClip,
            ]
        );
    }
}
