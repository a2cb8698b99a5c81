//! Declaration extraction from raw shader source
//!
//! A deliberately shallow scan: two regexes over the whole text, no GLSL
//! grammar. Declarations spanning multiple lines, arrays
//! (`uniform mat4 lights[4];`), precision qualifiers
//! (`uniform highp vec3 x;`), and struct-typed uniforms are not matched
//! and silently produce no entry; shaders using them bypass the registry.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static UNIFORM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"uniform\s+(\w+)\s+(\w+);").unwrap());

// GLSL version 330 core uses `in` for attributes. The same pattern applies
// to fragment sources, so pass-through receivers are extracted identically
// to true vertex attributes.
static ATTRIBUTE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"in\s+(\w+)\s+(\w+);").unwrap());

/// Variables declared by one shader source file, keyed by identifier with
/// the GLSL type as value
///
/// Redeclaring a name keeps its first position but overwrites the type
/// (last declaration wins; no duplicate-declaration error is raised).
#[derive(Debug, Clone, Default)]
pub struct ShaderVariables {
    pub uniforms: IndexMap<String, String>,
    pub attributes: IndexMap<String, String>,
}

/// Extract declared uniform and attribute variables from shader source text
pub fn extract_variables(shader_code: &str) -> ShaderVariables {
    let mut variables = ShaderVariables::default();

    for captures in UNIFORM_PATTERN.captures_iter(shader_code) {
        variables
            .uniforms
            .insert(captures[2].to_string(), captures[1].to_string());
    }

    for captures in ATTRIBUTE_PATTERN.captures_iter(shader_code) {
        variables
            .attributes
            .insert(captures[2].to_string(), captures[1].to_string());
    }

    log::debug!(
        "extracted {} uniform(s), {} attribute(s)",
        variables.uniforms.len(),
        variables.attributes.len()
    );

    variables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_a_uniform_declaration() {
        let vars = extract_variables("uniform mat4 transform;");
        assert_eq!(vars.uniforms.get("transform").map(String::as_str), Some("mat4"));
        assert!(vars.attributes.is_empty());
    }

    #[test]
    fn extracts_an_attribute_declaration() {
        let vars = extract_variables("in vec3 position;");
        assert_eq!(vars.attributes.get("position").map(String::as_str), Some("vec3"));
        assert!(vars.uniforms.is_empty());
    }

    #[test]
    fn scans_a_full_source_in_occurrence_order() {
        let source = "\
#version 330 core

in vec3 position;
in vec2 passthrough_texture_coordinate;

uniform mat4 local_to_world;
uniform mat4 world_to_camera;
uniform mat4 camera_to_clip;

void main() {
}
";
        let vars = extract_variables(source);
        let uniforms: Vec<&str> = vars.uniforms.keys().map(String::as_str).collect();
        assert_eq!(uniforms, ["local_to_world", "world_to_camera", "camera_to_clip"]);
        let attributes: Vec<&str> = vars.attributes.keys().map(String::as_str).collect();
        assert_eq!(attributes, ["position", "passthrough_texture_coordinate"]);
    }

    #[test]
    fn last_declaration_wins_on_redeclared_names() {
        let vars = extract_variables("uniform vec3 color;\nuniform vec4 color;");
        assert_eq!(vars.uniforms.len(), 1);
        assert_eq!(vars.uniforms.get("color").map(String::as_str), Some("vec4"));
    }

    #[test]
    fn unsupported_declaration_shapes_produce_no_entry() {
        // arrays
        assert!(extract_variables("uniform mat4 lights[4];").uniforms.is_empty());
        // precision qualifiers push the identifier out of the second slot
        let vars = extract_variables("uniform highp vec3 x;");
        assert!(!vars.uniforms.contains_key("x"));
        // declarations spanning multiple lines
        assert!(extract_variables("uniform\nmat4\ntransform\n;").uniforms.is_empty());
    }

    #[test]
    fn fragment_in_receivers_extract_like_attributes() {
        let vars = extract_variables("in vec2 texture_coordinate;\nout vec4 frag_color;");
        assert_eq!(vars.attributes.len(), 1);
        assert!(vars.attributes.contains_key("texture_coordinate"));
    }
}
