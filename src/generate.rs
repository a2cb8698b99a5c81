//! Generated artifact rendering
//!
//! Pure string templating over the registry, the catalog, and the
//! per-program validation results. Nothing here validates anything; the
//! upstream results are trusted as-is. Output is deterministic for a fixed
//! registry/catalog because every table renders in declaration order.

use std::fs;
use std::path::Path;

use crate::error::{Result, StandardError};
use crate::standard::{
    ShaderType, ShaderUniformVariable, ShaderVertexAttributeVariable, SHADER_CATALOG,
    VERTEX_ATTRIBUTE_LAYOUTS,
};
use crate::validate::ShaderInfoMap;

/// Fixed output filenames, co-located with the tool and overwritten
/// unconditionally on every generating run.
pub const HEADER_FILENAME: &str = "shader_standard.hpp";
pub const SOURCE_FILENAME: &str = "shader_standard.cpp";
pub const PY_SUMMARY_FILENAME: &str = "shader_summary.py";

/// Render the C++ type-definition header
pub fn render_header(shader_info: &ShaderInfoMap) -> String {
    let mut out: Vec<String> = Vec::new();
    let push = |out: &mut Vec<String>, line: &str| out.push(line.to_string());

    push(&mut out, "#ifndef SHADER_STANDARD_HPP");
    push(&mut out, "#define SHADER_STANDARD_HPP");
    push(&mut out, "#include <unordered_map>");
    push(&mut out, "#include <string>");
    push(&mut out, "#include <vector>");
    push(&mut out, "#include <glad/glad.h>");
    push(&mut out, "");

    push(&mut out, "enum class ShaderType {");
    for shader_type in ShaderType::ALL {
        out.push(format!("    {},", shader_type.name()));
    }
    push(&mut out, "};");
    push(&mut out, "");

    push(&mut out, "enum class ShaderVertexAttributeVariable {");
    for attribute in ShaderVertexAttributeVariable::ALL {
        // INDEX is a sentinel that never appears in a GLSL program
        if *attribute != ShaderVertexAttributeVariable::Index {
            out.push(format!("    {},", attribute.name()));
        }
    }
    push(&mut out, "};");
    push(&mut out, "");

    push(&mut out, "enum class ShaderUniformVariable {");
    for uniform in ShaderUniformVariable::ALL {
        out.push(format!("    {},", uniform.name()));
    }
    push(&mut out, "};");
    push(&mut out, "");

    push(&mut out, "struct ShaderCreationInfo {");
    push(&mut out, "    std::string vertex_path;");
    push(&mut out, "    std::string fragment_path;");
    push(&mut out, "    std::string geometry_path;");
    push(&mut out, "};");
    push(&mut out, "");

    push(&mut out, "struct ShaderProgramInfo {");
    push(&mut out, "    GLuint id;");
    push(&mut out, "};");
    push(&mut out, "");

    push(&mut out, "struct GLVertexAttributeConfiguration {");
    push(&mut out, "    GLint components_per_vertex;");
    push(&mut out, "    GLenum data_type_of_component;");
    push(&mut out, "    GLboolean normalize;");
    push(&mut out, "    GLsizei stride;");
    push(&mut out, "    GLvoid *pointer_to_start_of_data;");
    push(&mut out, "};");
    push(&mut out, "");

    push(&mut out, "std::string shader_type_to_name(ShaderType type);");
    push(&mut out, "");

    push(&mut out, "class ShaderStandard {");
    push(&mut out, "public:");
    push(
        &mut out,
        "    std::unordered_map<ShaderVertexAttributeVariable, GLVertexAttributeConfiguration> shader_vertex_attribute_to_glva_configuration;",
    );
    push(
        &mut out,
        "    std::unordered_map<ShaderUniformVariable, std::string> shader_uniform_variable_to_name;",
    );
    push(
        &mut out,
        "    std::unordered_map<ShaderVertexAttributeVariable, std::string> shader_vertex_attribute_variable_to_name;",
    );
    push(
        &mut out,
        "    std::unordered_map<ShaderType, std::string> shader_type_to_name;",
    );
    push(
        &mut out,
        "    std::unordered_map<ShaderType, ShaderCreationInfo> shader_catalog;",
    );
    push(
        &mut out,
        "    std::unordered_map<ShaderType, std::vector<ShaderVertexAttributeVariable>> shader_to_used_vertex_attribute_variables;",
    );
    push(
        &mut out,
        "    std::unordered_map<ShaderType, std::vector<ShaderUniformVariable>> shader_to_used_uniform_variable;",
    );
    push(&mut out, "");

    push(&mut out, "    ShaderStandard() {");

    push(&mut out, "        shader_vertex_attribute_to_glva_configuration = {");
    for (attribute, config) in VERTEX_ATTRIBUTE_LAYOUTS.iter() {
        out.push(format!(
            "            {{ShaderVertexAttributeVariable::{}, GLVertexAttributeConfiguration{{{}, {}, {}, {}, {}}}}},",
            attribute.name(),
            config.components_per_vertex,
            config.data_type_of_component,
            config.normalize,
            config.stride,
            config.pointer_to_start_of_data
        ));
    }
    push(&mut out, "        };");

    push(&mut out, "        shader_uniform_variable_to_name = {");
    for uniform in ShaderUniformVariable::ALL {
        out.push(format!(
            "            {{ShaderUniformVariable::{}, \"{}\"}},",
            uniform.name(),
            uniform.shader_identifier()
        ));
    }
    push(&mut out, "        };");

    // Only attributes bound from a vertex buffer get a declared name entry
    push(&mut out, "        shader_vertex_attribute_variable_to_name = {");
    for attribute in ShaderVertexAttributeVariable::ALL {
        if VERTEX_ATTRIBUTE_LAYOUTS.contains_key(attribute) {
            out.push(format!(
                "            {{ShaderVertexAttributeVariable::{}, \"{}\"}},",
                attribute.name(),
                attribute.shader_identifier()
            ));
        }
    }
    push(&mut out, "        };");

    push(&mut out, "        shader_type_to_name = {");
    for shader_type in ShaderType::ALL {
        out.push(format!(
            "            {{ShaderType::{}, \"{}\"}},",
            shader_type.name(),
            shader_type.lowercase_name()
        ));
    }
    push(&mut out, "        };");

    push(&mut out, "        shader_catalog = {");
    for (shader_type, prog) in SHADER_CATALOG.iter() {
        out.push(format!(
            "            {{ShaderType::{}, {{\"assets/shaders/{}\", \"assets/shaders/{}\"}}}},",
            shader_type.name(),
            prog.vertex_shader_filename,
            prog.fragment_shader_filename
        ));
    }
    push(&mut out, "        };");

    push(&mut out, "        shader_to_used_vertex_attribute_variables = {");
    for (shader_type, info) in shader_info {
        let attributes = info
            .valid_attributes
            .iter()
            .map(|attr| format!("ShaderVertexAttributeVariable::{}", attr.name()))
            .collect::<Vec<_>>()
            .join(", ");
        out.push(format!(
            "            {{ShaderType::{}, {{{}}}}},",
            shader_type.name(),
            attributes
        ));
    }
    push(&mut out, "        };");

    push(&mut out, "        shader_to_used_uniform_variable = {");
    for (shader_type, info) in shader_info {
        let uniforms = info
            .valid_uniforms
            .iter()
            .map(|uniform| format!("ShaderUniformVariable::{}", uniform.name()))
            .collect::<Vec<_>>()
            .join(", ");
        out.push(format!(
            "            {{ShaderType::{}, {{{}}}}},",
            shader_type.name(),
            uniforms
        ));
    }
    push(&mut out, "        };");

    push(&mut out, "    }");
    push(&mut out, "};");
    push(&mut out, "#endif // SHADER_STANDARD_HPP");

    out.join("\n")
}

/// Render the C++ implementation file
///
/// An identifier outside the enumeration is a programming error in the
/// consuming engine, so the generated function throws rather than
/// returning a fallback.
pub fn render_source() -> String {
    let mut out: Vec<String> = Vec::new();

    out.push("#include \"shader_standard.hpp\"".to_string());
    out.push("#include <stdexcept>".to_string());
    out.push(String::new());
    out.push("std::string shader_type_to_name(ShaderType type) {".to_string());
    out.push("    switch (type) {".to_string());
    for shader_type in ShaderType::ALL {
        out.push(format!(
            "    case ShaderType::{}: return \"{}\";",
            shader_type.name(),
            shader_type.lowercase_name()
        ));
    }
    out.push("    }".to_string());
    out.push("    throw std::runtime_error(\"unknown ShaderType\");".to_string());
    out.push("}".to_string());

    out.join("\n")
}

/// Render the Python companion module with the program→used-attributes
/// table for the downstream tooling
pub fn render_py_summary(shader_info: &ShaderInfoMap) -> String {
    let mut out = String::new();

    out.push_str("from standard import *\n");
    out.push_str("shader_to_used_vertex_attribute_variables = {\n");
    for (shader_type, info) in shader_info {
        let attributes = info
            .valid_attributes
            .iter()
            .map(|attr| format!("ShaderVertexAttributeVariable.{}", attr.name()))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "    ShaderType.{}: [{}],\n",
            shader_type.name(),
            attributes
        ));
    }
    out.push_str("}\n\n");

    out
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    log::debug!("writing {}", path.display());
    fs::write(path, contents).map_err(|e| StandardError::artifact_write(path, e))
}

/// Write the header and implementation files into `output_directory`
pub fn write_cpp(shader_info: &ShaderInfoMap, output_directory: &Path) -> Result<()> {
    write_artifact(&output_directory.join(HEADER_FILENAME), &render_header(shader_info))?;
    write_artifact(&output_directory.join(SOURCE_FILENAME), &render_source())
}

/// Write the Python summary module into `output_directory`
pub fn write_py_summary(shader_info: &ShaderInfoMap, output_directory: &Path) -> Result<()> {
    write_artifact(
        &output_directory.join(PY_SUMMARY_FILENAME),
        &render_py_summary(shader_info),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ShaderInfo;
    use indexmap::IndexMap;
    use smallvec::smallvec;

    fn skybox_info() -> ShaderInfoMap {
        let mut map = ShaderInfoMap::new();
        map.insert(
            ShaderType::Skybox,
            ShaderInfo {
                attributes: IndexMap::from([("position".to_string(), "vec3".to_string())]),
                uniforms: IndexMap::new(),
                valid_attributes: smallvec![ShaderVertexAttributeVariable::XyzPosition],
                valid_uniforms: smallvec![
                    ShaderUniformVariable::WorldToCamera,
                    ShaderUniformVariable::CameraToClip,
                    ShaderUniformVariable::SkyboxTextureUnit,
                ],
            },
        );
        map
    }

    #[test]
    fn header_rendering_is_idempotent() {
        let info = skybox_info();
        assert_eq!(render_header(&info), render_header(&info));
        assert_eq!(render_source(), render_source());
        assert_eq!(render_py_summary(&info), render_py_summary(&info));
    }

    #[test]
    fn header_excludes_the_index_sentinel() {
        let header = render_header(&ShaderInfoMap::new());
        assert!(!header.contains("    INDEX,"));
        assert!(header.contains("    XYZ_POSITION,"));
    }

    #[test]
    fn header_contains_used_variable_tables() {
        let header = render_header(&skybox_info());
        assert!(header.contains(
            "{ShaderType::SKYBOX, {ShaderVertexAttributeVariable::XYZ_POSITION}},"
        ));
        assert!(header.contains(
            "{ShaderType::SKYBOX, {ShaderUniformVariable::WORLD_TO_CAMERA, \
             ShaderUniformVariable::CAMERA_TO_CLIP, ShaderUniformVariable::SKYBOX_TEXTURE_UNIT}},"
        ));
    }

    #[test]
    fn header_restricts_attribute_names_to_layout_holders() {
        let header = render_header(&ShaderInfoMap::new());
        // TEXTURE_COORDINATE has no layout, so no declared-name entry
        assert!(!header.contains("{ShaderVertexAttributeVariable::TEXTURE_COORDINATE, \"texture_coordinate\"}"));
        assert!(header.contains("{ShaderVertexAttributeVariable::XYZ_POSITION, \"xyz_position\"}"));
    }

    #[test]
    fn source_lookup_function_covers_every_program_and_throws_otherwise() {
        let source = render_source();
        for shader_type in ShaderType::ALL {
            assert!(source.contains(&format!(
                "case ShaderType::{}: return \"{}\";",
                shader_type.name(),
                shader_type.lowercase_name()
            )));
        }
        assert!(source.contains("throw std::runtime_error(\"unknown ShaderType\");"));
    }

    #[test]
    fn py_summary_contains_only_the_attribute_table() {
        let summary = render_py_summary(&skybox_info());
        assert!(summary.starts_with("from standard import *\n"));
        assert!(summary.contains(
            "    ShaderType.SKYBOX: [ShaderVertexAttributeVariable.XYZ_POSITION],\n"
        ));
        assert!(!summary.contains("shader_to_used_uniform_variable"));
    }

    #[test]
    fn skipped_programs_are_absent_from_generated_tables() {
        // An empty result map renders empty tables, not empty-list entries
        let header = render_header(&ShaderInfoMap::new());
        assert!(header.contains("        shader_to_used_vertex_attribute_variables = {\n        };"));
    }
}
