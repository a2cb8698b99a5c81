//! The shader standard: registered uniforms, vertex attributes, and the
//! program catalog
//!
//! The enum identifiers here use the same token as the variable in the
//! shader source, upper-cased:
//!
//! ```text
//! XYZ_POSITION -> xyz_position
//! ```
//!
//! All tables iterate in declaration order; the generator's output order
//! depends on it.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::hash::Hash;

/// Symbolic names for uniform variables (one closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderUniformVariable {
    // Transformations
    CameraToClip,
    WorldToCamera,
    LocalToWorld,
    Transform,
    // Textures
    TextureSampler,
    SkyboxTextureUnit,
    TextTextureUnit,
    Color,
    RgbColor,
    RgbaColor,
    // Lighting
    AmbientLightStrength,
    AmbientLightColor,
    DiffuseLightPosition,
}

impl ShaderUniformVariable {
    /// All variants in declaration order
    pub const ALL: &'static [Self] = &[
        Self::CameraToClip,
        Self::WorldToCamera,
        Self::LocalToWorld,
        Self::Transform,
        Self::TextureSampler,
        Self::SkyboxTextureUnit,
        Self::TextTextureUnit,
        Self::Color,
        Self::RgbColor,
        Self::RgbaColor,
        Self::AmbientLightStrength,
        Self::AmbientLightColor,
        Self::DiffuseLightPosition,
    ];

    /// The symbolic registry name, e.g. `CAMERA_TO_CLIP`
    pub fn name(self) -> &'static str {
        match self {
            Self::CameraToClip => "CAMERA_TO_CLIP",
            Self::WorldToCamera => "WORLD_TO_CAMERA",
            Self::LocalToWorld => "LOCAL_TO_WORLD",
            Self::Transform => "TRANSFORM",
            Self::TextureSampler => "TEXTURE_SAMPLER",
            Self::SkyboxTextureUnit => "SKYBOX_TEXTURE_UNIT",
            Self::TextTextureUnit => "TEXT_TEXTURE_UNIT",
            Self::Color => "COLOR",
            Self::RgbColor => "RGB_COLOR",
            Self::RgbaColor => "RGBA_COLOR",
            Self::AmbientLightStrength => "AMBIENT_LIGHT_STRENGTH",
            Self::AmbientLightColor => "AMBIENT_LIGHT_COLOR",
            Self::DiffuseLightPosition => "DIFFUSE_LIGHT_POSITION",
        }
    }

    /// The identifier this variable uses in shader source, e.g. `camera_to_clip`
    pub fn shader_identifier(self) -> String {
        self.name().to_ascii_lowercase()
    }
}

/// Symbolic names for vertex attribute variables (one closed set)
///
/// Fragment shader `in` receivers (pass-through variables) live in the same
/// set as true vertex attributes; only the latter carry a layout
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderVertexAttributeVariable {
    // vertex shader ones
    Index,
    XyzPosition,
    XyPosition,
    PassthroughTextureCoordinate,
    PassthroughRgbColor,
    PassthroughNormal,
    // fragment shader ones (really `in`s into the fragment shader)
    TextureCoordinate,
    TextureCoordinate3d,
    RgbColor,
    WorldSpacePosition,
    Normal,
}

impl ShaderVertexAttributeVariable {
    /// All variants in declaration order
    pub const ALL: &'static [Self] = &[
        Self::Index,
        Self::XyzPosition,
        Self::XyPosition,
        Self::PassthroughTextureCoordinate,
        Self::PassthroughRgbColor,
        Self::PassthroughNormal,
        Self::TextureCoordinate,
        Self::TextureCoordinate3d,
        Self::RgbColor,
        Self::WorldSpacePosition,
        Self::Normal,
    ];

    /// The symbolic registry name, e.g. `XYZ_POSITION`
    pub fn name(self) -> &'static str {
        match self {
            Self::Index => "INDEX",
            Self::XyzPosition => "XYZ_POSITION",
            Self::XyPosition => "XY_POSITION",
            Self::PassthroughTextureCoordinate => "PASSTHROUGH_TEXTURE_COORDINATE",
            Self::PassthroughRgbColor => "PASSTHROUGH_RGB_COLOR",
            Self::PassthroughNormal => "PASSTHROUGH_NORMAL",
            Self::TextureCoordinate => "TEXTURE_COORDINATE",
            Self::TextureCoordinate3d => "TEXTURE_COORDINATE_3D",
            Self::RgbColor => "RGB_COLOR",
            Self::WorldSpacePosition => "WORLD_SPACE_POSITION",
            Self::Normal => "NORMAL",
        }
    }

    /// The identifier this variable uses in shader source, e.g. `xyz_position`
    pub fn shader_identifier(self) -> String {
        self.name().to_ascii_lowercase()
    }
}

/// Identifiers for the shader programs the engine builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderType {
    CwlVTransformationWithSolidColor,
    CwlVTransformationWithTextures,
    TransformVWithTextures,
    CwlVTransformationWithTexturesAmbientLighting,
    CwlVTransformationWithTexturesAmbientAndDiffuseLighting,
    Skybox,
    AbsolutePositionWithSolidColor,
    Text,
    AbsolutePositionWithColoredVertex,
}

impl ShaderType {
    /// All variants in declaration order
    pub const ALL: &'static [Self] = &[
        Self::CwlVTransformationWithSolidColor,
        Self::CwlVTransformationWithTextures,
        Self::TransformVWithTextures,
        Self::CwlVTransformationWithTexturesAmbientLighting,
        Self::CwlVTransformationWithTexturesAmbientAndDiffuseLighting,
        Self::Skybox,
        Self::AbsolutePositionWithSolidColor,
        Self::Text,
        Self::AbsolutePositionWithColoredVertex,
    ];

    /// The symbolic name, e.g. `SKYBOX`
    pub fn name(self) -> &'static str {
        match self {
            Self::CwlVTransformationWithSolidColor => "CWL_V_TRANSFORMATION_WITH_SOLID_COLOR",
            Self::CwlVTransformationWithTextures => "CWL_V_TRANSFORMATION_WITH_TEXTURES",
            Self::TransformVWithTextures => "TRANSFORM_V_WITH_TEXTURES",
            Self::CwlVTransformationWithTexturesAmbientLighting => {
                "CWL_V_TRANSFORMATION_WITH_TEXTURES_AMBIENT_LIGHTING"
            }
            Self::CwlVTransformationWithTexturesAmbientAndDiffuseLighting => {
                "CWL_V_TRANSFORMATION_WITH_TEXTURES_AMBIENT_AND_DIFFUSE_LIGHTING"
            }
            Self::Skybox => "SKYBOX",
            Self::AbsolutePositionWithSolidColor => "ABSOLUTE_POSITION_WITH_SOLID_COLOR",
            Self::Text => "TEXT",
            Self::AbsolutePositionWithColoredVertex => "ABSOLUTE_POSITION_WITH_COLORED_VERTEX",
        }
    }

    /// The lowercase declared name, e.g. `skybox`
    pub fn lowercase_name(self) -> String {
        self.name().to_ascii_lowercase()
    }
}

impl fmt::Display for ShaderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expected GLSL type for a registered uniform
#[derive(Debug, Clone, Copy)]
pub struct UniformData {
    pub glsl_type: &'static str,
}

/// Registered data for a vertex attribute variable
///
/// Fragment-only receivers carry empty human names and native type; only
/// the GLSL type participates in validation.
#[derive(Debug, Clone, Copy)]
pub struct VertexAttributeData {
    pub singular_name: &'static str,
    pub plural_name: &'static str,
    pub attrib_type: &'static str,
    pub glsl_type: &'static str,
}

/// OpenGL vertex layout configuration for attributes streamed from a
/// vertex buffer
///
/// Fields are stored as the GL token spellings the generator emits
/// verbatim into C++.
#[derive(Debug, Clone, Copy)]
pub struct GlVertexAttributeConfiguration {
    pub components_per_vertex: &'static str,
    pub data_type_of_component: &'static str,
    pub normalize: &'static str,
    pub stride: &'static str,
    pub pointer_to_start_of_data: &'static str,
}

/// Source files composing one shader program
#[derive(Debug, Clone, Copy)]
pub struct ShaderProgram {
    pub vertex_shader_filename: &'static str,
    pub fragment_shader_filename: &'static str,
    /// Declared for completeness; generation never reads it.
    pub geometry_shader_filename: Option<&'static str>,
}

impl ShaderProgram {
    const fn new(vertex: &'static str, fragment: &'static str) -> Self {
        Self {
            vertex_shader_filename: vertex,
            fragment_shader_filename: fragment,
            geometry_shader_filename: None,
        }
    }
}

/// Insert into a registry table, keeping the later definition on duplicate
/// keys (first-occurrence position is preserved)
fn register<K: Hash + Eq + Copy + fmt::Debug, V>(map: &mut IndexMap<K, V>, key: K, value: V) {
    if map.insert(key, value).is_some() {
        log::warn!("duplicate registry entry for {:?}, keeping the later definition", key);
    }
}

/// Registry of uniform symbols to their expected GLSL types
///
/// COLOR is deliberately unregistered: it exists in the enum but a shader
/// declaring `color` reports as unrecognized until it gets an entry here.
pub static UNIFORM_REGISTRY: Lazy<IndexMap<ShaderUniformVariable, UniformData>> = Lazy::new(|| {
    use ShaderUniformVariable::*;
    let mut m = IndexMap::new();
    register(&mut m, CameraToClip, UniformData { glsl_type: "mat4" });
    register(&mut m, WorldToCamera, UniformData { glsl_type: "mat4" });
    register(&mut m, LocalToWorld, UniformData { glsl_type: "mat4" });
    register(&mut m, Transform, UniformData { glsl_type: "mat4" });
    register(&mut m, TextureSampler, UniformData { glsl_type: "sampler2D" });
    register(&mut m, SkyboxTextureUnit, UniformData { glsl_type: "samplerCube" });
    register(&mut m, TextTextureUnit, UniformData { glsl_type: "sampler2D" });
    register(&mut m, RgbColor, UniformData { glsl_type: "vec3" });
    register(&mut m, RgbaColor, UniformData { glsl_type: "vec4" });
    register(&mut m, AmbientLightStrength, UniformData { glsl_type: "float" });
    register(&mut m, AmbientLightColor, UniformData { glsl_type: "vec3" });
    register(&mut m, DiffuseLightPosition, UniformData { glsl_type: "vec3" });
    m
});

/// Registry of vertex attribute symbols to their registered data
pub static VERTEX_ATTRIBUTE_REGISTRY: Lazy<
    IndexMap<ShaderVertexAttributeVariable, VertexAttributeData>,
> = Lazy::new(|| {
    use ShaderVertexAttributeVariable::*;
    let mut m = IndexMap::new();
    // INDEX never appears in a GLSL program, so it has no GLSL type
    register(
        &mut m,
        Index,
        VertexAttributeData {
            singular_name: "index",
            plural_name: "indices",
            attrib_type: "unsigned int",
            glsl_type: "",
        },
    );
    register(
        &mut m,
        XyzPosition,
        VertexAttributeData {
            singular_name: "position",
            plural_name: "positions",
            attrib_type: "glm::vec3",
            glsl_type: "vec3",
        },
    );
    register(
        &mut m,
        XyPosition,
        VertexAttributeData {
            singular_name: "xy_position",
            plural_name: "xy_positions",
            attrib_type: "glm::vec2",
            glsl_type: "vec2",
        },
    );
    register(
        &mut m,
        PassthroughTextureCoordinate,
        VertexAttributeData {
            singular_name: "texture_coordinate",
            plural_name: "texture_coordinates",
            attrib_type: "glm::vec2",
            glsl_type: "vec2",
        },
    );
    register(
        &mut m,
        TextureCoordinate,
        VertexAttributeData {
            singular_name: "texture_coordinate",
            plural_name: "texture_coordinates",
            attrib_type: "glm::vec2",
            glsl_type: "vec2",
        },
    );
    register(
        &mut m,
        PassthroughNormal,
        VertexAttributeData {
            singular_name: "normal",
            plural_name: "normals",
            attrib_type: "glm::vec3",
            glsl_type: "vec3",
        },
    );
    register(
        &mut m,
        PassthroughRgbColor,
        VertexAttributeData {
            singular_name: "rgb_color",
            plural_name: "rgb_colors",
            attrib_type: "glm::vec3",
            glsl_type: "vec3",
        },
    );
    register(
        &mut m,
        RgbColor,
        VertexAttributeData {
            singular_name: "rgb_color",
            plural_name: "rgb_colors",
            attrib_type: "glm::vec3",
            glsl_type: "vec3",
        },
    );
    // Fragment-only receivers; never bound from a vertex buffer
    register(
        &mut m,
        Normal,
        VertexAttributeData {
            singular_name: "",
            plural_name: "",
            attrib_type: "",
            glsl_type: "vec3",
        },
    );
    register(
        &mut m,
        WorldSpacePosition,
        VertexAttributeData {
            singular_name: "",
            plural_name: "",
            attrib_type: "",
            glsl_type: "vec3",
        },
    );
    register(
        &mut m,
        TextureCoordinate3d,
        VertexAttributeData {
            singular_name: "",
            plural_name: "",
            attrib_type: "",
            glsl_type: "vec3",
        },
    );
    m
});

/// Layout configuration for attributes consumed directly from a vertex
/// buffer; pass-through receivers in the fragment shader have no entry
pub static VERTEX_ATTRIBUTE_LAYOUTS: Lazy<
    IndexMap<ShaderVertexAttributeVariable, GlVertexAttributeConfiguration>,
> = Lazy::new(|| {
    use ShaderVertexAttributeVariable::*;
    let float3 = GlVertexAttributeConfiguration {
        components_per_vertex: "3",
        data_type_of_component: "GL_FLOAT",
        normalize: "GL_FALSE",
        stride: "0",
        pointer_to_start_of_data: "(void *)0",
    };
    let float2 = GlVertexAttributeConfiguration {
        components_per_vertex: "2",
        ..float3
    };
    let mut m = IndexMap::new();
    register(&mut m, XyzPosition, float3);
    register(&mut m, XyPosition, float2);
    register(&mut m, PassthroughNormal, float3);
    register(&mut m, PassthroughTextureCoordinate, float2);
    register(&mut m, PassthroughRgbColor, float3);
    m
});

/// Catalog of shader programs to their source files
pub static SHADER_CATALOG: Lazy<IndexMap<ShaderType, ShaderProgram>> = Lazy::new(|| {
    use ShaderType::*;
    let mut m = IndexMap::new();
    register(
        &mut m,
        CwlVTransformationWithSolidColor,
        ShaderProgram::new("CWL_v_transformation.vert", "solid_color.frag"),
    );
    register(
        &mut m,
        CwlVTransformationWithTextures,
        ShaderProgram::new(
            "CWL_v_transformation_with_texture_coordinate_passthrough.vert",
            "textured.frag",
        ),
    );
    register(
        &mut m,
        TransformVWithTextures,
        ShaderProgram::new(
            "transform_v_with_texture_coordinate_passthrough.vert",
            "textured.frag",
        ),
    );
    register(
        &mut m,
        CwlVTransformationWithTexturesAmbientLighting,
        ShaderProgram::new(
            "CWL_v_transformation_with_texture_coordinate_passthrough.vert",
            "textured_with_ambient_lighting.frag",
        ),
    );
    register(
        &mut m,
        CwlVTransformationWithTexturesAmbientAndDiffuseLighting,
        ShaderProgram::new(
            "CWL_v_transformation_with_texture_coordinate_and_normal_passthrough.vert",
            "textured_with_ambient_and_diffuse_lighting.frag",
        ),
    );
    register(&mut m, Skybox, ShaderProgram::new("cubemap.vert", "cubemap.frag"));
    register(
        &mut m,
        AbsolutePositionWithSolidColor,
        ShaderProgram::new("absolute_position.vert", "solid_color.frag"),
    );
    register(&mut m, Text, ShaderProgram::new("text.vert", "text.frag"));
    register(
        &mut m,
        AbsolutePositionWithColoredVertex,
        ShaderProgram::new("colored_vertices.vert", "colored_vertices.frag"),
    );
    m
});

/// Resolve a declared shader identifier to a registered uniform symbol
///
/// Resolution is by uppercasing the identifier and matching it against the
/// registry's keys (not the full enum: a symbol without a registry entry
/// does not resolve).
pub fn registry_key_for_uniform(declared_name: &str) -> Option<ShaderUniformVariable> {
    let upper = declared_name.to_ascii_uppercase();
    UNIFORM_REGISTRY.keys().copied().find(|u| u.name() == upper)
}

/// Resolve a declared shader identifier to a registered vertex attribute
/// symbol
pub fn registry_key_for_attribute(declared_name: &str) -> Option<ShaderVertexAttributeVariable> {
    let upper = declared_name.to_ascii_uppercase();
    VERTEX_ATTRIBUTE_REGISTRY.keys().copied().find(|a| a.name() == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_casing_round_trips() {
        for &symbol in UNIFORM_REGISTRY.keys() {
            assert_eq!(
                registry_key_for_uniform(&symbol.shader_identifier()),
                Some(symbol)
            );
        }
    }

    #[test]
    fn attribute_casing_round_trips() {
        for &symbol in VERTEX_ATTRIBUTE_REGISTRY.keys() {
            assert_eq!(
                registry_key_for_attribute(&symbol.shader_identifier()),
                Some(symbol)
            );
        }
    }

    #[test]
    fn color_is_unregistered() {
        // In the enum, but no registry entry: must not resolve
        assert_eq!(registry_key_for_uniform("color"), None);
    }

    #[test]
    fn unknown_identifier_does_not_resolve() {
        assert_eq!(registry_key_for_uniform("tranform"), None);
        assert_eq!(registry_key_for_attribute("positoin"), None);
    }

    #[test]
    fn human_readable_names_do_not_resolve() {
        // "position" is XYZ_POSITION's singular name, not its symbol;
        // only `xyz_position` resolves
        assert_eq!(registry_key_for_attribute("position"), None);
        assert_eq!(
            registry_key_for_attribute("xyz_position"),
            Some(ShaderVertexAttributeVariable::XyzPosition)
        );
    }

    #[test]
    fn every_uniform_has_exactly_one_expected_type() {
        for data in UNIFORM_REGISTRY.values() {
            assert!(!data.glsl_type.is_empty());
        }
    }

    #[test]
    fn layouts_are_a_subset_of_the_attribute_registry() {
        for key in VERTEX_ATTRIBUTE_LAYOUTS.keys() {
            assert!(VERTEX_ATTRIBUTE_REGISTRY.contains_key(key));
        }
        // The sentinel never gets a layout
        assert!(!VERTEX_ATTRIBUTE_LAYOUTS.contains_key(&ShaderVertexAttributeVariable::Index));
    }

    #[test]
    fn catalog_covers_every_shader_type() {
        for shader_type in ShaderType::ALL {
            assert!(SHADER_CATALOG.contains_key(shader_type));
        }
    }

    #[test]
    fn duplicate_registration_keeps_the_later_definition() {
        let mut m = IndexMap::new();
        register(&mut m, ShaderUniformVariable::Transform, UniformData { glsl_type: "mat4" });
        register(&mut m, ShaderUniformVariable::Transform, UniformData { glsl_type: "mat3" });
        assert_eq!(m.len(), 1);
        assert_eq!(m[&ShaderUniformVariable::Transform].glsl_type, "mat3");
    }
}
