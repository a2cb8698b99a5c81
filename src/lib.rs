//! Registry-driven GLSL shader interface validation and code generation
//!
//! This crate maintains the "shader standard": the closed set of uniform and
//! vertex attribute identifiers the engine knows how to bind, together with
//! their expected GLSL types and OpenGL vertex layout configuration. The
//! tool scans the real shader sources for declarations, checks them against
//! the standard, and emits a C++ header/source pair (plus an optional Python
//! summary module) describing which variables each shader program actually
//! uses.
//!
//! Identifiers follow one convention throughout: the registry uses
//! `UPPER_SNAKE_CASE` and the shader source uses the same token in
//! `lower_snake_case`, e.g. `XYZ_POSITION` <-> `xyz_position`.

pub mod color;
pub mod error;
pub mod extract;
pub mod generate;
pub mod standard;
pub mod validate;

pub use error::{Result, StandardError};
