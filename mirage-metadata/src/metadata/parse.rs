//! Metadata parsing from files and strings.

use std::{collections::HashSet, path::Path, str::FromStr};

use super::Metadata;
use crate::{Error, Result, SourceContext, TypeDecl, simple_name};

impl FromStr for Metadata {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_metadata(s, "mirage.toml")
    }
}

impl Metadata {
    /// Parse a metadata file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_metadata(&content, &path.display().to_string())
    }

    /// Parse metadata from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_metadata(content, filename)
    }
}

/// Parse metadata from content with the given filename for error reporting.
pub fn parse_metadata(content: &str, filename: &str) -> Result<Metadata> {
    let ctx = SourceContext::new(content, filename);
    let metadata: Metadata = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_metadata(&metadata, &ctx)?;
    Ok(metadata)
}

/// Structural checks that serde cannot express.
fn validate_metadata(metadata: &Metadata, ctx: &SourceContext) -> Result<()> {
    if metadata.assembly.name.trim().is_empty() {
        return Err(ctx.validation_error("assembly name cannot be empty"));
    }

    let mut seen = HashSet::new();
    for ty in &metadata.types {
        if ty.name.trim().is_empty() || ty.name.split('.').any(str::is_empty) {
            return Err(ctx.validation_error_at(
                format!("invalid type name '{}'", ty.name),
                ctx.find_span(&ty.name, 0),
            ));
        }
        if !seen.insert(ty.name.as_str()) {
            return Err(ctx.duplicate_type_error(&ty.name));
        }
        validate_type(ty, ctx)?;
    }
    for ty in &metadata.types {
        validate_enum_defaults(metadata, ty, ctx)?;
    }
    Ok(())
}

/// An explicit default on an enum-typed property must name a declared member.
fn validate_enum_defaults(metadata: &Metadata, ty: &TypeDecl, ctx: &SourceContext) -> Result<()> {
    for property in &ty.properties {
        let Some(toml::Value::String(default)) = &property.default else {
            continue;
        };
        let (inner, _) = property.ty.unwrap_nullable();
        let Some(target) = inner.name().and_then(|name| metadata.find(name)) else {
            continue;
        };
        if !target.is_enum() {
            continue;
        }
        let member = simple_name(default);
        if !target.members.iter().any(|m| m.name() == member) {
            return Err(ctx.validation_error_at(
                format!(
                    "default '{}' of '{}.{}' is not a member of enum '{}'",
                    default, ty.name, property.name, target.name
                ),
                ctx.find_span(default, 0),
            ));
        }
    }
    Ok(())
}

fn validate_type(ty: &TypeDecl, ctx: &SourceContext) -> Result<()> {
    if !ty.members.is_empty() && !ty.is_enum() {
        return Err(ctx.validation_error_at(
            format!("type '{}' declares enum members but is not an enum", ty.name),
            ctx.find_span(&ty.name, 0),
        ));
    }

    let named = ty
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .chain(ty.methods.iter().map(|m| m.name.as_str()))
        .chain(ty.constants.iter().map(|c| c.name.as_str()))
        .chain(ty.members.iter().map(|m| m.name()));
    for name in named {
        if name.trim().is_empty() {
            return Err(ctx.validation_error_at(
                format!("type '{}' has a member with an empty name", ty.name),
                ctx.find_span(&ty.name, 0),
            ));
        }
    }
    Ok(())
}
