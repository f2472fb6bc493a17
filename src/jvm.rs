//! Reads the metadata of a Java runtime from its `java.` property report.

use crate::{
    error::JvmError,
    properties::{PropertyMap, PropertyTable},
    report,
};
use std::fmt;

/// The property holding the runtime's installation directory.
pub const JAVA_HOME: &str = "java.home";
/// The property holding the runtime's specification version.
pub const JAVA_SPECIFICATION_VERSION: &str = "java.specification.version";

/// Metadata about a Java runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JvmMetadata {
    /// The runtime's installation directory, from `java.home`.
    pub java_home: Option<String>,
    /// The runtime's normalised specification version, from `java.specification.version`.
    pub specification_version: Option<u32>,
    /// Every property the metadata was read from.
    pub properties: PropertyMap,
}

impl JvmMetadata {
    /// Returns the metadata contained in a given property table. Returns an error if the table has
    /// a specification version that can't be parsed.
    pub fn from_properties(properties: PropertyMap) -> Result<Self, JvmError> {
        let java_home = properties.get(JAVA_HOME).map(String::from);
        let specification_version = properties
            .get(JAVA_SPECIFICATION_VERSION)
            .map(parse_specification_version)
            .transpose()?;

        Ok(Self {
            java_home,
            specification_version,
            properties,
        })
    }

    /// Returns the metadata contained in a given property report.
    pub fn from_report(text: &str) -> Result<Self, JvmError> {
        Self::from_properties(report::parse(text))
    }
}

impl fmt::Display for JvmMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", JAVA_HOME, self.java_home.as_deref().unwrap_or("unknown"))?;
        match self.specification_version {
            Some(version) => writeln!(f, "{}: {}", JAVA_SPECIFICATION_VERSION, version),
            None => writeln!(f, "{}: unknown", JAVA_SPECIFICATION_VERSION),
        }
    }
}

/// Parses a `java.specification.version` value into a single number. The legacy `1.x` versions
/// map to `x` (with both `1.0` and `1.1` mapping to 1); anything else has to be an unsigned
/// integer.
pub fn parse_specification_version(version: &str) -> Result<u32, JvmError> {
    match version {
        "1.0" | "1.1" => Ok(1),
        "1.2" => Ok(2),
        "1.3" => Ok(3),
        "1.4" => Ok(4),
        "1.5" => Ok(5),
        "1.6" => Ok(6),
        "1.7" => Ok(7),
        "1.8" => Ok(8),
        _ => version
            .parse()
            .map_err(|_| JvmError::InvalidSpecificationVersion(version.to_owned())),
    }
}
