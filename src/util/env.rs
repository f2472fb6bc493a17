//! Provides several utilities related to the running program's environment variables.

use crate::{properties::PropertyMap, report};

/// Returns all environment variables of the current process with a given prefix as a vector with
/// each variable being a single `name=value` element, sorted by name.
pub fn dump_lines(prefix: &str) -> Vec<String> {
    report::lines(prefix, &PropertyMap::from_env())
        .iter()
        .map(ToString::to_string)
        .collect()
}
