//! Module naming and the artifact names derived from it

use serde::{Deserialize, Serialize};
use std::fmt;

const RESOURCES_SUFFIX: &str = "Resources";
const TESTS_SUFFIX: &str = "Tests";

/// Canonical identity of a module.
///
/// Every generated artifact name is derived from it: the main target carries
/// the name verbatim, the resource bundle appends `Resources` and the test
/// bundle appends `Tests`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the main target
    pub fn target(&self) -> &str {
        &self.0
    }

    /// Name of the resource bundle target
    pub fn resources(&self) -> String {
        format!("{}{}", self.0, RESOURCES_SUFFIX)
    }

    /// Name of the unit-test target
    pub fn tests(&self) -> String {
        format!("{}{}", self.0, TESTS_SUFFIX)
    }

    /// All names this module may claim in a project, main target first
    pub fn derived_names(&self) -> [String; 3] {
        [self.0.clone(), self.resources(), self.tests()]
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ModuleName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ModuleName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    include!("name.test.rs");
}
