//! Pass-through value types.
//!
//! Settings, headers, scripts, plist properties and file elements are only
//! threaded from the manifest into the generated descriptor. Nothing in the
//! resolver inspects their contents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product kind of a generated target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetProduct {
    App,
    StaticLibrary,
    DynamicLibrary,
    Framework,
    StaticFramework,
    UnitTests,
    UiTests,
    Bundle,
    AppExtension,
    CommandLineTool,
}

impl TargetProduct {
    /// Statically linked products never embed resources nor link transitively
    pub fn is_static(&self) -> bool {
        matches!(self, Self::StaticLibrary | Self::StaticFramework)
    }
}

/// Destination platform of every generated target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Macos,
    Tvos,
    Watchos,
}

/// Build setting value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    String(String),
    Array(Vec<String>),
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

pub type SettingsDictionary = BTreeMap<String, SettingValue>;

/// Build settings: a base dictionary plus per-configuration overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub base: SettingsDictionary,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub configurations: BTreeMap<String, SettingsDictionary>,
}

impl Settings {
    pub fn with_base(base: SettingsDictionary) -> Self {
        Self {
            base,
            configurations: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.configurations.is_empty()
    }
}

/// Header visibility globs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headers {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub public: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub private: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptOrder {
    #[default]
    Pre,
    Post,
}

/// Build-phase script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetScript {
    pub name: String,
    pub script: String,
    #[serde(default)]
    pub order: ScriptOrder,
}

impl TargetScript {
    /// Post-build step deleting the executable Xcode places inside a bundle
    pub fn remove_bundle_executable() -> Self {
        Self {
            name: "Remove Embedded Executable".to_string(),
            script: concat!(
                "FILE=\"${BUILT_PRODUCTS_DIR}/${TARGET_NAME}.bundle/${TARGET_NAME}\"\n",
                "if [[ -f $FILE ]];then\n",
                "    rm \"$FILE\"\n",
                "fi\n",
            )
            .to_string(),
            order: ScriptOrder::Post,
        }
    }
}

/// Info.plist of a target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfoPlist {
    #[default]
    Default,
    ExtendingDefault(BTreeMap<String, serde_json::Value>),
}

impl InfoPlist {
    pub fn extending_default(properties: BTreeMap<String, serde_json::Value>) -> Self {
        if properties.is_empty() {
            Self::Default
        } else {
            Self::ExtendingDefault(properties)
        }
    }
}

/// Resource entry: a glob of files or a folder reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceFileElement {
    Glob(String),
    FolderReference(String),
}

/// Package made available to the project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Package {
    Remote { url: String, version: String },
    Local { path: String },
}

#[cfg(test)]
mod tests {
    include!("values.test.rs");
}
