use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::types::{OptionValue, Platform};

/// Configuration for one console-runner invocation.
///
/// Mirrors the JSON config file shape; every field is optional and the
/// default is a plain run with no switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunConfig {
    /// Path to the console runner, a directory containing it, or a bare
    /// name. May arrive wrapped in quotes and whitespace; the resolver
    /// unwraps it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    #[serde(skip_serializing_if = "Options::is_empty")]
    pub options: Options,

    /// Write results to an XML report and summarize it into the log.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub teamcity: bool,

    /// Log a non-zero exit code instead of failing the run.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub continue_on_error: bool,
}

impl RunConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".nunit-runner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("nunit-runner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }
}

/// Switch map with insertion order preserved.
///
/// The order switches appear in here is the order they appear on the
/// command line, so this is a `Vec` of pairs with map-style accessors
/// rather than a hash map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(Vec<(String, OptionValue)>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. An existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, OptionValue)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl Serialize for Options {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// Hand-rolled so JSON document order survives deserialization; deriving
// would go through a hash map and scramble the switch order.
impl<'de> Deserialize<'de> for Options {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct OptionsVisitor;

        impl<'de> Visitor<'de> for OptionsVisitor {
            type Value = Options;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of switch names to values")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, OptionValue>()? {
                    entries.push((key, value));
                }
                Ok(Options(entries))
            }
        }

        deserializer.deserialize_map(OptionsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_preserve_insertion_order() {
        let mut options = Options::new();
        options.insert("nologo", true);
        options.insert("config", "Release");
        options.insert("labels", true);

        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["nologo", "config", "labels"]);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut options = Options::new();
        options.insert("config", "Debug");
        options.insert("labels", true);
        options.insert("config", "Release");

        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["config", "labels"]);
        assert_eq!(options.get("config"), Some(&OptionValue::from("Release")));
    }

    #[test]
    fn config_deserializes_document_order_and_value_kinds() {
        let json = r#"{
            "platform": "x86",
            "options": {
                "nologo": true,
                "timeout": 2000,
                "exclude": ["Acceptance", "Integration"],
                "config": "Release"
            },
            "continueOnError": true
        }"#;

        let config: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.platform, Some(Platform::X86));
        assert!(config.continue_on_error);
        assert!(!config.teamcity);

        let entries: Vec<(&str, &OptionValue)> = config.options.iter().collect();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], ("nologo", &OptionValue::Flag(true)));
        assert_eq!(entries[1].0, "timeout");
        assert_eq!(
            entries[2],
            (
                "exclude",
                &OptionValue::List(vec!["Acceptance".into(), "Integration".into()])
            )
        );
        assert_eq!(entries[3], ("config", &OptionValue::from("Release")));
    }

    #[test]
    fn config_round_trips_through_a_file() {
        let mut config = RunConfig::default();
        config.executable = Some("C:\\nunit\\bin".to_string());
        config.teamcity = true;
        config.options.insert("labels", true);
        config.options.insert("config", "Release");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nunit-runner.json");
        config.save_to_file(&path).unwrap();
        let parsed = RunConfig::load_from_file(&path).unwrap();

        assert_eq!(parsed.executable.as_deref(), Some("C:\\nunit\\bin"));
        assert!(parsed.teamcity);
        let keys: Vec<&str> = parsed.options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["labels", "config"]);
    }

    #[test]
    fn find_config_file_walks_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let config_path = dir.path().join(".nunit-runner.json");
        std::fs::write(&config_path, "{}").unwrap();

        let found = RunConfig::find_config_file(&nested).unwrap();
        assert_eq!(found, config_path);
    }
}
