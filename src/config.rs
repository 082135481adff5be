//! Configuration file support for component-tree.
//!
//! Provides YAML-based configuration through `component-tree.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::application::dto::{OutputFormat, MAX_PAGE_SIZE};
use crate::component_tree::policies::{QualifierRules, ResourceType, DEFAULT_BEST_VALUE_QUALIFIERS};
use crate::ports::outbound::user_session::roles;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "component-tree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub page_size: Option<usize>,
    /// Metric keys used when the command line gives none.
    pub metric_keys: Option<Vec<String>>,
    /// Hierarchy of qualifiers; replaces the built-in tree when present.
    pub resource_types: Option<Vec<ResourceTypeEntry>>,
    /// Qualifiers eligible for best value measures.
    pub best_value_qualifiers: Option<Vec<String>>,
    pub permissions: Option<PermissionsConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A qualifier and the qualifiers of its children.
#[derive(Debug, Deserialize, Clone)]
pub struct ResourceTypeEntry {
    pub qualifier: String,
    #[serde(default)]
    pub children: Vec<String>,
}

/// Permissions of the static user session.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct PermissionsConfig {
    #[serde(default)]
    pub system_admin: bool,
    /// Project uuid to roles (`admin`, `user`).
    #[serde(default)]
    pub projects: BTreeMap<String, Vec<String>>,
}

impl ConfigFile {
    /// Qualifier rules described by this file, built-in values filling the gaps.
    pub fn qualifier_rules(&self) -> Result<QualifierRules> {
        let defaults = QualifierRules::default();
        let resource_types = match &self.resource_types {
            Some(entries) => entries
                .iter()
                .map(|e| ResourceType {
                    qualifier: e.qualifier.clone(),
                    children: e.children.clone(),
                })
                .collect(),
            None => defaults.resource_types().to_vec(),
        };
        let best_value_qualifiers = self
            .best_value_qualifiers
            .clone()
            .unwrap_or_else(|| DEFAULT_BEST_VALUE_QUALIFIERS.map(String::from).to_vec());

        QualifierRules::new(resource_types, best_value_qualifiers)
    }

    /// `ROLE:PROJECT_UUID` grants listed under `permissions.projects`.
    pub fn grants(&self) -> Vec<String> {
        self.permissions
            .iter()
            .flat_map(|p| &p.projects)
            .flat_map(|(uuid, roles)| roles.iter().map(move |role| format!("{}:{}", role, uuid)))
            .collect()
    }

    pub fn system_admin(&self) -> bool {
        self.permissions.as_ref().is_some_and(|p| p.system_admin)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?;
    }

    match config.page_size {
        Some(0) => bail!(
            "page_size must be greater than 0.\n\n💡 Hint: Use a value between 1 and {}.",
            MAX_PAGE_SIZE
        ),
        Some(size) if size > MAX_PAGE_SIZE => bail!(
            "page_size {} exceeds the maximum of {}.",
            size,
            MAX_PAGE_SIZE
        ),
        _ => {}
    }

    if let Some(keys) = &config.metric_keys {
        if keys.iter().any(|k| k.trim().is_empty()) {
            bail!("metric_keys must not contain empty keys.");
        }
    }

    if let Some(entries) = &config.resource_types {
        for (i, entry) in entries.iter().enumerate() {
            if entry.qualifier.trim().is_empty() {
                bail!(
                    "resource_types[{}].qualifier must not be empty.\n\n\
                     💡 Hint: Each resource type needs a qualifier (e.g., \"TRK\").",
                    i
                );
            }
        }
    }

    if let Some(qualifiers) = &config.best_value_qualifiers {
        if qualifiers.iter().any(|q| q.trim().is_empty()) {
            bail!("best_value_qualifiers must not contain empty qualifiers.");
        }
    }

    if let Some(permissions) = &config.permissions {
        for (uuid, granted) in &permissions.projects {
            if let Some(role) = granted
                .iter()
                .find(|r| *r != roles::ADMIN && *r != roles::USER)
            {
                bail!(
                    "permissions.projects.{}: unknown role '{}'. Expected '{}' or '{}'.",
                    uuid,
                    role,
                    roles::ADMIN,
                    roles::USER
                );
            }
        }
    }

    config.qualifier_rules()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
format: markdown
page_size: 50
metric_keys:
  - ncloc
  - coverage
resource_types:
  - qualifier: TRK
    children: [DIR]
  - qualifier: DIR
    children: [FIL]
best_value_qualifiers: [FIL]
permissions:
  system_admin: false
  projects:
    project-uuid: [user, admin]
"#,
        );

        let config = load_config_from_path(&path).unwrap();

        assert_eq!(config.format.as_deref(), Some("markdown"));
        assert_eq!(config.page_size, Some(50));
        assert_eq!(
            config.metric_keys.as_deref(),
            Some(&["ncloc".to_string(), "coverage".to_string()][..])
        );
        let rules = config.qualifier_rules().unwrap();
        assert_eq!(rules.leaves_qualifiers("TRK"), vec!["FIL".to_string()]);
        assert!(!rules.is_eligible_for_best_value("UTS"));
        assert!(!config.system_admin());
        assert_eq!(
            config.grants(),
            vec![
                "user:project-uuid".to_string(),
                "admin:project-uuid".to_string(),
            ]
        );
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "format: json\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();

        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = load_config_from_path(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "page_size: 0\n");

        let err = load_config_from_path(&path).unwrap_err();

        assert!(format!("{:#}", err).contains("page_size must be greater than 0"));
    }

    #[test]
    fn test_empty_qualifier_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
resource_types:
  - qualifier: "  "
    children: [FIL]
"#,
        );

        let err = load_config_from_path(&path).unwrap_err();

        assert!(format!("{:#}", err).contains("must not be empty"));
    }

    #[test]
    fn test_cyclic_resource_types_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
resource_types:
  - qualifier: TRK
    children: [DIR]
  - qualifier: DIR
    children: [TRK]
"#,
        );

        assert!(load_config_from_path(&path).is_err());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
permissions:
  projects:
    project-uuid: [codeviewer]
"#,
        );

        let err = load_config_from_path(&path).unwrap_err();

        assert!(format!("{:#}", err).contains("unknown role 'codeviewer'"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format: csv\n");
        assert!(load_config_from_path(&path).is_err());
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
format: json
exclude_packages: [pip]
another_unknown: value
"#,
        );

        let config = load_config_from_path(&path).unwrap();

        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("exclude_packages"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.format.is_none());
        assert!(config.unknown_fields.is_empty());
        assert!(config.grants().is_empty());
        assert_eq!(config.qualifier_rules().unwrap(), QualifierRules::default());
    }
}
