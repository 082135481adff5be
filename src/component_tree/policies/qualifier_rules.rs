use crate::component_tree::domain::qualifier::{self, is_valid_qualifier};
use crate::shared::Result;
use std::collections::HashSet;

/// Qualifiers eligible for best values when nothing else is configured
pub const DEFAULT_BEST_VALUE_QUALIFIERS: [&str; 2] = [qualifier::FILE, qualifier::UNIT_TEST_FILE];

/// A qualifier and the qualifiers its children may have
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceType {
    pub qualifier: String,
    pub children: Vec<String>,
}

impl ResourceType {
    pub fn new(qualifier: &str, children: &[&str]) -> Self {
        Self {
            qualifier: qualifier.to_string(),
            children: children.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// QualifierRules - classification of component kinds
///
/// Decides which qualifiers are leaves below a given qualifier and
/// which qualifiers are file-level artifacts eligible for best values.
/// Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct QualifierRules {
    resource_types: Vec<ResourceType>,
    best_value_qualifiers: HashSet<String>,
}

impl QualifierRules {
    /// Creates rules from a resource type tree and the best-value qualifiers
    ///
    /// # Errors
    /// - A qualifier is empty or badly formed
    /// - A qualifier is declared twice
    /// - The resource type tree contains a cycle
    pub fn new(
        resource_types: Vec<ResourceType>,
        best_value_qualifiers: Vec<String>,
    ) -> Result<Self> {
        let mut declared = HashSet::new();
        for resource_type in &resource_types {
            for q in std::iter::once(&resource_type.qualifier).chain(&resource_type.children) {
                if !is_valid_qualifier(q) {
                    anyhow::bail!(
                        "Invalid qualifier '{}': expected 1-10 uppercase letters, digits or '_'",
                        q
                    );
                }
            }
            if !declared.insert(resource_type.qualifier.clone()) {
                anyhow::bail!(
                    "Resource type '{}' is declared more than once",
                    resource_type.qualifier
                );
            }
        }
        for q in &best_value_qualifiers {
            if !is_valid_qualifier(q) {
                anyhow::bail!("Invalid best value qualifier '{}'", q);
            }
        }

        let rules = Self {
            resource_types,
            best_value_qualifiers: best_value_qualifiers.into_iter().collect(),
        };
        rules.check_acyclic()?;
        Ok(rules)
    }

    /// Qualifiers allowed for direct children of `qualifier`
    pub fn children_qualifiers(&self, qualifier: &str) -> &[String] {
        self.resource_types
            .iter()
            .find(|rt| rt.qualifier == qualifier)
            .map(|rt| rt.children.as_slice())
            .unwrap_or(&[])
    }

    /// Leaf qualifiers reachable below `qualifier`
    ///
    /// A qualifier without children is its own leaf. Order follows the
    /// declaration order of children; duplicates keep their first position.
    pub fn leaves_qualifiers(&self, qualifier: &str) -> Vec<String> {
        let mut leaves = Vec::new();
        self.collect_leaves(qualifier, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, qualifier: &str, leaves: &mut Vec<String>) {
        let children = self.children_qualifiers(qualifier);
        if children.is_empty() {
            if !leaves.iter().any(|l| l == qualifier) {
                leaves.push(qualifier.to_string());
            }
            return;
        }
        for child in children {
            self.collect_leaves(child, leaves);
        }
    }

    /// Production and test files are the components eligible for best values
    pub fn is_eligible_for_best_value(&self, qualifier: &str) -> bool {
        self.best_value_qualifiers.contains(qualifier)
    }

    pub fn resource_types(&self) -> &[ResourceType] {
        &self.resource_types
    }

    fn check_acyclic(&self) -> Result<()> {
        fn visit<'a>(
            rules: &'a QualifierRules,
            qualifier: &'a str,
            path: &mut Vec<&'a str>,
            done: &mut HashSet<&'a str>,
        ) -> Result<()> {
            if done.contains(qualifier) {
                return Ok(());
            }
            if path.contains(&qualifier) {
                path.push(qualifier);
                anyhow::bail!("Resource type tree contains a cycle: {}", path.join(" -> "));
            }
            path.push(qualifier);
            for child in rules.children_qualifiers(qualifier) {
                visit(rules, child, path, done)?;
            }
            path.pop();
            done.insert(qualifier);
            Ok(())
        }

        let mut done = HashSet::new();
        for resource_type in &self.resource_types {
            visit(self, &resource_type.qualifier, &mut Vec::new(), &mut done)?;
        }
        Ok(())
    }
}

impl Default for QualifierRules {
    fn default() -> Self {
        Self {
            resource_types: vec![
                ResourceType::new(qualifier::VIEW, &[qualifier::SUBVIEW, qualifier::PROJECT]),
                ResourceType::new(qualifier::SUBVIEW, &[qualifier::PROJECT]),
                ResourceType::new(
                    qualifier::PROJECT,
                    &[qualifier::MODULE, qualifier::DIRECTORY],
                ),
                ResourceType::new(qualifier::MODULE, &[qualifier::DIRECTORY]),
                ResourceType::new(
                    qualifier::DIRECTORY,
                    &[qualifier::FILE, qualifier::UNIT_TEST_FILE],
                ),
            ],
            best_value_qualifiers: DEFAULT_BEST_VALUE_QUALIFIERS
                .iter()
                .map(|q| q.to_string())
                .collect(),
        }
    }
}
