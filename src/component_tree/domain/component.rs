use crate::shared::Result;

/// Component entity - a node of the project hierarchy
///
/// Components are created by the store and are immutable for the
/// duration of a single load.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: i64,
    uuid: String,
    key: String,
    name: String,
    long_name: Option<String>,
    path: Option<String>,
    qualifier: String,
    project_uuid: Option<String>,
    copy_component_id: Option<i64>,
}

impl Component {
    pub fn new(
        id: i64,
        uuid: String,
        key: String,
        name: String,
        qualifier: String,
    ) -> Result<Self> {
        if uuid.trim().is_empty() {
            anyhow::bail!("Component uuid cannot be empty (component id {})", id);
        }
        if key.trim().is_empty() {
            anyhow::bail!("Component key cannot be empty (component uuid {})", uuid);
        }
        if qualifier.trim().is_empty() {
            anyhow::bail!(
                "Component qualifier cannot be empty (component key {})",
                key
            );
        }

        Ok(Self {
            id,
            uuid,
            key,
            name,
            long_name: None,
            path: None,
            qualifier,
            project_uuid: None,
            copy_component_id: None,
        })
    }

    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_project_uuid(mut self, project_uuid: impl Into<String>) -> Self {
        self.project_uuid = Some(project_uuid.into());
        self
    }

    /// Marks this component as a copy of another component (views, sub-views)
    pub fn with_copy_component_id(mut self, copy_component_id: i64) -> Self {
        self.copy_component_id = Some(copy_component_id);
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    pub fn project_uuid(&self) -> Option<&str> {
        self.project_uuid.as_deref()
    }

    pub fn copy_component_id(&self) -> Option<i64> {
        self.copy_component_id
    }

    /// Project the component belongs to; a root component is its own project
    pub fn effective_project_uuid(&self) -> &str {
        self.project_uuid.as_deref().unwrap_or(&self.uuid)
    }
}

/// A component joined with the id of its last snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentWithSnapshotId {
    component: Component,
    snapshot_id: i64,
}

impl ComponentWithSnapshotId {
    pub fn new(component: Component, snapshot_id: i64) -> Self {
        Self {
            component,
            snapshot_id,
        }
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn snapshot_id(&self) -> i64 {
        self.snapshot_id
    }

    pub fn uuid(&self) -> &str {
        self.component.uuid()
    }

    pub fn name(&self) -> &str {
        self.component.name()
    }

    pub fn qualifier(&self) -> &str {
        self.component.qualifier()
    }

    pub fn copy_component_id(&self) -> Option<i64> {
        self.component.copy_component_id()
    }
}
