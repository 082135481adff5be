use crate::component_tree::domain::{Component, ComponentTreeQuery, ComponentWithSnapshotId};
use crate::shared::Result;

/// ComponentRepository port for hierarchy lookups
///
/// Traversal methods apply the query's qualifier and name/key filters,
/// its sort fields and its paging. Count methods ignore paging.
pub trait ComponentRepository {
    /// Selects a component by its stable uuid
    fn select_by_uuid(&self, uuid: &str) -> Result<Option<Component>>;

    /// Selects a component by its key
    fn select_by_key(&self, key: &str) -> Result<Option<Component>>;

    /// Selects components by numeric ids; unknown ids are skipped
    fn select_by_ids(&self, ids: &[i64]) -> Result<Vec<Component>>;

    /// Direct children of the query's base snapshot component
    fn select_direct_children(
        &self,
        query: &ComponentTreeQuery,
    ) -> Result<Vec<ComponentWithSnapshotId>>;

    /// Number of direct children matching the query
    fn count_direct_children(&self, query: &ComponentTreeQuery) -> Result<usize>;

    /// All descendants of the query's base snapshot component
    fn select_all_children(
        &self,
        query: &ComponentTreeQuery,
    ) -> Result<Vec<ComponentWithSnapshotId>>;

    /// Number of descendants matching the query
    fn count_all_children(&self, query: &ComponentTreeQuery) -> Result<usize>;
}
