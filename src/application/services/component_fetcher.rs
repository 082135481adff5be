use crate::component_tree::domain::{ComponentTreeQuery, ComponentWithSnapshotId, Strategy};
use crate::ports::outbound::ComponentRepository;
use crate::shared::Result;

/// Components returned by a traversal plus the total matching count
#[derive(Debug, Clone)]
pub struct ComponentsAndTotal {
    pub components: Vec<ComponentWithSnapshotId>,
    pub total: usize,
}

/// ComponentFetcher dispatching a traversal on the requested strategy
pub struct ComponentFetcher;

impl ComponentFetcher {
    /// Runs the traversal and the matching count
    ///
    /// Leaves and all both search every descendant; leaves differ only
    /// through the qualifier filter of the query.
    pub fn fetch<R: ComponentRepository + ?Sized>(
        repository: &R,
        query: &ComponentTreeQuery,
        strategy: Strategy,
    ) -> Result<ComponentsAndTotal> {
        let (components, total) = match strategy {
            Strategy::Children => (
                repository.select_direct_children(query)?,
                repository.count_direct_children(query)?,
            ),
            Strategy::Leaves | Strategy::All => (
                repository.select_all_children(query)?,
                repository.count_all_children(query)?,
            ),
        };

        Ok(ComponentsAndTotal { components, total })
    }
}
