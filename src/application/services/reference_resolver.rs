use crate::component_tree::domain::ComponentWithSnapshotId;
use crate::ports::outbound::ComponentRepository;
use crate::shared::Result;
use std::collections::HashMap;

/// ReferenceResolver mapping copy components to the uuid of what they copy
pub struct ReferenceResolver;

impl ReferenceResolver {
    /// Returns referenced component id to uuid for the given page
    ///
    /// The store is not queried when no component is a copy. Referenced
    /// components the store cannot find are left out of the map.
    pub fn resolve<R: ComponentRepository + ?Sized>(
        repository: &R,
        components: &[ComponentWithSnapshotId],
    ) -> Result<HashMap<i64, String>> {
        let mut reference_ids: Vec<i64> = components
            .iter()
            .filter_map(ComponentWithSnapshotId::copy_component_id)
            .collect();
        reference_ids.sort_unstable();
        reference_ids.dedup();
        if reference_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(repository
            .select_by_ids(&reference_ids)?
            .into_iter()
            .map(|c| (c.id(), c.uuid().to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_tree::domain::{Component, ComponentTreeQuery};
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeComponents {
        components: Vec<Component>,
        select_by_ids_calls: RefCell<Vec<Vec<i64>>>,
    }

    impl ComponentRepository for FakeComponents {
        fn select_by_uuid(&self, _uuid: &str) -> Result<Option<Component>> {
            Ok(None)
        }

        fn select_by_key(&self, _key: &str) -> Result<Option<Component>> {
            Ok(None)
        }

        fn select_by_ids(&self, ids: &[i64]) -> Result<Vec<Component>> {
            self.select_by_ids_calls.borrow_mut().push(ids.to_vec());
            Ok(self
                .components
                .iter()
                .filter(|c| ids.contains(&c.id()))
                .cloned()
                .collect())
        }

        fn select_direct_children(
            &self,
            _query: &ComponentTreeQuery,
        ) -> Result<Vec<ComponentWithSnapshotId>> {
            Ok(Vec::new())
        }

        fn count_direct_children(&self, _query: &ComponentTreeQuery) -> Result<usize> {
            Ok(0)
        }

        fn select_all_children(
            &self,
            _query: &ComponentTreeQuery,
        ) -> Result<Vec<ComponentWithSnapshotId>> {
            Ok(Vec::new())
        }

        fn count_all_children(&self, _query: &ComponentTreeQuery) -> Result<usize> {
            Ok(0)
        }
    }

    fn component(id: i64) -> Component {
        Component::new(
            id,
            format!("uuid-{}", id),
            format!("key-{}", id),
            format!("Component {}", id),
            "TRK".into(),
        )
        .unwrap()
    }

    fn copy_of(id: i64, original_id: i64) -> ComponentWithSnapshotId {
        ComponentWithSnapshotId::new(component(id).with_copy_component_id(original_id), id * 10)
    }

    #[test]
    fn test_distinct_reference_ids_in_one_lookup() {
        let repository = FakeComponents {
            components: vec![component(1), component(2)],
            ..Default::default()
        };
        let page = vec![copy_of(11, 2), copy_of(12, 1), copy_of(13, 2)];

        let references = ReferenceResolver::resolve(&repository, &page).unwrap();

        assert_eq!(*repository.select_by_ids_calls.borrow(), vec![vec![1, 2]]);
        assert_eq!(references.len(), 2);
        assert_eq!(references.get(&1).map(String::as_str), Some("uuid-1"));
        assert_eq!(references.get(&2).map(String::as_str), Some("uuid-2"));
    }

    #[test]
    fn test_no_copies_skips_lookup() {
        let repository = FakeComponents::default();
        let page = vec![ComponentWithSnapshotId::new(component(5), 50)];

        let references = ReferenceResolver::resolve(&repository, &page).unwrap();

        assert!(references.is_empty());
        assert!(repository.select_by_ids_calls.borrow().is_empty());
    }

    #[test]
    fn test_missing_referenced_component_left_out() {
        let repository = FakeComponents {
            components: vec![component(1)],
            ..Default::default()
        };
        let page = vec![copy_of(11, 1), copy_of(12, 99)];

        let references = ReferenceResolver::resolve(&repository, &page).unwrap();

        assert_eq!(references.len(), 1);
        assert!(!references.contains_key(&99));
    }
}
