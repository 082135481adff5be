use crate::application::dto::ComponentTreeRequest;
use crate::component_tree::domain::{ComponentTreeQuery, Snapshot, SortField, Strategy};
use crate::component_tree::policies::QualifierRules;
use crate::shared::Result;

/// QueryBuilder translating a request into a store traversal query
pub struct QueryBuilder;

impl QueryBuilder {
    /// Builds the traversal query for a request below `base_snapshot`
    ///
    /// The metric sort token is stripped from the sort fields (the store
    /// cannot sort on measures), falling back to a sort on name.
    pub fn build(
        request: &ComponentTreeRequest,
        base_snapshot: &Snapshot,
        rules: &QualifierRules,
    ) -> Result<ComponentTreeQuery> {
        let mut builder = ComponentTreeQuery::builder(base_snapshot.clone())
            .sort_fields(Self::store_sort_fields(&request.sort))
            .asc(request.asc);

        if let Some(query) = &request.query {
            builder = builder.name_or_key_query(query.clone());
        }
        let qualifiers = Self::children_qualifiers(request, base_snapshot.qualifier(), rules);
        if let Some(qualifiers) = qualifiers {
            builder = builder.qualifiers(qualifiers);
        }

        let (page, page_size) = Self::store_paging(request);
        builder.page(page).page_size(page_size).build()
    }

    /// Paging handed to the store
    ///
    /// Sorting on a metric needs every candidate (best values included)
    /// before ranking, so the store must return the whole matching set:
    /// page 1 with an unbounded page size. Pagination then happens in memory.
    pub fn store_paging(request: &ComponentTreeRequest) -> (usize, usize) {
        if request.is_metric_sort() {
            (1, usize::MAX)
        } else {
            (request.page, request.page_size)
        }
    }

    /// Request sort fields without the metric token, defaulting to name
    pub fn store_sort_fields(sort: &[SortField]) -> Vec<SortField> {
        let fields: Vec<SortField> = sort
            .iter()
            .copied()
            .filter(|field| *field != SortField::Metric)
            .collect();
        if fields.is_empty() {
            vec![SortField::Name]
        } else {
            fields
        }
    }

    /// Effective qualifier filter
    ///
    /// For the leaves strategy this is the leaf qualifiers of the base
    /// qualifier, intersected with the requested qualifiers if any.
    /// Other strategies pass the requested qualifiers through.
    pub fn children_qualifiers(
        request: &ComponentTreeRequest,
        base_qualifier: &str,
        rules: &QualifierRules,
    ) -> Option<Vec<String>> {
        let leaves = match request.strategy {
            Strategy::Leaves => Some(rules.leaves_qualifiers(base_qualifier)),
            Strategy::Children | Strategy::All => None,
        };

        match (leaves, &request.qualifiers) {
            (leaves, None) => leaves,
            (None, Some(requested)) => Some(requested.clone()),
            (Some(mut leaves), Some(requested)) => {
                leaves.retain(|q| requested.contains(q));
                Some(leaves)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_tree::policies::ResourceType;

    fn request() -> crate::application::dto::ComponentTreeRequestBuilder {
        ComponentTreeRequest::builder()
            .base_component_key("project")
            .metric_keys(["ncloc"])
    }

    fn project_snapshot() -> Snapshot {
        Snapshot::new(10, 1, "TRK")
    }

    fn query_for(request: &ComponentTreeRequest) -> ComponentTreeQuery {
        QueryBuilder::build(request, &project_snapshot(), &QualifierRules::default()).unwrap()
    }

    fn project_qualifiers(request: &ComponentTreeRequest) -> Option<Vec<String>> {
        QueryBuilder::children_qualifiers(request, "TRK", &QualifierRules::default())
    }

    #[test]
    fn test_plain_request_keeps_paging_and_sort() {
        let request = request()
            .sort(vec![SortField::Qualifier, SortField::Name])
            .asc(false)
            .page(3)
            .page_size(20)
            .build()
            .unwrap();

        let query = query_for(&request);

        assert_eq!(query.page(), 3);
        assert_eq!(query.page_size(), 20);
        assert_eq!(
            query.sort_fields(),
            &[SortField::Qualifier, SortField::Name]
        );
        assert!(!query.asc());
        assert_eq!(query.qualifiers(), None);
    }

    #[test]
    fn test_metric_sort_loads_everything() {
        let request = request()
            .sort(vec![SortField::Metric])
            .metric_sort("ncloc")
            .page(4)
            .page_size(10)
            .build()
            .unwrap();

        let query = query_for(&request);

        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), usize::MAX);
        assert_eq!(query.offset(), 0);
        assert_eq!(query.sort_fields(), &[SortField::Name]);
    }

    #[test]
    fn test_metric_token_removed_from_mixed_sort() {
        assert_eq!(
            QueryBuilder::store_sort_fields(&[SortField::Path, SortField::Metric]),
            vec![SortField::Path]
        );
    }

    #[test]
    fn test_search_text_forwarded() {
        let request = request().query("Fil").build().unwrap();
        let query = query_for(&request);
        assert_eq!(query.name_or_key_query(), Some("Fil"));
    }

    #[test]
    fn test_leaves_without_requested_qualifiers() {
        let request = request().strategy(Strategy::Leaves).build().unwrap();
        let qualifiers = project_qualifiers(&request);
        assert_eq!(qualifiers, Some(vec!["FIL".to_string(), "UTS".to_string()]));
    }

    #[test]
    fn test_leaves_intersected_with_requested_qualifiers() {
        let request = request()
            .strategy(Strategy::Leaves)
            .qualifiers(["UTS", "DIR"])
            .build()
            .unwrap();
        let qualifiers = project_qualifiers(&request);
        assert_eq!(qualifiers, Some(vec!["UTS".to_string()]));
    }

    #[test]
    fn test_leaves_with_disjoint_qualifiers_is_empty_filter() {
        let request = request()
            .strategy(Strategy::Leaves)
            .qualifiers(["DIR"])
            .build()
            .unwrap();
        let qualifiers = project_qualifiers(&request);
        assert_eq!(qualifiers, Some(vec![]));
    }

    #[test]
    fn test_children_passes_requested_qualifiers() {
        let request = request()
            .strategy(Strategy::Children)
            .qualifiers(["DIR"])
            .build()
            .unwrap();
        let qualifiers = project_qualifiers(&request);
        assert_eq!(qualifiers, Some(vec!["DIR".to_string()]));
    }

    #[test]
    fn test_all_without_qualifiers_has_no_filter() {
        let request = request().build().unwrap();
        assert_eq!(project_qualifiers(&request), None);
    }

    #[test]
    fn test_leaves_follow_custom_rules() {
        let rules = QualifierRules::new(
            vec![
                ResourceType::new("APP", &["LIB"]),
                ResourceType::new("LIB", &["SRC"]),
            ],
            vec![],
        )
        .unwrap();
        let request = request().strategy(Strategy::Leaves).build().unwrap();
        assert_eq!(
            QueryBuilder::children_qualifiers(&request, "APP", &rules),
            Some(vec!["SRC".to_string()])
        );
    }
}
