use crate::component_tree::domain::{SortField, Strategy};
use crate::shared::error::TreeError;
use crate::shared::Result;

/// Largest page size a caller may ask for
pub const MAX_PAGE_SIZE: usize = 500;

/// Page size used when the caller does not choose one
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Shortest accepted name/key search text
pub const MIN_QUERY_LENGTH: usize = 3;

/// ComponentTreeRequest - request DTO for loading a component tree
///
/// Exactly one of `base_component_id` (uuid) and `base_component_key`
/// must name the base component; this is checked when the base
/// component is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTreeRequest {
    pub base_component_id: Option<String>,
    pub base_component_key: Option<String>,
    pub strategy: Strategy,
    /// Requested metric keys, in caller order
    pub metric_keys: Vec<String>,
    /// Qualifier filter; None keeps every qualifier
    pub qualifiers: Option<Vec<String>>,
    /// Name or key search text
    pub query: Option<String>,
    pub sort: Vec<SortField>,
    /// Metric key used by `SortField::Metric`
    pub metric_sort: Option<String>,
    pub asc: bool,
    /// 1-based page index
    pub page: usize,
    pub page_size: usize,
}

impl ComponentTreeRequest {
    pub fn builder() -> ComponentTreeRequestBuilder {
        ComponentTreeRequestBuilder::default()
    }

    /// Whether the caller asked to sort on a metric value
    pub fn is_metric_sort(&self) -> bool {
        self.sort.contains(&SortField::Metric)
    }
}

/// Builder for ComponentTreeRequest with validation
#[derive(Debug, Clone)]
pub struct ComponentTreeRequestBuilder {
    base_component_id: Option<String>,
    base_component_key: Option<String>,
    strategy: Strategy,
    metric_keys: Vec<String>,
    qualifiers: Option<Vec<String>>,
    query: Option<String>,
    sort: Vec<SortField>,
    metric_sort: Option<String>,
    asc: bool,
    page: usize,
    page_size: usize,
}

impl Default for ComponentTreeRequestBuilder {
    fn default() -> Self {
        Self {
            base_component_id: None,
            base_component_key: None,
            strategy: Strategy::All,
            metric_keys: Vec::new(),
            qualifiers: None,
            query: None,
            sort: vec![SortField::Name],
            metric_sort: None,
            asc: true,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ComponentTreeRequestBuilder {
    pub fn base_component_id(mut self, uuid: impl Into<String>) -> Self {
        self.base_component_id = Some(uuid.into());
        self
    }

    pub fn base_component_key(mut self, key: impl Into<String>) -> Self {
        self.base_component_key = Some(key.into());
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn metric_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metric_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn qualifiers<I, S>(mut self, qualifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.qualifiers = Some(qualifiers.into_iter().map(Into::into).collect());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn sort(mut self, sort: Vec<SortField>) -> Self {
        self.sort = sort;
        self
    }

    pub fn metric_sort(mut self, metric_key: impl Into<String>) -> Self {
        self.metric_sort = Some(metric_key.into());
        self
    }

    pub fn asc(mut self, asc: bool) -> Self {
        self.asc = asc;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Validates and builds the request
    ///
    /// # Errors
    /// Returns a validation error if:
    /// - No metric key is given, or a key is blank
    /// - The page is 0, or the page size is outside 1..=MAX_PAGE_SIZE
    /// - The search text is shorter than MIN_QUERY_LENGTH
    /// - A metric sort is requested without a metric among the metric keys
    pub fn build(self) -> Result<ComponentTreeRequest> {
        if self.metric_keys.is_empty() {
            return Err(TreeError::validation("At least one metric key must be provided").into());
        }
        if self.metric_keys.iter().any(|k| k.trim().is_empty()) {
            return Err(TreeError::validation("Metric keys cannot be blank").into());
        }
        if self.page == 0 {
            return Err(TreeError::validation("Page must be greater than or equal to 1").into());
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(TreeError::validation(format!(
                "Page size must be between 1 and {} (got {})",
                MAX_PAGE_SIZE, self.page_size
            ))
            .into());
        }
        if let Some(query) = &self.query {
            if query.chars().count() < MIN_QUERY_LENGTH {
                return Err(TreeError::validation(format!(
                    "The search query must have at least {} characters",
                    MIN_QUERY_LENGTH
                ))
                .into());
            }
        }
        if self.sort.contains(&SortField::Metric) {
            match &self.metric_sort {
                None => {
                    return Err(TreeError::validation(
                        "To sort by a metric, the metric to sort on must be provided",
                    )
                    .into())
                }
                Some(key) if !self.metric_keys.contains(key) => {
                    return Err(TreeError::validation(format!(
                        "To sort by the metric '{}', it must be one of the requested metric keys",
                        key
                    ))
                    .into())
                }
                Some(_) => {}
            }
        }

        Ok(ComponentTreeRequest {
            base_component_id: self.base_component_id,
            base_component_key: self.base_component_key,
            strategy: self.strategy,
            metric_keys: self.metric_keys,
            qualifiers: self.qualifiers,
            query: self.query,
            sort: self.sort,
            metric_sort: self.metric_sort,
            asc: self.asc,
            page: self.page,
            page_size: self.page_size,
        })
    }
}
