use super::snapshot::Snapshot;
use crate::shared::error::TreeError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Traversal mode over the component hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Direct children of the base component
    Children,
    /// Leaf-level descendants only
    Leaves,
    /// All descendants
    All,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Children => "children",
            Strategy::Leaves => "leaves",
            Strategy::All => "all",
        }
    }
}

impl FromStr for Strategy {
    type Err = TreeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "children" => Ok(Strategy::Children),
            "leaves" => Ok(Strategy::Leaves),
            "all" => Ok(Strategy::All),
            _ => Err(TreeError::illegal_state(format!(
                "Unknown component tree strategy: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field a component list can be sorted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Path,
    Qualifier,
    /// Sort by the value of a metric; resolved in memory, never by the store
    Metric,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Path => "path",
            SortField::Qualifier => "qualifier",
            SortField::Metric => "metric",
        }
    }
}

impl FromStr for SortField {
    type Err = TreeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "path" => Ok(SortField::Path),
            "qualifier" => Ok(SortField::Qualifier),
            "metric" => Ok(SortField::Metric),
            _ => Err(TreeError::validation(format!(
                "Unknown sort field '{}'. Possible values: name, path, qualifier, metric",
                s
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Traversal parameters handed to the store
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTreeQuery {
    base_snapshot: Snapshot,
    qualifiers: Option<Vec<String>>,
    name_or_key_query: Option<String>,
    sort_fields: Vec<SortField>,
    asc: bool,
    page: usize,
    page_size: usize,
}

impl ComponentTreeQuery {
    pub fn builder(base_snapshot: Snapshot) -> ComponentTreeQueryBuilder {
        ComponentTreeQueryBuilder::new(base_snapshot)
    }

    pub fn base_snapshot(&self) -> &Snapshot {
        &self.base_snapshot
    }

    pub fn qualifiers(&self) -> Option<&[String]> {
        self.qualifiers.as_deref()
    }

    pub fn name_or_key_query(&self) -> Option<&str> {
        self.name_or_key_query.as_deref()
    }

    pub fn sort_fields(&self) -> &[SortField] {
        &self.sort_fields
    }

    pub fn asc(&self) -> bool {
        self.asc
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of rows to skip; saturates instead of overflowing
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Builder for ComponentTreeQuery
#[derive(Debug, Clone)]
pub struct ComponentTreeQueryBuilder {
    base_snapshot: Snapshot,
    qualifiers: Option<Vec<String>>,
    name_or_key_query: Option<String>,
    sort_fields: Vec<SortField>,
    asc: bool,
    page: usize,
    page_size: usize,
}

impl ComponentTreeQueryBuilder {
    fn new(base_snapshot: Snapshot) -> Self {
        Self {
            base_snapshot,
            qualifiers: None,
            name_or_key_query: None,
            sort_fields: vec![SortField::Name],
            asc: true,
            page: 1,
            page_size: 100,
        }
    }

    pub fn qualifiers(mut self, qualifiers: Vec<String>) -> Self {
        self.qualifiers = Some(qualifiers);
        self
    }

    pub fn name_or_key_query(mut self, query: impl Into<String>) -> Self {
        self.name_or_key_query = Some(query.into());
        self
    }

    pub fn sort_fields(mut self, sort_fields: Vec<SortField>) -> Self {
        self.sort_fields = sort_fields;
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

    pub fn build(self) -> Result<ComponentTreeQuery> {
        if self.sort_fields.is_empty() {
            return Err(TreeError::validation("Query must have at least one sort field").into());
        }
        if self.sort_fields.contains(&SortField::Metric) {
            return Err(TreeError::illegal_state(
                "Metric sort cannot be delegated to the component store",
            )
            .into());
        }
        if self.page == 0 {
            return Err(TreeError::validation("Query page must be >= 1").into());
        }
        if self.page_size == 0 {
            return Err(TreeError::validation("Query page size must be >= 1").into());
        }

        Ok(ComponentTreeQuery {
            base_snapshot: self.base_snapshot,
            qualifiers: self.qualifiers,
            name_or_key_query: self.name_or_key_query,
            sort_fields: self.sort_fields,
            asc: self.asc,
            page: self.page,
            page_size: self.page_size,
        })
    }
}
