use crate::application::dto::{ComponentTreeData, ComponentTreeRequest};
use crate::application::services::{
    ComponentFetcher, ComponentFinder, MeasureTableBuilder, MetricResolver, PermissionGate,
    QueryBuilder, ReferenceResolver,
};
use crate::component_tree::domain::{ComponentWithSnapshotId, MeasureTable, Metric, Snapshot};
use crate::component_tree::policies::QualifierRules;
use crate::component_tree::services::{ComponentSorter, Paginator, Paging, PeriodExtractor};
use crate::ports::inbound::ComponentTreePort;
use crate::ports::outbound::{ProgressReporter, SnapshotRepository, TreeStore, UserSession};
use crate::shared::Result;

/// Number of pipeline stages reported through `report_progress`
const STAGE_COUNT: usize = 6;

/// LoadComponentTreeUseCase - Loads a page of a component tree with its measures
///
/// This use case orchestrates the loading workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `S` - TreeStore implementation
/// * `U` - UserSession implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadComponentTreeUseCase<S, U, PR> {
    store: S,
    user_session: U,
    progress_reporter: PR,
    qualifier_rules: QualifierRules,
}

impl<S, U, PR> LoadComponentTreeUseCase<S, U, PR>
where
    S: TreeStore,
    U: UserSession,
    PR: ProgressReporter,
{
    /// Creates a new LoadComponentTreeUseCase with injected dependencies
    pub fn new(
        store: S,
        user_session: U,
        progress_reporter: PR,
        qualifier_rules: QualifierRules,
    ) -> Self {
        Self {
            store,
            user_session,
            progress_reporter,
            qualifier_rules,
        }
    }

    /// Executes the component tree loading use case
    ///
    /// A single store session is held for the whole call and released
    /// before returning, whatever the outcome.
    ///
    /// # Returns
    /// ComponentTreeData with the requested page, or only the base
    /// component when it was never analyzed
    pub fn execute(&self, request: ComponentTreeRequest) -> Result<ComponentTreeData> {
        let session = self.store.open_session()?;
        self.load(&session, &request)
    }

    fn load(
        &self,
        session: &S::Session,
        request: &ComponentTreeRequest,
    ) -> Result<ComponentTreeData> {
        // Step 1: Resolve and authorize the base component
        self.stage(1, "Resolving base component");
        let base_component = ComponentFinder::get_by_uuid_or_key(
            session,
            request.base_component_id.as_deref(),
            request.base_component_key.as_deref(),
        )?;
        PermissionGate::check(&self.user_session, &base_component)?;

        // Step 2: Latest analysis of the base component
        self.stage(2, "Loading last snapshot");
        let base_id = base_component.id();
        let Some(base_snapshot) = session.select_last_snapshot_by_component_id(base_id)? else {
            self.progress_reporter.report(&format!(
                "Component '{}' has no analysis, returning it alone",
                base_component.key()
            ));
            return Ok(ComponentTreeData::without_snapshot(base_component));
        };

        // Step 3: Traverse the tree
        self.stage(3, "Searching components");
        let query = QueryBuilder::build(request, &base_snapshot, &self.qualifier_rules)?;
        let fetched = ComponentFetcher::fetch(session, &query, request.strategy)?;
        self.progress_reporter.report(&format!(
            "Found {} component(s) matching the {} strategy",
            fetched.total, request.strategy
        ));

        // Step 4: Metrics, periods and measures
        self.stage(4, "Loading metrics and measures");
        let metrics = MetricResolver::resolve(session, &request.metric_keys)?;
        let periods = PeriodExtractor::extract(&base_snapshot);
        let measures = MeasureTableBuilder::build(
            session,
            &fetched.components,
            &metrics,
            &periods,
            &self.qualifier_rules,
        )?;

        // Step 5: Order and slice in memory when sorting on a metric
        self.stage(5, "Sorting and paginating");
        let paging = Paging::new(request.page, request.page_size, fetched.total);
        let components = self.order_page(request, fetched.components, &metrics, &measures, &paging);

        // Step 6: Resolve copied components
        self.stage(6, "Resolving reference components");
        let reference_component_uuids_by_id = ReferenceResolver::resolve(session, &components)?;

        self.report_loaded(&base_snapshot, components.len(), fetched.total);

        Ok(ComponentTreeData {
            base_component,
            components,
            component_count: Some(fetched.total),
            paging: Some(paging),
            measures,
            metrics,
            periods,
            reference_component_uuids_by_id,
        })
    }

    /// Sorts and paginates the components when the store could not
    ///
    /// Without a metric sort the store already returned the requested
    /// page in the requested order.
    fn order_page(
        &self,
        request: &ComponentTreeRequest,
        components: Vec<ComponentWithSnapshotId>,
        metrics: &[Metric],
        measures: &MeasureTable,
        paging: &Paging,
    ) -> Vec<ComponentWithSnapshotId> {
        if !request.is_metric_sort() {
            return components;
        }

        let sort_metric = request
            .metric_sort
            .as_deref()
            .and_then(|key| metrics.iter().find(|m| m.key() == key));
        let sorted = ComponentSorter::sort(
            components,
            &request.sort,
            request.asc,
            sort_metric,
            measures,
        );
        Paginator::paginate(sorted, paging)
    }

    fn stage(&self, current: usize, message: &str) {
        self.progress_reporter
            .report_progress(current, STAGE_COUNT, Some(message));
    }

    fn report_loaded(&self, base_snapshot: &Snapshot, on_page: usize, total: usize) {
        self.progress_reporter.report_completion(&format!(
            "Loaded {} of {} component(s) from snapshot {}",
            on_page,
            total,
            base_snapshot.id()
        ));
    }
}

impl<S, U, PR> ComponentTreePort for LoadComponentTreeUseCase<S, U, PR>
where
    S: TreeStore,
    U: UserSession,
    PR: ProgressReporter,
{
    fn load_component_tree(&self, request: ComponentTreeRequest) -> Result<ComponentTreeData> {
        self.execute(request)
    }
}
