use crate::application::read_models::{
    ComponentTreeReadModel, ComponentView, MetricView, PeriodView,
};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Placeholder for an empty table cell
const EMPTY_CELL: &str = "-";

/// MarkdownFormatter adapter rendering the tree as Markdown tables
///
/// One row per component and one column per requested metric.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn cell(text: Option<&str>) -> String {
        text.map_or_else(|| EMPTY_CELL.to_string(), Self::escape_markdown_table_cell)
    }

    fn render_header(out: &mut String, base: &ComponentView) -> std::fmt::Result {
        writeln!(
            out,
            "# Component tree: {} (`{}`)",
            Self::escape_markdown_table_cell(&base.name),
            base.key
        )?;
        writeln!(out)?;
        writeln!(out, "- Qualifier: {}", base.qualifier)?;
        if let Some(path) = &base.path {
            writeln!(out, "- Path: {}", path)?;
        }
        writeln!(out)
    }

    fn render_components(out: &mut String, model: &ComponentTreeReadModel) -> std::fmt::Result {
        writeln!(out, "## Components")?;
        writeln!(out)?;

        if let Some(paging) = &model.paging {
            let first = (paging.page_index - 1).saturating_mul(paging.page_size);
            if model.components.is_empty() {
                writeln!(
                    out,
                    "No component on page {} ({} in total).",
                    paging.page_index, paging.total
                )?;
                return writeln!(out);
            }
            writeln!(
                out,
                "Showing {}-{} of {} (page {}, page size {}).",
                first + 1,
                first + model.components.len(),
                paging.total,
                paging.page_index,
                paging.page_size
            )?;
            writeln!(out)?;
        }

        Self::render_table_header(out, &model.metrics)?;
        for component in &model.components {
            Self::render_row(out, component, &model.metrics)?;
        }
        writeln!(out)
    }

    fn render_table_header(out: &mut String, metrics: &[MetricView]) -> std::fmt::Result {
        write!(out, "| Component | Qualifier | Path |")?;
        for metric in metrics {
            write!(out, " {} |", Self::escape_markdown_table_cell(&metric.name))?;
        }
        writeln!(out)?;
        write!(out, "|-----------|-----------|------|")?;
        for _ in metrics {
            write!(out, "------|")?;
        }
        writeln!(out)
    }

    fn render_row(
        out: &mut String,
        component: &ComponentView,
        metrics: &[MetricView],
    ) -> std::fmt::Result {
        write!(
            out,
            "| {} | {} | {} |",
            Self::escape_markdown_table_cell(&component.name),
            component.qualifier,
            Self::cell(component.path.as_deref())
        )?;
        for metric in metrics {
            let value = component
                .measures
                .iter()
                .find(|m| m.metric == metric.key)
                .and_then(|m| m.value.as_deref());
            write!(out, " {} |", Self::cell(value))?;
        }
        writeln!(out)
    }

    fn render_periods(out: &mut String, periods: &[PeriodView]) -> std::fmt::Result {
        if periods.is_empty() {
            return Ok(());
        }

        writeln!(out, "## Periods")?;
        writeln!(out)?;
        writeln!(out, "| Index | Mode | Parameter | Date |")?;
        writeln!(out, "|-------|------|-----------|------|")?;
        for period in periods {
            writeln!(
                out,
                "| {} | {} | {} | {} |",
                period.index,
                Self::cell(period.mode.as_deref()),
                Self::cell(period.parameter.as_deref()),
                Self::cell(period.date.as_deref())
            )?;
        }
        writeln!(out)
    }

    fn render(model: &ComponentTreeReadModel) -> std::result::Result<String, std::fmt::Error> {
        let mut out = String::new();
        Self::render_header(&mut out, &model.base_component)?;

        if model.paging.is_none() {
            writeln!(out, "_This component has not been analyzed yet._")?;
            return Ok(out);
        }

        Self::render_components(&mut out, model)?;
        Self::render_periods(&mut out, &model.periods)?;
        Ok(out)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for MarkdownFormatter {
    fn format(&self, model: &ComponentTreeReadModel) -> Result<String> {
        Self::render(model).map_err(|e| anyhow::anyhow!("Failed to render Markdown: {}", e))
    }
}
