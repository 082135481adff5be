use super::measure::MAX_PERIOD_INDEX;
use crate::shared::Result;
use chrono::{DateTime, Utc};

/// Definition of one comparison period slot on a snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodSlot {
    mode: Option<String>,
    parameter: Option<String>,
    date: Option<DateTime<Utc>>,
}

impl PeriodSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }
}

/// Snapshot - point-in-time analysis record of a component
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    id: i64,
    component_id: i64,
    qualifier: String,
    period_slots: [PeriodSlot; MAX_PERIOD_INDEX],
}

impl Snapshot {
    pub fn new(id: i64, component_id: i64, qualifier: impl Into<String>) -> Self {
        Self {
            id,
            component_id,
            qualifier: qualifier.into(),
            period_slots: Default::default(),
        }
    }

    /// Fills period slot `index` (1..=5)
    pub fn with_period(mut self, index: usize, slot: PeriodSlot) -> Result<Self> {
        if !(1..=MAX_PERIOD_INDEX).contains(&index) {
            anyhow::bail!(
                "Snapshot {} has an invalid period index {} (expected 1..={})",
                self.id,
                index,
                MAX_PERIOD_INDEX
            );
        }
        self.period_slots[index - 1] = slot;
        Ok(self)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn component_id(&self) -> i64 {
        self.component_id
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    fn slot(&self, index: usize) -> Option<&PeriodSlot> {
        index
            .checked_sub(1)
            .and_then(|position| self.period_slots.get(position))
    }

    pub fn period_mode(&self, index: usize) -> Option<&str> {
        self.slot(index).and_then(PeriodSlot::mode)
    }

    pub fn period_parameter(&self, index: usize) -> Option<&str> {
        self.slot(index).and_then(PeriodSlot::parameter)
    }

    pub fn period_date(&self, index: usize) -> Option<DateTime<Utc>> {
        self.slot(index).and_then(PeriodSlot::date)
    }
}

/// Period - a materialized comparison baseline, as presented to callers
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub index: usize,
    pub mode: Option<String>,
    pub parameter: Option<String>,
    /// Formatted date-time, e.g. "2016-01-11T10:49:50+0000"
    pub date: Option<String>,
}
