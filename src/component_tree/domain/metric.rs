use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Value type of a metric, deciding how its measures are compared and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricValueType {
    Int,
    Float,
    Percent,
    Bool,
    String,
    Millisec,
    Data,
    Level,
    Distrib,
    Rating,
    WorkDur,
}

impl MetricValueType {
    /// Numeric metrics carry their measurement in the numeric value
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            MetricValueType::Int
                | MetricValueType::Float
                | MetricValueType::Percent
                | MetricValueType::Bool
                | MetricValueType::Millisec
                | MetricValueType::Rating
                | MetricValueType::WorkDur
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricValueType::Int => "INT",
            MetricValueType::Float => "FLOAT",
            MetricValueType::Percent => "PERCENT",
            MetricValueType::Bool => "BOOL",
            MetricValueType::String => "STRING",
            MetricValueType::Millisec => "MILLISEC",
            MetricValueType::Data => "DATA",
            MetricValueType::Level => "LEVEL",
            MetricValueType::Distrib => "DISTRIB",
            MetricValueType::Rating => "RATING",
            MetricValueType::WorkDur => "WORK_DUR",
        }
    }
}

impl FromStr for MetricValueType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "INT" => Ok(MetricValueType::Int),
            "FLOAT" => Ok(MetricValueType::Float),
            "PERCENT" => Ok(MetricValueType::Percent),
            "BOOL" => Ok(MetricValueType::Bool),
            "STRING" => Ok(MetricValueType::String),
            "MILLISEC" => Ok(MetricValueType::Millisec),
            "DATA" => Ok(MetricValueType::Data),
            "LEVEL" => Ok(MetricValueType::Level),
            "DISTRIB" => Ok(MetricValueType::Distrib),
            "RATING" => Ok(MetricValueType::Rating),
            "WORK_DUR" => Ok(MetricValueType::WorkDur),
            _ => anyhow::bail!("Unknown metric value type: {}", s),
        }
    }
}

impl fmt::Display for MetricValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metric definition - read-only reference data
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    id: i32,
    key: String,
    name: String,
    value_type: MetricValueType,
    best_value: Option<f64>,
    optimized_best_value: bool,
}

impl Metric {
    pub fn new(id: i32, key: String, name: String, value_type: MetricValueType) -> Result<Self> {
        if key.trim().is_empty() {
            anyhow::bail!("Metric key cannot be empty (metric id {})", id);
        }

        Ok(Self {
            id,
            key,
            name,
            value_type,
            best_value: None,
            optimized_best_value: false,
        })
    }

    /// Sets the best value and whether it may be substituted for missing measures
    pub fn with_best_value(mut self, best_value: f64, optimized_best_value: bool) -> Self {
        self.best_value = Some(best_value);
        self.optimized_best_value = optimized_best_value;
        self
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> MetricValueType {
        self.value_type
    }

    pub fn best_value(&self) -> Option<f64> {
        self.best_value
    }

    pub fn is_optimized_best_value(&self) -> bool {
        self.optimized_best_value
    }

    /// Optimized for best value and carrying a best value
    pub fn is_eligible_for_best_value(&self) -> bool {
        self.is_optimized_best_value() && self.best_value.is_some()
    }
}
