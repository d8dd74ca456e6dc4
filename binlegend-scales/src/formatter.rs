use serde::{Deserialize, Serialize};

/// Formats tick values into axis labels.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickFormatter {
    /// Fixed number of fraction digits. `None` prints the shortest representation.
    pub precision: Option<usize>,
    /// Text appended to every label, e.g. `"%"`
    pub suffix: Option<String>,
}

impl TickFormatter {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn format_value(&self, value: f32) -> String {
        // Normalize negative zero so ticks never read "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        let mut label = match self.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        };
        if let Some(suffix) = &self.suffix {
            label.push_str(suffix);
        }
        label
    }

    pub fn format(&self, values: &[f32]) -> Vec<String> {
        values.iter().map(|v| self.format_value(*v)).collect()
    }
}
