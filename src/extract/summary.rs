//! Aggregate confidence statistics.

use crate::extract::round3;
use crate::model::ConfidenceSummary;
use crate::service::schema::AnalyzeResult;

/// Collect summary statistics over every confidence the service reported.
///
/// Unlike the flattener, absent confidences are skipped rather than
/// counted as 0, so the statistics reflect only values the model actually
/// produced. Both sides of a key-value association contribute
/// independently — the key of a pair whose value is missing still counts,
/// even though the flattener drops that pair.
pub fn confidence_summary(result: &AnalyzeResult) -> ConfidenceSummary {
    let mut values: Vec<f64> = Vec::new();

    for pair in &result.key_value_pairs {
        if let Some(c) = pair.key.as_ref().and_then(|k| k.confidence) {
            values.push(c);
        }
        if let Some(c) = pair.value.as_ref().and_then(|v| v.confidence) {
            values.push(c);
        }
    }

    for table in &result.tables {
        if let Some(c) = table.confidence {
            values.push(c);
        }
        for cell in &table.cells {
            if let Some(c) = cell.confidence {
                values.push(c);
            }
        }
    }

    for page in &result.pages {
        for line in &page.lines {
            if let Some(c) = line.confidence {
                values.push(c);
            }
        }
    }

    if values.is_empty() {
        return ConfidenceSummary::default();
    }

    let sum: f64 = values.iter().sum();
    let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
    let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    ConfidenceSummary {
        average: round3(sum / values.len() as f64),
        minimum: round3(minimum),
        maximum: round3(maximum),
        count: values.len(),
    }
}
