//! Key-value pair types.

use serde::{Deserialize, Serialize};

/// An extracted field label and its associated value text.
///
/// Invariant: `key` and `value` are never empty. Associations where the
/// service omitted either side are dropped during flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// Field label text
    pub key: String,

    /// Field value text
    pub value: String,

    /// Confidence of the key extraction, rounded to 3 decimals (0 when
    /// the service reported none)
    pub key_confidence: f64,

    /// Confidence of the value extraction, rounded to 3 decimals (0 when
    /// the service reported none)
    pub value_confidence: f64,
}

impl KeyValuePair {
    /// Create a new pair.
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        key_confidence: f64,
        value_confidence: f64,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            key_confidence,
            value_confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pair() {
        let pair = KeyValuePair::new("Invoice No", "12345", 0.95, 0.88);
        assert_eq!(pair.key, "Invoice No");
        assert_eq!(pair.value, "12345");
        assert_eq!(pair.key_confidence, 0.95);
        assert_eq!(pair.value_confidence, 0.88);
    }
}
