use crate::domain::sales::FeatureRecord;

/// Ordered list of feature names.
/// This order MUST match exactly with the column order used by the training pipeline.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_NAMES: &[&str] = &[
    "item_id",
    "store_id",
    "year",
    "quarter",
    "month",
    "day_of_week",
];

/// Declared type of a feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Categorical,
    Numeric,
}

/// A single cell of the model input row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// Kind of a known column, `None` for names outside [`FEATURE_NAMES`].
pub fn feature_kind(name: &str) -> Option<FeatureKind> {
    match name {
        "item_id" | "store_id" => Some(FeatureKind::Categorical),
        "year" | "quarter" | "month" | "day_of_week" => Some(FeatureKind::Numeric),
        _ => None,
    }
}

/// Looks up one column of the record by name.
pub fn feature_value<'a>(record: &'a FeatureRecord, name: &str) -> Option<FeatureValue<'a>> {
    let value = match name {
        "item_id" => FeatureValue::Text(&record.item_id),
        "store_id" => FeatureValue::Text(&record.store_id),
        "year" => FeatureValue::Number(f64::from(record.year)),
        "quarter" => FeatureValue::Number(f64::from(record.quarter)),
        "month" => FeatureValue::Number(f64::from(record.month)),
        "day_of_week" => FeatureValue::Number(f64::from(record.day_of_week)),
        _ => return None,
    };
    Some(value)
}

/// Converts the record into its ordered row, for logging and debugging.
pub fn record_to_row(record: &FeatureRecord) -> Vec<FeatureValue<'_>> {
    FEATURE_NAMES
        .iter()
        .filter_map(|name| feature_value(record, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureRecord {
        FeatureRecord {
            item_id: "FOODS_1_001".to_string(),
            store_id: "CA_1".to_string(),
            year: 2023,
            quarter: 4,
            month: 10,
            day_of_week: 6,
        }
    }

    #[test]
    fn test_row_length() {
        let record = sample();
        let row = record_to_row(&record);
        assert_eq!(row.len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_consistency() {
        let record = sample();
        let row = record_to_row(&record);
        // item_id is index 0
        assert_eq!(row[0], FeatureValue::Text("FOODS_1_001"));
        // day_of_week is last index (5)
        assert_eq!(row[5], FeatureValue::Number(6.0));
    }

    #[test]
    fn test_every_name_has_a_kind() {
        for name in FEATURE_NAMES {
            assert!(feature_kind(name).is_some(), "{} has no kind", name);
        }
        assert_eq!(feature_kind("weekday"), None);
        assert_eq!(feature_value(&sample(), "weekday"), None);
    }
}
