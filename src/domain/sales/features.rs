//! Calendar feature derivation.
//!
//! The model was trained on `year`, `quarter`, `month` and `day_of_week`
//! columns next to the raw identifiers. Any drift in these encodings is
//! silent train/serve skew, so the rules here are fixed:
//! - `quarter = (month - 1) / 3 + 1`
//! - `day_of_week` uses Monday = 0 .. Sunday = 6

use super::types::FeatureRecord;
use crate::domain::errors::FeatureError;
use chrono::{Datelike, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the feature record for one (item, store, date) request.
///
/// Identifiers are copied through untouched. `date` must be a calendar date
/// in `YYYY-MM-DD` form with nothing before or after it.
pub fn derive(item_id: &str, store_id: &str, date: &str) -> Result<FeatureRecord, FeatureError> {
    if item_id.is_empty() {
        return Err(FeatureError::EmptyIdentifier { field: "item_id" });
    }
    if store_id.is_empty() {
        return Err(FeatureError::EmptyIdentifier { field: "store_id" });
    }

    let parsed = parse_date(date)?;
    let month = parsed.month();

    Ok(FeatureRecord {
        item_id: item_id.to_string(),
        store_id: store_id.to_string(),
        year: parsed.year(),
        quarter: quarter_of(month),
        month,
        day_of_week: parsed.weekday().num_days_from_monday(),
    })
}

fn parse_date(date: &str) -> Result<NaiveDate, FeatureError> {
    if !has_date_shape(date) {
        return Err(FeatureError::InvalidDateFormat {
            input: date.to_string(),
            reason: "expected a 4-digit year, month and day separated by '-'".to_string(),
        });
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| FeatureError::InvalidDateFormat {
        input: date.to_string(),
        reason: e.to_string(),
    })
}

/// Four-digit year, then 1-2 digit month and day. chrono's `%Y` alone also
/// takes signed, short or space-padded years.
fn has_date_shape(date: &str) -> bool {
    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    digits(*year, 4, 4) && digits(*month, 1, 2) && digits(*day, 1, 2)
}

fn quarter_of(month: u32) -> u32 {
    (month - 1) / 3 + 1
}
