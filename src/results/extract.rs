//! @ai:module:intent Map a raw record to its numeric measurement
//! @ai:module:layer domain
//! @ai:module:public_api task_value
//! @ai:module:stateless true

use crate::results::record::{RawValue, Record};

/// @ai:intent Extract the measurement of a record
/// @ai:post None when the record carries neither averageMs nor value
/// @ai:post NaN when value is not numeric
/// @ai:effects pure
pub fn task_value(record: &Record) -> Option<f64> {
    if let Some(average_ms) = record.average_ms {
        return Some(average_ms);
    }

    record.value.as_ref().map(|value| match value {
        RawValue::Number(n) => *n,
        RawValue::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
    })
}
