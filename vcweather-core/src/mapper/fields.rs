use serde_json::{Map, Value};

use crate::error::{Result, WeatherError};
use crate::temporal::Layout;

/// A value that can be read out of a single JSON field.
pub(crate) trait FieldValue: Sized {
    /// `None` for `null` and for values of the wrong JSON type.
    fn from_json(value: &Value) -> Option<Self>;
}

impl FieldValue for f64 {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FieldValue for i64 {
    fn from_json(value: &Value) -> Option<Self> {
        value
            .as_i64()
            .or_else(|| value.as_f64().map(|v| v as i64))
    }
}

impl FieldValue for String {
    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldValue for Vec<String> {
    fn from_json(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect(),
        )
    }
}

/// Read-only view over one JSON object of the payload.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    record: &'static str,
    obj: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// `record` names the kind of object ("day", "hour", ...) in error messages.
    pub(crate) fn of(record: &'static str, value: &'a Value) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            WeatherError::malformed(format!("{record} entry is not a JSON object"))
        })?;
        Ok(Self { record, obj })
    }

    pub(crate) fn get_or<T: FieldValue>(&self, key: &str, default: T) -> T {
        self.obj
            .get(key)
            .and_then(T::from_json)
            .unwrap_or(default)
    }

    /// Optional measurement; absent and `null` both become `NaN`.
    pub(crate) fn number(&self, key: &str) -> f64 {
        self.get_or(key, f64::NAN)
    }

    pub(crate) fn integer(&self, key: &str) -> i64 {
        self.get_or(key, 0)
    }

    pub(crate) fn text(&self, key: &str) -> String {
        self.get_or(key, String::new())
    }

    pub(crate) fn strings(&self, key: &str) -> Vec<String> {
        self.get_or(key, Vec::new())
    }

    /// Elements of an optional nested array; empty when absent or `null`.
    pub(crate) fn array(&self, key: &str) -> &'a [Value] {
        self.obj
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mandatory timestamp field, parsed with `parse` according to `layout`.
    pub(crate) fn timestamp<T>(
        &self,
        key: &'static str,
        layout: Layout,
        parse: fn(&str) -> Option<T>,
    ) -> Result<T> {
        let raw = self
            .obj
            .get(key)
            .and_then(Value::as_str)
            .ok_or(WeatherError::MissingRequiredField {
                record: self.record,
                field: key,
            })?;

        parse(raw).ok_or_else(|| WeatherError::InvalidTimestamp {
            field: key,
            value: raw.to_owned(),
            layout,
        })
    }
}
