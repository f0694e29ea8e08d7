//! Core projection over JSON object records.

use serde_json::{Map, Value};

/// One input item: an ordered mapping from field name to an arbitrary JSON value.
pub type Record = Map<String, Value>;

/// One output item, keyed by the requested field names in request order.
pub type ProjectedRecord = Map<String, Value>;

/// Projects records onto a fixed list of field names.
///
/// Values are copied as-is; nested objects and arrays are not flattened.
/// Field names are matched literally against top-level keys, so a dotted
/// name like `"address.number"` only matches a key spelled exactly that way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projector {
    fields: Vec<String>,
}

impl Projector {
    /// Creates a projector selecting `fields`, in the given order.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the selected field names.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Projects a single record.
    ///
    /// Absent fields map to `null`. A repeated field name keeps the position
    /// of its first occurrence.
    pub fn project_record(&self, record: &Record) -> ProjectedRecord {
        let mut projected = Map::with_capacity(self.fields.len());
        for field in &self.fields {
            let value = record.get(field).cloned().unwrap_or(Value::Null);
            projected.insert(field.clone(), value);
        }
        projected
    }

    /// Projects every record, preserving input order.
    #[tracing::instrument(skip_all, fields(record_count = data.len(), field_count = self.fields.len()))]
    pub fn project(&self, data: &[Record]) -> Vec<ProjectedRecord> {
        let projected: Vec<ProjectedRecord> =
            data.iter().map(|record| self.project_record(record)).collect();
        tracing::debug!(projected = projected.len(), "projection complete");
        projected
    }
}

/// Projects `data` onto `fields`.
pub fn project(data: &[Record], fields: &[String]) -> Vec<ProjectedRecord> {
    Projector::new(fields.iter().cloned()).project(data)
}
