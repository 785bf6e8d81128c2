use forma_model::{Record, Value};

/// Read/write view over a record snapshot.
///
/// Reads prefer the change-set, including explicit `null` writes, and fall
/// back to the snapshot. Writes only ever touch the change-set. No
/// validation happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateProxy {
    snapshot: Record,
    changes: Record,
}

impl StateProxy {
    pub fn new(snapshot: Record) -> Self {
        Self {
            snapshot,
            changes: Record::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.changes.get(key).or_else(|| self.snapshot.get(key))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Records `value` for `key`, replacing any earlier write.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.changes.insert(key.into(), value.into());
    }

    /// Writes every entry of `record` through [`set`](Self::set).
    pub fn extend(&mut self, record: Record) {
        self.changes.extend(record);
    }

    /// Replaces the snapshot with freshly loaded data and drops pending
    /// changes.
    pub fn hydrate(&mut self, snapshot: Record) {
        self.snapshot = snapshot;
        self.changes.clear();
    }

    /// Keys written since creation, each with its latest value.
    pub fn changes(&self) -> &Record {
        &self.changes
    }

    pub fn into_changes(self) -> Record {
        self.changes
    }

    pub fn is_dirty(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn is_changed(&self, key: &str) -> bool {
        self.changes.contains_key(key)
    }

    pub fn snapshot(&self) -> &Record {
        &self.snapshot
    }

    /// The snapshot with the change-set laid over it.
    pub fn current(&self) -> Record {
        let mut merged = self.snapshot.clone();
        for (key, value) in &self.changes {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}
