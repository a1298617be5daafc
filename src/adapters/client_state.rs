//! Production implementations of the client-side signup seams.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::use_cases::signup::{Clock, LAST_SUBMIT_KEY, SubmitStateStore};

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Submit-state store persisted as a small JSON file, keyed the same way the
/// browser build keys its local storage.
pub struct FileSubmitStateStore {
    path: PathBuf,
}

impl FileSubmitStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Map<String, Value> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}

impl SubmitStateStore for FileSubmitStateStore {
    fn last_submit_ms(&self) -> Option<i64> {
        self.read_map().get(LAST_SUBMIT_KEY)?.as_i64()
    }

    fn set_last_submit_ms(&self, ts: i64) {
        let mut map = self.read_map();
        map.insert(LAST_SUBMIT_KEY.to_string(), Value::from(ts));
        if let Err(err) = std::fs::write(&self.path, Value::Object(map).to_string()) {
            tracing::warn!(
                error = %err,
                path = %self.path.display(),
                "Could not persist submit state"
            );
        }
    }
}
