use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use anyhow::{Context, Result};
use log::{error, warn};

use crate::models::{Category, QuoteRecord};

/// Per-category draw history, insertion order = draw order (oldest first).
/// Serializes as `{ "JOY": [...], "ANGER": [...], ... }`.
pub type History = BTreeMap<Category, Vec<QuoteRecord>>;

/// Every category present, each with an empty sequence.
fn default_history() -> History {
    Category::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect()
}

struct HistoryInner {
    path: PathBuf,
    data: RwLock<History>,
}

/// Append-only history with the whole document persisted after every
/// mutation. Single logical writer; clones share the same backing state.
#[derive(Clone)]
pub struct HistoryStore {
    inner: Arc<HistoryInner>,
}

impl HistoryStore {
    /// Opens the store at `path`. An absent or unreadable blob falls back
    /// silently to the empty default; the malformed blob is discarded and
    /// only logged, never surfaced to the caller.
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create history directory {}", parent.display())
            })?;
        }

        let data = load_or_default(&path);

        Ok(Self {
            inner: Arc::new(HistoryInner {
                path,
                data: RwLock::new(data),
            }),
        })
    }

    /// Appends `record` to `category`'s sequence and persists the entire
    /// document. A failed write leaves the prior persisted state intact
    /// and is logged rather than surfaced; the in-memory append stands.
    pub fn append(&self, category: Category, record: QuoteRecord) {
        let guard = &mut *self.inner.data.write().unwrap();
        guard.entry(category).or_default().push(record);
        if let Err(err) = self.persist(guard) {
            error!("Failed to persist history: {err:#}");
        }
    }

    /// Ordered snapshot, oldest first. The history view shows it reversed.
    pub fn all(&self, category: Category) -> Vec<QuoteRecord> {
        self.inner
            .data
            .read()
            .unwrap()
            .get(&category)
            .cloned()
            .unwrap_or_default()
    }

    pub fn len(&self, category: Category) -> usize {
        self.inner
            .data
            .read()
            .unwrap()
            .get(&category)
            .map(Vec::len)
            .unwrap_or(0)
    }

    fn persist(&self, data: &History) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.inner.path, serialized).with_context(|| {
            format!("failed to write history to {}", self.inner.path.display())
        })
    }
}

fn load_or_default(path: &Path) -> History {
    let mut data = if path.exists() {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<History>(&contents) {
                Ok(parsed) => parsed,
                Err(err) => {
                    warn!(
                        "Discarding unreadable history at {}: {err}",
                        path.display()
                    );
                    default_history()
                }
            },
            Err(err) => {
                warn!("Failed to read history from {}: {err}", path.display());
                default_history()
            }
        }
    } else {
        default_history()
    };

    // Older or hand-edited blobs may be missing category keys; the
    // in-memory map always carries all six.
    for category in Category::ALL {
        data.entry(category).or_default();
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::new(dir.path().join("history.json")).unwrap()
    }

    #[test]
    fn fresh_store_has_all_six_categories_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        for category in Category::ALL {
            assert_eq!(store.all(category), Vec::new());
            assert_eq!(store.len(category), 0);
        }
    }

    #[test]
    fn append_persists_and_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let store = HistoryStore::new(path.clone()).unwrap();
        let record = QuoteRecord::new("生日快乐");
        store.append(Category::Birthday, record.clone());

        let reopened = HistoryStore::new(path).unwrap();
        assert_eq!(reopened.all(Category::Birthday), vec![record]);
        assert_eq!(reopened.len(Category::Joy), 0);
    }

    #[test]
    fn append_only_growth_preserves_existing_records() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let first = QuoteRecord::new("one");
        store.append(Category::Joy, first.clone());
        for n in 0..5 {
            store.append(Category::Joy, QuoteRecord::new(format!("more {n}")));
        }

        let all = store.all(Category::Joy);
        assert_eq!(all.len(), 6);
        // Oldest first, and the first record is untouched.
        assert_eq!(all[0], first);
    }

    #[test]
    fn partial_blob_is_normalized_to_all_six_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(
            &path,
            r#"{"JOY":[{"id":"x","text":"hello","timestamp":1000}]}"#,
        )
        .unwrap();

        let store = HistoryStore::new(path).unwrap();
        let joy = store.all(Category::Joy);
        assert_eq!(joy.len(), 1);
        assert_eq!(joy[0].id, "x");
        assert_eq!(joy[0].text, "hello");
        assert_eq!(joy[0].timestamp, 1000);
        for category in Category::ALL {
            if category != Category::Joy {
                assert!(store.all(category).is_empty());
            }
        }
    }

    #[test]
    fn invalid_json_falls_back_to_empty_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json").unwrap();

        let store = HistoryStore::new(path).unwrap();
        for category in Category::ALL {
            assert!(store.all(category).is_empty());
        }
    }

    #[test]
    fn persisted_blob_is_round_trip_stable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let store = HistoryStore::new(path.clone()).unwrap();
        store.append(Category::Answers, QuoteRecord::new("是的。"));
        let first_write = fs::read_to_string(&path).unwrap();

        // Reload and rewrite without mutating; the blob must not change.
        let reopened = HistoryStore::new(path.clone()).unwrap();
        reopened
            .persist(&reopened.inner.data.read().unwrap())
            .unwrap();
        let second_write = fs::read_to_string(&path).unwrap();

        assert_eq!(first_write, second_write);
    }
}
