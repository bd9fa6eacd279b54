//! In-memory record stores.
//!
//! Each resource owns one [`MemoryStore`], created at start-up from its fixture
//! records and shared across workers through `web::Data`. All reads and writes
//! of a store go through a single lock, so id allocation and the insert it
//! belongs to happen as one step.

use std::str::FromStr;

use tokio::sync::RwLock;

/// A record kept in a [`MemoryStore`].
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> i64;
}

/// How a store picks the id of a newly inserted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdAllocation {
    /// `len + 1`. An id can be handed out again after an earlier record is
    /// deleted, which existing clients have always observed.
    #[default]
    Length,
    /// One past the highest id the store has ever held. Ids are never reused.
    Monotonic,
}

impl FromStr for IdAllocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(IdAllocation::Length),
            "monotonic" => Ok(IdAllocation::Monotonic),
            other => Err(format!(
                "unknown id allocation '{other}', expected 'length' or 'monotonic'"
            )),
        }
    }
}

struct Inner<T> {
    records: Vec<T>,
    highest_id: i64,
}

pub struct MemoryStore<T> {
    inner: RwLock<Inner<T>>,
    allocation: IdAllocation,
}

impl<T: Record> MemoryStore<T> {
    pub fn new(records: Vec<T>, allocation: IdAllocation) -> Self {
        let highest_id = records.iter().map(Record::id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Inner {
                records,
                highest_id,
            }),
            allocation,
        }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.records.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// First record whose id equals `id`.
    pub async fn get(&self, id: i64) -> Option<T> {
        self.inner
            .read()
            .await
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Allocates an id, builds the record with it and appends it.
    pub async fn insert<F>(&self, build: F) -> T
    where
        F: FnOnce(i64) -> T,
    {
        let mut inner = self.inner.write().await;
        let id = match self.allocation {
            IdAllocation::Length => inner.records.len() as i64 + 1,
            IdAllocation::Monotonic => inner.highest_id + 1,
        };
        let record = build(id);
        inner.highest_id = inner.highest_id.max(record.id());
        inner.records.push(record.clone());
        record
    }

    /// Applies `apply` to the first record matching `id` and returns the
    /// result, or `None` if nothing matched.
    pub async fn update<F>(&self, id: i64, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut inner = self.inner.write().await;
        let record = inner.records.iter_mut().find(|record| record.id() == id)?;
        apply(record);
        Some(record.clone())
    }

    /// Removes the first record matching `id`. Later records keep their ids.
    pub async fn delete(&self, id: i64) -> Option<T> {
        let mut inner = self.inner.write().await;
        let index = inner.records.iter().position(|record| record.id() == id)?;
        Some(inner.records.remove(index))
    }
}
