// SPDX-License-Identifier: MIT

//! In-memory store with typed per-entity tables.
//!
//! Each entity type lives in exactly one table keyed by identifier; all
//! cross-entity references elsewhere are identifier values looked up on
//! demand. The API is `Result`-typed because the storage contract admits
//! failure; this backend itself is infallible, and a future backend can
//! surface failures through `AppError::Storage` without touching callers.

use crate::db::Record;
use crate::error::Result;
use crate::models::{Activity, ActivityMaster, User, Workout};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// One entity table: find-by-id, find-all, save (insert-or-update), delete.
pub struct Table<T: Record> {
    rows: DashMap<u64, T>,
    next_id: AtomicU64,
}

impl<T: Record> Table<T> {
    fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Look up a record by id. Absence is not an error at this layer.
    pub fn find_by_id(&self, id: u64) -> Result<Option<T>> {
        Ok(self.rows.get(&id).map(|r| r.value().clone()))
    }

    /// All records, in id order.
    pub fn find_all(&self) -> Result<Vec<T>> {
        let mut rows: Vec<T> = self.rows.iter().map(|r| r.value().clone()).collect();
        rows.sort_by_key(|r| r.id());
        Ok(rows)
    }

    /// Insert or update. A record without an id gets the next one assigned;
    /// a record with an id overwrites the stored record under that id.
    pub fn save(&self, mut row: T) -> Result<T> {
        let id = match row.id() {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                row.set_id(id);
                id
            }
        };
        self.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Remove a record by id. Removing an absent id is a no-op.
    pub fn delete(&self, id: u64) -> Result<()> {
        self.rows.remove(&id);
        Ok(())
    }
}

/// The full store: one table per entity type.
pub struct Database {
    pub users: Table<User>,
    pub activity_masters: Table<ActivityMaster>,
    pub activities: Table<Activity>,
    pub workouts: Table<Workout>,
}

impl Database {
    pub fn new() -> Self {
        Self {
            users: Table::new(),
            activity_masters: Table::new(),
            activities: Table::new(),
            workouts: Table::new(),
        }
    }

    /// Extra finder on workouts: all workouts owned by the given user,
    /// in id order. An unknown user yields an empty vector, not an error.
    pub fn find_workouts_by_user(&self, user_id: u64) -> Result<Vec<Workout>> {
        let mut rows: Vec<Workout> = self
            .workouts
            .rows
            .iter()
            .filter(|r| r.value().user_id == Some(user_id))
            .map(|r| r.value().clone())
            .collect();
        rows.sort_by_key(|r| r.id());
        Ok(rows)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> Option<u64> {
                    self.id
                }

                fn set_id(&mut self, id: u64) {
                    self.id = Some(id);
                }
            }
        )*
    };
}

impl_record!(User, ActivityMaster, Activity, Workout);
