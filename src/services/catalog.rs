// SPDX-License-Identifier: MIT

//! Exercise catalog service.
//!
//! Plain CRUD over `ActivityMaster` records, no cross-entity validation.

use crate::db::Database;
use crate::error::{AppError, Result};
use crate::models::{ActivityMaster, ActivityMasterPayload};
use std::sync::Arc;
use validator::Validate;

/// Manages the exercise catalog.
pub struct CatalogService {
    db: Arc<Database>,
}

impl CatalogService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All catalog entries.
    pub fn list(&self) -> Result<Vec<ActivityMaster>> {
        self.db.activity_masters.find_all()
    }

    /// Catalog entry by id.
    pub fn get(&self, id: u64) -> Result<ActivityMaster> {
        self.db
            .activity_masters
            .find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(format!("ActivityMaster not found with id: {}", id)))
    }

    /// Create a new catalog entry. `name` must be non-empty.
    pub fn create(&self, payload: ActivityMasterPayload) -> Result<ActivityMaster> {
        payload
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let stored = self.db.activity_masters.save(ActivityMaster {
            id: None,
            name: payload.name,
            description: payload.description,
        })?;

        tracing::info!(id = ?stored.id, name = %stored.name, "Created catalog entry");
        Ok(stored)
    }

    /// Overwrite `name` and `description` of an existing entry.
    pub fn update(&self, id: u64, payload: ActivityMasterPayload) -> Result<ActivityMaster> {
        payload
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut master = self.get(id)?;
        master.name = payload.name;
        master.description = payload.description;
        self.db.activity_masters.save(master)
    }

    /// Delete a catalog entry.
    ///
    /// Does not cascade: activity instances referencing the entry keep
    /// their `activity_master_id` and are left dangling.
    pub fn delete(&self, id: u64) -> Result<()> {
        self.get(id)?;
        self.db.activity_masters.delete(id)?;
        tracing::info!(id, "Deleted catalog entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(Database::new()))
    }

    fn payload(name: &str) -> ActivityMasterPayload {
        ActivityMasterPayload {
            name: name.to_string(),
            description: Some("barbell".to_string()),
        }
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let svc = service();

        let created = svc.create(payload("Bench Press")).unwrap();
        let fetched = svc.get(created.id.unwrap()).unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Bench Press");
        assert_eq!(fetched.description.as_deref(), Some("barbell"));
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let svc = service();

        let err = svc.create(payload("")).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert!(svc.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_overwrites_both_fields() {
        let svc = service();
        let created = svc.create(payload("Bench Press")).unwrap();
        let id = created.id.unwrap();

        let updated = svc
            .update(
                id,
                ActivityMasterPayload {
                    name: "Incline Bench Press".to_string(),
                    description: None,
                },
            )
            .unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Incline Bench Press");
        assert_eq!(updated.description, None);
        assert_eq!(svc.get(id).unwrap(), updated);
    }

    #[test]
    fn test_update_missing_id_is_not_found_and_writes_nothing() {
        let svc = service();

        let err = svc.update(42, payload("Squat")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(svc.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let svc = service();
        let id = svc.create(payload("Bench Press")).unwrap().id.unwrap();

        svc.delete(id).unwrap();

        assert!(matches!(svc.get(id), Err(AppError::NotFound(_))));
        assert!(matches!(svc.delete(id), Err(AppError::NotFound(_))));
    }
}
