//! Authorization service implementation
//!
//! This service manages which users may operate in which groups. Admin
//! identities come from configuration; per-group access lives in the
//! record store as each user's allowed-groups list.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use crate::models::{NewUserRecord, SeenMember, UserRecord};
use crate::store::RecordStore;
use crate::utils::errors::Result;

/// Outcome of granting a user access to a group.
#[derive(Debug, Clone)]
pub enum GrantOutcome {
    /// A fresh record was created with this group as its first entry.
    Created(UserRecord),
    /// An existing record gained this group.
    Updated(UserRecord),
    /// The record already listed this group; nothing was written.
    AlreadyAllowed,
}

/// Outcome of revoking a user's access to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeOutcome {
    /// The group was removed; other groups remain.
    RemovedFromGroup,
    /// The group was the last one, so the record was deleted.
    DeletedCompletely,
    /// The record exists but never listed this group.
    UserNotInGroup,
    /// No record exists for the user.
    UserNotFound,
}

/// Authorization service for managing group access
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn RecordStore>,
    admin_ids: HashSet<i64>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(store: Arc<dyn RecordStore>, admin_ids: &[i64]) -> Self {
        Self {
            store,
            admin_ids: admin_ids.iter().copied().collect(),
        }
    }

    /// Check if user is a bot admin
    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admin_ids.contains(&user_id)
    }

    /// Check whether the user may operate in the given group
    pub async fn is_allowed(&self, user_id: i64, group_id: i64) -> Result<bool> {
        let record = self.store.fetch(user_id).await?;
        Ok(record.map(|r| r.is_allowed_in(group_id)).unwrap_or(false))
    }

    /// Grant a user access to a group, creating their record on first grant.
    /// Granting a group the user already holds is a no-op.
    pub async fn grant(&self, group_id: i64, target: &SeenMember) -> Result<GrantOutcome> {
        debug!(user_id = target.telegram_id, group_id = group_id, "Granting group access");

        let group_key = group_id.to_string();
        match self.store.fetch(target.telegram_id).await? {
            Some(record) if record.allowed_groups.contains(&group_key) => {
                debug!(user_id = target.telegram_id, group_id = group_id, "User already allowed in group");
                Ok(GrantOutcome::AlreadyAllowed)
            }
            Some(record) => {
                let mut groups = record.allowed_groups;
                groups.push(group_key);
                let updated = self
                    .store
                    .update_access(
                        target.telegram_id,
                        &groups,
                        target.username.as_deref(),
                        Some(&target.full_name()),
                    )
                    .await?;
                info!(user_id = target.telegram_id, group_id = group_id, group_count = updated.allowed_groups.len(), "Group access granted");
                Ok(GrantOutcome::Updated(updated))
            }
            None => {
                let created = self
                    .store
                    .insert(NewUserRecord {
                        telegram_id: target.telegram_id,
                        username: target.username.clone(),
                        full_name: Some(target.full_name()),
                        allowed_groups: vec![group_key],
                    })
                    .await?;
                info!(user_id = target.telegram_id, group_id = group_id, "User record created");
                Ok(GrantOutcome::Created(created))
            }
        }
    }

    /// Revoke a user's access to a group. Revoking the last group deletes
    /// the record entirely.
    pub async fn revoke(&self, group_id: i64, user_id: i64) -> Result<RevokeOutcome> {
        debug!(user_id = user_id, group_id = group_id, "Revoking group access");

        let Some(record) = self.store.fetch(user_id).await? else {
            return Ok(RevokeOutcome::UserNotFound);
        };

        let group_key = group_id.to_string();
        if !record.allowed_groups.contains(&group_key) {
            return Ok(RevokeOutcome::UserNotInGroup);
        }

        let remaining: Vec<String> = record
            .allowed_groups
            .into_iter()
            .filter(|g| g != &group_key)
            .collect();

        if remaining.is_empty() {
            self.store.delete(user_id).await?;
            info!(user_id = user_id, group_id = group_id, "Last group revoked, record deleted");
            Ok(RevokeOutcome::DeletedCompletely)
        } else {
            self.store
                .update_access(user_id, &remaining, None, None)
                .await?;
            info!(user_id = user_id, group_id = group_id, remaining = remaining.len(), "Group access revoked");
            Ok(RevokeOutcome::RemovedFromGroup)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRecordStore;
    use chrono::Utc;

    fn service(admin_ids: &[i64]) -> (AuthService, Arc<MemoryRecordStore>) {
        let store = Arc::new(MemoryRecordStore::new());
        let service = AuthService::new(store.clone(), admin_ids);
        (service, store)
    }

    fn member(telegram_id: i64) -> SeenMember {
        SeenMember {
            chat_id: -100123,
            telegram_id,
            username: Some("alice".to_string()),
            first_name: "Alice".to_string(),
            last_name: None,
            is_bot: false,
            last_seen: Utc::now(),
        }
    }

    #[test]
    fn test_is_admin() {
        let (service, _) = service(&[111, 222]);
        assert!(service.is_admin(111));
        assert!(!service.is_admin(333));
    }

    #[tokio::test]
    async fn test_grant_creates_record() {
        let (service, store) = service(&[]);

        let outcome = service.grant(-100123, &member(42)).await.unwrap();
        assert!(matches!(outcome, GrantOutcome::Created(_)));

        let record = store.fetch(42).await.unwrap().unwrap();
        assert_eq!(record.allowed_groups, vec!["-100123".to_string()]);
        assert_eq!(record.balance_tk, 0.0);
        assert_eq!(record.username.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn test_grant_is_idempotent() {
        let (service, store) = service(&[]);

        service.grant(-100123, &member(42)).await.unwrap();
        let outcome = service.grant(-100123, &member(42)).await.unwrap();
        assert!(matches!(outcome, GrantOutcome::AlreadyAllowed));

        let record = store.fetch(42).await.unwrap().unwrap();
        assert_eq!(record.allowed_groups, vec!["-100123".to_string()]);
    }

    #[tokio::test]
    async fn test_grant_second_group_updates() {
        let (service, store) = service(&[]);

        service.grant(-100123, &member(42)).await.unwrap();
        let outcome = service.grant(-100999, &member(42)).await.unwrap();
        assert!(matches!(outcome, GrantOutcome::Updated(_)));

        let record = store.fetch(42).await.unwrap().unwrap();
        assert_eq!(
            record.allowed_groups,
            vec!["-100123".to_string(), "-100999".to_string()]
        );
    }

    #[tokio::test]
    async fn test_revoke_last_group_deletes_record() {
        let (service, store) = service(&[]);

        service.grant(-100123, &member(42)).await.unwrap();
        let outcome = service.revoke(-100123, 42).await.unwrap();
        assert_eq!(outcome, RevokeOutcome::DeletedCompletely);
        assert!(store.fetch(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_revoke_non_last_group_preserves_record() {
        let (service, store) = service(&[]);

        service.grant(-100123, &member(42)).await.unwrap();
        service.grant(-100999, &member(42)).await.unwrap();

        let outcome = service.revoke(-100123, 42).await.unwrap();
        assert_eq!(outcome, RevokeOutcome::RemovedFromGroup);

        let record = store.fetch(42).await.unwrap().unwrap();
        assert_eq!(record.allowed_groups, vec!["-100999".to_string()]);
    }

    #[tokio::test]
    async fn test_revoke_unknown_user() {
        let (service, _) = service(&[]);
        let outcome = service.revoke(-100123, 42).await.unwrap();
        assert_eq!(outcome, RevokeOutcome::UserNotFound);
    }

    #[tokio::test]
    async fn test_revoke_group_not_held() {
        let (service, _) = service(&[]);

        service.grant(-100123, &member(42)).await.unwrap();
        let outcome = service.revoke(-100999, 42).await.unwrap();
        assert_eq!(outcome, RevokeOutcome::UserNotInGroup);
    }

    #[tokio::test]
    async fn test_is_allowed() {
        let (service, _) = service(&[]);

        assert!(!service.is_allowed(42, -100123).await.unwrap());

        service.grant(-100123, &member(42)).await.unwrap();
        assert!(service.is_allowed(42, -100123).await.unwrap());
        assert!(!service.is_allowed(42, -100999).await.unwrap());
    }
}
