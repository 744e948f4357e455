//! Driven port for user persistence adapters and their errors.
//!
//! The repository is a narrow capability interface: five record operations
//! against a single table. Adapters surface exactly two recognized signals,
//! a missing row and a name collision; everything else crosses the boundary
//! as an opaque connection or query failure that callers do not interpret.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use pagination::PageParams;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// No stored row matches the given identifier.
        NotFound => "user not found in storage",
        /// The requested name collides with a different stored user.
        DuplicateName { name: String } => "user name already taken: {name}",
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage-access boundary for user records.
///
/// Every call runs on the caller's task; dropping the returned future
/// cancels the in-flight storage operation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the stored record, including the
    /// generated identifier and creation timestamp.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError>;

    /// Overwrite `name` and `other`, stamping `updated_at`.
    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Remove the user with the given identifier.
    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError>;

    /// Return users ordered by ascending creation time, bounded by the
    /// page's limit and offset. No upper bound is enforced here.
    async fn list(&self, page: PageParams) -> Result<Vec<User>, UserPersistenceError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i64,
    // Insertion order matches creation-time order.
    rows: Vec<User>,
}

/// In-process [`UserRepository`] fulfilling the full five-operation
/// contract without a storage backend.
///
/// Used by tests and as the fallback when no database is configured.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, InMemoryState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => panic!("in-memory user state poisoned: {poisoned}"),
        }
    }
}

fn page_bounds(page: PageParams) -> (usize, usize) {
    let limit = usize::try_from(page.limit()).unwrap_or(0);
    let offset = usize::try_from(page.offset()).unwrap_or(0);
    (limit, offset)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.lock();
        if state.rows.iter().any(|row| row.name == draft.name) {
            return Err(UserPersistenceError::duplicate_name(draft.name.clone()));
        }

        state.next_id += 1;
        let user = User {
            id: UserId::new(state.next_id),
            name: draft.name.clone(),
            other: draft.other.clone(),
            created_at: Utc::now(),
            updated_at: None,
        };
        state.rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError> {
        self.lock()
            .rows
            .iter()
            .find(|row| row.id == id)
            .cloned()
            .ok_or_else(UserPersistenceError::not_found)
    }

    async fn update(&self, id: UserId, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.lock();
        if state
            .rows
            .iter()
            .any(|row| row.id != id && row.name == draft.name)
        {
            return Err(UserPersistenceError::duplicate_name(draft.name.clone()));
        }

        let row = state
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(UserPersistenceError::not_found)?;
        row.name = draft.name.clone();
        row.other = draft.other.clone();
        row.updated_at = Some(Utc::now());
        Ok(row.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut state = self.lock();
        let before = state.rows.len();
        state.rows.retain(|row| row.id != id);
        if state.rows.len() == before {
            return Err(UserPersistenceError::not_found());
        }
        Ok(())
    }

    async fn list(&self, page: PageParams) -> Result<Vec<User>, UserPersistenceError> {
        let (limit, offset) = page_bounds(page);
        Ok(self
            .lock()
            .rows
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> UserDraft {
        UserDraft::new(name, "other")
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_creation_times() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create(&draft("a")).await.expect("first create");
        let second = repo.create(&draft("b")).await.expect("second create");

        assert!(first.id.as_i64() > 0);
        assert!(second.id > first.id);
        assert!(second.created_at >= first.created_at);
        assert_eq!(first.updated_at, None);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_names() {
        let repo = InMemoryUserRepository::new();
        repo.create(&draft("taken")).await.expect("first create");

        let err = repo
            .create(&draft("taken"))
            .await
            .expect_err("duplicate create");
        assert!(matches!(err, UserPersistenceError::DuplicateName { .. }));
    }

    #[tokio::test]
    async fn round_trip_preserves_name_other_and_created_at() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(&draft("alice")).await.expect("create");

        let fetched = repo.find_by_id(created.id).await.expect("fetch");
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.other, created.other);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_stamps_updated_at() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(&draft("alice")).await.expect("create");

        let updated = repo
            .update(created.id, &UserDraft::new("alicia", "changed"))
            .await
            .expect("update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "alicia");
        assert_eq!(updated.other, "changed");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn update_rejects_name_held_by_another_user() {
        let repo = InMemoryUserRepository::new();
        repo.create(&draft("first")).await.expect("create first");
        let second = repo.create(&draft("second")).await.expect("create second");

        let err = repo
            .update(second.id, &draft("first"))
            .await
            .expect_err("colliding update");
        assert!(matches!(err, UserPersistenceError::DuplicateName { .. }));
    }

    #[tokio::test]
    async fn update_keeping_own_name_is_not_a_collision() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(&draft("alice")).await.expect("create");

        let updated = repo
            .update(created.id, &UserDraft::new("alice", "changed"))
            .await
            .expect("same-name update");
        assert_eq!(updated.other, "changed");
    }

    #[tokio::test]
    async fn missing_rows_signal_not_found() {
        let repo = InMemoryUserRepository::new();
        let missing = UserId::new(42);

        assert!(matches!(
            repo.find_by_id(missing).await,
            Err(UserPersistenceError::NotFound)
        ));
        assert!(matches!(
            repo.update(missing, &draft("x")).await,
            Err(UserPersistenceError::NotFound)
        ));
        assert!(matches!(
            repo.delete(missing).await,
            Err(UserPersistenceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create(&draft("alice")).await.expect("create");

        repo.delete(created.id).await.expect("delete");
        assert!(matches!(
            repo.find_by_id(created.id).await,
            Err(UserPersistenceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_honours_limit_and_offset_in_creation_order() {
        let repo = InMemoryUserRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(&draft(name)).await.expect("create");
        }

        let first_page = repo.list(PageParams::new(2, 0)).await.expect("first page");
        assert_eq!(
            first_page.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
            ["a", "b"]
        );

        let second_page = repo.list(PageParams::new(2, 2)).await.expect("second page");
        assert_eq!(
            second_page.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
            ["c"]
        );
    }
}
