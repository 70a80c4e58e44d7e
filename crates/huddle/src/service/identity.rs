//! Resolution of (email, display name) pairs to durable users.

use huddle_core::event::{Identity, User};
use huddle_core::storage::{RepositoryError, UserRepository};

/// Finds, renames or creates the user behind an [`Identity`].
pub struct IdentityResolver<'a, R: UserRepository + ?Sized> {
    users: &'a R,
}

impl<'a, R: UserRepository + ?Sized> IdentityResolver<'a, R> {
    pub fn new(users: &'a R) -> Self {
        Self { users }
    }

    /// Returns the user for `identity.email`.
    ///
    /// An unknown email creates the user. A known email with a different name
    /// renames it in place, last writer wins. A create that loses the race on
    /// the unique email is answered with the row that won.
    pub async fn resolve(&self, identity: &Identity) -> Result<User, RepositoryError> {
        if let Some(user) = self.users.get_user_by_email(&identity.email).await? {
            if user.name == identity.name {
                return Ok(user);
            }

            let renamed = user.renamed(identity.name.as_str());
            self.users.update_user(&renamed).await?;
            tracing::debug!(user_id = %renamed.id, name = %renamed.name, "User renamed");
            return Ok(renamed);
        }

        let user = User::new(identity.name.as_str(), identity.email.as_str());
        match self.users.create_user(&user).await {
            Ok(()) => {
                tracing::debug!(user_id = %user.id, email = %user.email, "User created");
                Ok(user)
            }
            Err(err) if err.is_already_exists() => {
                tracing::debug!(email = %identity.email, "Concurrent user create, reading winner");
                self.users
                    .get_user_by_email(&identity.email)
                    .await?
                    .ok_or_else(|| RepositoryError::not_found("User", &identity.email))
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use huddle_core::storage::Result;

    use crate::storage::InMemoryRepository;

    fn identity(name: &str, email: &str) -> Identity {
        Identity {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_unknown_email_creates_user() {
        let repo = InMemoryRepository::new();
        let resolver = IdentityResolver::new(&repo);

        let user = resolver.resolve(&identity("Alice", "alice@x.com")).await.unwrap();

        assert_eq!(user.name, "Alice");
        assert_eq!(repo.get_user_by_email("alice@x.com").await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn test_same_name_returns_existing_user() {
        let repo = InMemoryRepository::new();
        let resolver = IdentityResolver::new(&repo);

        let first = resolver.resolve(&identity("Alice", "alice@x.com")).await.unwrap();
        let second = resolver.resolve(&identity("Alice", "alice@x.com")).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_different_name_renames_in_place() {
        let repo = InMemoryRepository::new();
        let resolver = IdentityResolver::new(&repo);

        let first = resolver.resolve(&identity("Alice", "alice@x.com")).await.unwrap();
        let second = resolver.resolve(&identity("Alicia", "alice@x.com")).await.unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(second.name, "Alicia");
        let stored = repo.get_user_by_email("alice@x.com").await.unwrap().unwrap();
        assert_eq!(stored.name, "Alicia");
    }

    /// Store where another writer creates the user between our read and insert.
    struct RacingUsers {
        winner: User,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl UserRepository for RacingUsers {
        async fn get_user_by_email(&self, _email: &str) -> Result<Option<User>> {
            match self.lookups.fetch_add(1, Ordering::SeqCst) {
                0 => Ok(None),
                _ => Ok(Some(self.winner.clone())),
            }
        }

        async fn create_user(&self, user: &User) -> Result<()> {
            Err(RepositoryError::already_exists("User", &user.email))
        }

        async fn update_user(&self, _user: &User) -> Result<()> {
            unreachable!("race retry must not rename")
        }
    }

    #[tokio::test]
    async fn test_duplicate_create_returns_stored_user() {
        let users = RacingUsers {
            winner: User::new("Alice", "alice@x.com"),
            lookups: AtomicUsize::new(0),
        };
        let resolver = IdentityResolver::new(&users);

        let user = resolver.resolve(&identity("Alice", "alice@x.com")).await.unwrap();

        assert_eq!(user, users.winner);
        assert_eq!(users.lookups.load(Ordering::SeqCst), 2);
    }
}
