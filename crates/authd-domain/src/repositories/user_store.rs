//! User Store Interface
//!
//! Contract for the collaborator that owns credential records.

use crate::entities::User;
use crate::error::Result;
use async_trait::async_trait;

/// Repository: credential records keyed by username
///
/// # Example
///
/// ```ignore
/// use authd_domain::repositories::UserStore;
///
/// match store.find("alice").await? {
///     Some(user) => println!("{} has role {}", user.username, user.role),
///     None => println!("no such user"),
/// }
/// ```
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by username
    ///
    /// Returns `Ok(None)` when the user does not exist; errors mean the
    /// lookup itself failed.
    async fn find(&self, username: &str) -> Result<Option<User>>;

    /// Insert a new user
    ///
    /// Fails with `AlreadyExists` if the username is taken.
    async fn save(&self, user: User) -> Result<()>;
}
