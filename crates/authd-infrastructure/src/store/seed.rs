//! Startup seeding of the user store

use crate::config::SeedUser;
use crate::crypto::PasswordService;
use authd_domain::constants::USERNAME_MAX_LENGTH;
use authd_domain::error::{Error, Result};
use authd_domain::{User, UserStore};
use tracing::{debug, info};

/// Hash and save every configured user
///
/// Runs before the server accepts requests. Hashing happens on the blocking
/// pool. Returns the number of users created.
pub async fn seed_users(
    store: &dyn UserStore,
    passwords: &PasswordService,
    users: &[SeedUser],
) -> Result<usize> {
    for seed in users {
        if seed.username.is_empty() {
            return Err(Error::invalid_argument("Seed user with empty username"));
        }
        if seed.username.len() > USERNAME_MAX_LENGTH {
            return Err(Error::invalid_argument(format!(
                "Username '{}' exceeds {USERNAME_MAX_LENGTH} characters",
                seed.username
            )));
        }

        let hasher = passwords.clone();
        let password = seed.password.clone();
        let hash = tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| Error::infrastructure(format!("Password hashing task aborted: {e}")))??;

        store
            .save(User::new(seed.username.as_str(), hash, seed.role))
            .await?;
        debug!(username = %seed.username, role = %seed.role, "Seeded user");
    }

    info!(count = users.len(), "User store seeded");
    Ok(users.len())
}
