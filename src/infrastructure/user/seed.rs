//! Development account seeding

use tracing::info;

use crate::domain::user::{NewUser, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Usernames of the development accounts; each gets `<name>@example.com`
pub const DEMO_USERNAMES: [&str; 5] = ["alice", "bob", "charlie", "diana", "eve"];

/// Outcome of a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub updated: usize,
}

/// Create the demo accounts, resetting the password of any that already exist
pub async fn seed_demo_users<R, H>(
    repository: &R,
    hasher: &H,
    password: &str,
) -> Result<SeedReport, DomainError>
where
    R: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
{
    let mut report = SeedReport::default();

    for username in DEMO_USERNAMES {
        let password_hash = hasher.hash(password)?;

        match repository.find_by_username(username).await? {
            Some(existing) => {
                repository
                    .update_password(existing.id(), &password_hash)
                    .await?;
                report.updated += 1;
                info!(username, "Reset demo user password");
            }
            None => {
                let email = format!("{}@example.com", username);
                repository
                    .save(NewUser::new(username, password_hash, email))
                    .await?;
                report.created += 1;
                info!(username, "Created demo user");
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PasswordConfig;
    use crate::infrastructure::user::password::Argon2Hasher;
    use crate::infrastructure::user::repository::InMemoryUserRepository;

    fn cheap_hasher() -> Argon2Hasher {
        Argon2Hasher::from_config(&PasswordConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
            output_len: 32,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_seed_creates_demo_users() {
        let repository = InMemoryUserRepository::new();
        let hasher = cheap_hasher();

        let report = seed_demo_users(&repository, &hasher, "password123")
            .await
            .unwrap();

        assert_eq!(report, SeedReport { created: 5, updated: 0 });
        assert_eq!(repository.count().await.unwrap(), 5);

        let diana = repository.find_by_username("diana").await.unwrap().unwrap();
        assert_eq!(diana.email(), "diana@example.com");
        assert!(hasher.verify("password123", diana.password_hash()));
    }

    #[tokio::test]
    async fn test_seed_resets_existing_passwords() {
        let repository = InMemoryUserRepository::new();
        let hasher = cheap_hasher();

        repository
            .save(NewUser::new(
                "alice",
                hasher.hash("old_password").unwrap(),
                "alice@example.com",
            ))
            .await
            .unwrap();

        let report = seed_demo_users(&repository, &hasher, "password123")
            .await
            .unwrap();

        assert_eq!(report, SeedReport { created: 4, updated: 1 });

        let alice = repository.find_by_username("alice").await.unwrap().unwrap();
        assert!(hasher.verify("password123", alice.password_hash()));
        assert!(!hasher.verify("old_password", alice.password_hash()));
    }

    #[tokio::test]
    async fn test_seed_is_repeatable() {
        let repository = InMemoryUserRepository::new();
        let hasher = cheap_hasher();

        seed_demo_users(&repository, &hasher, "password123").await.unwrap();
        let report = seed_demo_users(&repository, &hasher, "password123")
            .await
            .unwrap();

        assert_eq!(report, SeedReport { created: 0, updated: 5 });
        assert_eq!(repository.count().await.unwrap(), 5);
    }
}
