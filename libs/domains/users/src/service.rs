use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::{Arc, LazyLock};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{LoginRequest, RegisterUser, User};
use crate::repository::UserRepository;

/// Registration and credential checks
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new account with an Argon2id-hashed password
    #[instrument(skip(self, input), fields(user_name = ?input.user_name))]
    pub async fn register(&self, input: RegisterUser) -> UserResult<User> {
        let (user_name, password) = input.credentials()?;

        if self.repository.user_name_exists(user_name).await? {
            return Err(UserError::DuplicateUserName(user_name.to_string()));
        }

        let password_hash = hash_password(password)?;
        let user = self
            .repository
            .create(User::new(user_name, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Check credentials. Unknown user and wrong password give the same error.
    #[instrument(skip(self, input), fields(user_name = ?input.user_name))]
    pub async fn login(&self, input: LoginRequest) -> UserResult<User> {
        let (user_name, password) = input.credentials()?;

        let Some(user) = self.repository.get_by_user_name(user_name).await? else {
            // A miss costs one Argon2 verify, like a wrong password.
            let _ = verify_password(password, &DUMMY_HASH);
            return Err(UserError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }
}

// Password helpers

/// Hash checked against when the user name is unknown
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("marketplace-dummy-password").unwrap_or_default());

fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

fn verify_password(password: &str, hash: &str) -> UserResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn stored_user(user_name: &str, password: &str) -> User {
        User::new(user_name, hash_password(password).unwrap())
    }

    #[test]
    fn test_hash_is_salted_phc_string() {
        let a = hash_password("hunter2").unwrap();
        let b = hash_password("hunter2").unwrap();

        assert!(a.starts_with("$argon2id$"));
        assert_ne!(a, b);
        assert!(verify_password("hunter2", &a).unwrap());
        assert!(!verify_password("hunter3", &a).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("pw", "plaintext"),
            Err(UserError::PasswordHash(_))
        ));
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_user_name_exists()
            .with(eq("alice"))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create()
            .withf(|user| user.user_name == "alice" && user.password_hash != "s3cret")
            .times(1)
            .returning(Ok);

        let service = UserService::new(repo);
        let user = service
            .register(RegisterUser::new("alice", "s3cret"))
            .await
            .unwrap();

        assert!(verify_password("s3cret", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_duplicate_user_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_user_name_exists().returning(|_| Ok(true));
        repo.expect_create().never();

        let service = UserService::new(repo);
        let result = service.register(RegisterUser::new("alice", "pw")).await;

        assert!(matches!(result, Err(UserError::DuplicateUserName(name)) if name == "alice"));
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let mut repo = MockUserRepository::new();
        repo.expect_user_name_exists().never();

        let service = UserService::new(repo);
        let result = service
            .register(RegisterUser {
                user_name: Some("alice".into()),
                password: None,
            })
            .await;

        assert!(matches!(result, Err(UserError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_register_propagates_database_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_user_name_exists()
            .returning(|_| Err(UserError::Database("connection reset".into())));

        let service = UserService::new(repo);
        let result = service.register(RegisterUser::new("alice", "pw")).await;

        assert!(matches!(result, Err(UserError::Database(_))));
    }

    #[tokio::test]
    async fn test_login_success() {
        let user = stored_user("alice", "s3cret");
        let user_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_user_name()
            .with(eq("alice"))
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(repo);
        let logged_in = service
            .login(LoginRequest::new("alice", "s3cret"))
            .await
            .unwrap();

        assert_eq!(logged_in.id, user_id);
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_user_look_the_same() {
        let user = stored_user("alice", "s3cret");

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_user_name()
            .with(eq("alice"))
            .returning(move |_| Ok(Some(user.clone())));
        repo.expect_get_by_user_name()
            .with(eq("mallory"))
            .returning(|_| Ok(None));

        let service = UserService::new(repo);

        let wrong = service.login(LoginRequest::new("alice", "nope")).await;
        let unknown = service.login(LoginRequest::new("mallory", "s3cret")).await;

        assert!(matches!(wrong, Err(UserError::InvalidCredentials)));
        assert!(matches!(unknown, Err(UserError::InvalidCredentials)));
    }

    #[test]
    fn test_dummy_hash_has_real_argon2_cost() {
        assert!(DUMMY_HASH.starts_with("$argon2id$"));
        let dummy = PasswordHash::new(&DUMMY_HASH).unwrap();
        let real_hash = hash_password("pw").unwrap();
        let real = PasswordHash::new(&real_hash).unwrap();
        assert_eq!(dummy.params, real.params);
    }

    #[tokio::test]
    async fn test_login_unknown_user_still_runs_password_check() {
        let user = stored_user("alice", "s3cret");

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_user_name()
            .with(eq("alice"))
            .returning(move |_| Ok(Some(user.clone())));
        repo.expect_get_by_user_name()
            .with(eq("mallory"))
            .returning(|_| Ok(None));

        let service = UserService::new(repo);
        LazyLock::force(&DUMMY_HASH);

        let start = std::time::Instant::now();
        let wrong = service.login(LoginRequest::new("alice", "nope")).await;
        let wrong_elapsed = start.elapsed();

        let start = std::time::Instant::now();
        let unknown = service.login(LoginRequest::new("mallory", "s3cret")).await;
        let unknown_elapsed = start.elapsed();

        assert!(matches!(wrong, Err(UserError::InvalidCredentials)));
        assert!(matches!(unknown, Err(UserError::InvalidCredentials)));
        // A skipped verify is orders of magnitude faster than one Argon2 run.
        assert!(
            unknown_elapsed * 4 >= wrong_elapsed,
            "unknown user took {unknown_elapsed:?}, wrong password took {wrong_elapsed:?}"
        );
    }
}
