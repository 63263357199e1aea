//! Operator identity service: registration and login
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::interchange::is_known_interchange;
use crate::domain::{CreateUserDto, DomainError, DomainResult, RepositoryProvider, User};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::shared::errors::InfraError;

const INVALID_CREDENTIALS: &str = "Invalid username or password.";

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    /// Station carried in the token (login override or home station)
    pub interchange: String,
    pub user: User,
}

pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl IdentityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    pub fn jwt_config(&self) -> &JwtConfig {
        &self.jwt_config
    }

    // ── Registration ────────────────────────────────────────────

    /// Register an operator at their home interchange.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        interchange: &str,
    ) -> DomainResult<User> {
        if username.is_empty() || password.is_empty() || interchange.is_empty() {
            return Err(DomainError::Validation(
                "Username, password and interchange are required.".into(),
            ));
        }
        if !is_known_interchange(interchange) {
            return Err(DomainError::UnknownInterchange(interchange.to_string()));
        }

        let users = self.repos.users();
        if users.get_user_by_username(username).await?.is_some() {
            return Err(DomainError::Conflict("Username already exists".into()));
        }

        let password_hash = hash_password(password)
            .map_err(|e| InfraError::Crypto(format!("Failed to hash password: {}", e)))?;

        let user = users
            .create_user(CreateUserDto {
                username: username.to_string(),
                password_hash,
                interchange: interchange.to_string(),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, interchange = %user.interchange, "Operator registered");
        Ok(user)
    }

    // ── Authentication ──────────────────────────────────────────

    /// Check credentials and issue a token. `interchange` overrides the
    /// operator's home station for this session.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        interchange: Option<&str>,
    ) -> DomainResult<AuthResult> {
        if username.is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Username and password are required.".into(),
            ));
        }
        let interchange = interchange.filter(|i| !i.is_empty());
        if let Some(i) = interchange {
            if !is_known_interchange(i) {
                return Err(DomainError::UnknownInterchange(i.to_string()));
            }
        }

        let Some(user) = self.repos.users().get_user_by_username(username).await? else {
            warn!(username = %username, "Login for unknown user");
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            warn!(username = %username, "Login with wrong password");
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        }

        let interchange = interchange.unwrap_or(user.interchange.as_str()).to_string();
        let token = create_token(&user.id, &user.username, &interchange, &self.jwt_config)
            .map_err(|e| InfraError::Crypto(format!("Failed to create token: {}", e)))?;

        info!(user_id = %user.id, interchange = %interchange, "Operator logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            interchange,
            user,
        })
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        self.repos.users().get_user_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::verify_token;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn service() -> IdentityService {
        IdentityService::new(
            Arc::new(InMemoryRepositoryProvider::new()),
            JwtConfig {
                secret: "test".into(),
                expiration_hours: 24,
                issuer: "toll-gate-test".into(),
            },
        )
    }

    #[tokio::test]
    async fn register_then_login_with_home_station() {
        let svc = service();
        let user = svc.register("agent1", "secret", "NS Interchange").await.unwrap();
        assert_ne!(user.password_hash, "secret");

        let auth = svc.login("agent1", "secret", None).await.unwrap();
        assert_eq!(auth.interchange, "NS Interchange");
        assert_eq!(auth.expires_in, 24 * 3600);

        let claims = verify_token(&auth.token, svc.jwt_config()).unwrap();
        assert_eq!(claims.interchange, "NS Interchange");
        assert_eq!(claims.sub, user.id);
    }

    #[tokio::test]
    async fn login_override_station() {
        let svc = service();
        svc.register("agent1", "secret", "NS Interchange").await.unwrap();

        let auth = svc
            .login("agent1", "secret", Some("Bahria Interchange"))
            .await
            .unwrap();
        assert_eq!(auth.interchange, "Bahria Interchange");

        let err = svc.login("agent1", "secret", Some("Invalid")).await.unwrap_err();
        assert_eq!(err, DomainError::UnknownInterchange("Invalid".into()));
    }

    #[tokio::test]
    async fn bad_credentials_are_unauthorized() {
        let svc = service();
        svc.register("agent1", "secret", "NS Interchange").await.unwrap();

        for (user, pass) in [("agent1", "wrong"), ("ghost", "secret")] {
            let err = svc.login(user, pass, None).await.unwrap_err();
            assert_eq!(err, DomainError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
    }

    #[tokio::test]
    async fn register_rejections() {
        let svc = service();
        assert!(matches!(
            svc.register("", "secret", "NS Interchange").await,
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            svc.register("agent1", "secret", "Invalid").await,
            Err(DomainError::UnknownInterchange(_))
        ));

        svc.register("agent1", "secret", "NS Interchange").await.unwrap();
        assert!(matches!(
            svc.register("agent1", "other", "Zero point").await,
            Err(DomainError::Conflict(_))
        ));
    }
}
