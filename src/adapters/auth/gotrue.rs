//! GoTrue-compatible adapter for access token validation.
//!
//! Production implementation of the `SessionValidator` port against the
//! hosted auth service. Tokens are verified against the issuer's published
//! JWKS; issuer, audience, and expiry checks ride on the decode step.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::jwk::{Jwk, JwkSet, KeyAlgorithm};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

const DEFAULT_JWKS_TTL: Duration = Duration::from_secs(3600);
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the GoTrue adapter.
#[derive(Debug, Clone)]
pub struct GoTrueConfig {
    /// Issuer URL; the JWKS is discovered at
    /// `{issuer_url}/.well-known/jwks.json` and the `iss` claim must match.
    pub issuer_url: String,

    /// Audience the `aud` claim must contain.
    pub audience: String,

    /// How long fetched keys stay valid before a refetch.
    pub jwks_ttl: Duration,
}

impl GoTrueConfig {
    pub fn new(issuer_url: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            issuer_url: issuer_url.into(),
            audience: audience.into(),
            jwks_ttl: DEFAULT_JWKS_TTL,
        }
    }

    /// Overrides the JWKS cache TTL.
    pub fn with_cache_duration(mut self, ttl: Duration) -> Self {
        self.jwks_ttl = ttl;
        self
    }

    fn jwks_url(&self) -> String {
        format!(
            "{}/.well-known/jwks.json",
            self.issuer_url.trim_end_matches('/')
        )
    }
}

/// The claims this service reads out of a GoTrue access token.
///
/// `iss`, `aud`, and `exp` are enforced by the decode step itself, so only
/// identity fields appear here.
#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    sub: String,

    #[serde(default)]
    email: Option<String>,

    /// Free-form metadata; the display name lives here when set.
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    full_name: Option<String>,
}

impl UserMetadata {
    fn display_name(self) -> Option<String> {
        self.name.or(self.full_name)
    }
}

struct CachedKeys {
    keys: JwkSet,
    expires_at: Instant,
}

/// GoTrue session validator.
///
/// Keys are fetched lazily on first validation and cached until the
/// configured TTL elapses, so startup never blocks on the auth service.
pub struct GoTrueSessionValidator {
    config: GoTrueConfig,
    http: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
}

impl GoTrueSessionValidator {
    pub fn new(config: GoTrueConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http,
            cache: RwLock::new(None),
        }
    }

    async fn current_keys(&self) -> Result<JwkSet, AuthError> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            if cached.expires_at > Instant::now() {
                return Ok(cached.keys.clone());
            }
        }

        let keys = self.refetch_keys().await?;

        *self.cache.write().await = Some(CachedKeys {
            keys: keys.clone(),
            expires_at: Instant::now() + self.config.jwks_ttl,
        });

        Ok(keys)
    }

    async fn refetch_keys(&self) -> Result<JwkSet, AuthError> {
        let url = self.config.jwks_url();
        tracing::debug!("Refreshing JWKS from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                tracing::error!("JWKS fetch failed: {}", e);
                AuthError::service_unavailable(format!("JWKS fetch failed: {}", e))
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            tracing::error!("JWKS response was not a key set: {}", e);
            AuthError::service_unavailable(format!("Malformed JWKS: {}", e))
        })
    }

    /// Picks the signing key for a token.
    ///
    /// Matches on the `kid` header when present; a GoTrue project usually
    /// publishes a single key, so a token without `kid` falls back to that
    /// one key rather than being rejected.
    fn select_key<'a>(&self, kid: Option<&str>, keys: &'a JwkSet) -> Result<&'a Jwk, AuthError> {
        match kid {
            Some(kid) => keys.find(kid).ok_or_else(|| {
                tracing::warn!("No JWKS entry for kid '{}'", kid);
                AuthError::InvalidToken
            }),
            None if keys.keys.len() == 1 => Ok(&keys.keys[0]),
            None => {
                tracing::warn!("Token has no kid and JWKS has {} keys", keys.keys.len());
                Err(AuthError::InvalidToken)
            }
        }
    }

    fn decode_claims(&self, token: &str, jwk: &Jwk) -> Result<AccessTokenClaims, AuthError> {
        let algorithm = signing_algorithm(jwk)?;

        let key = DecodingKey::from_jwk(jwk).map_err(|e| {
            tracing::warn!("Unusable JWKS entry: {}", e);
            AuthError::InvalidToken
        })?;

        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[&self.config.issuer_url]);
        validation.set_audience(&[&self.config.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);

        decode::<AccessTokenClaims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Rejected expired token");
                        AuthError::TokenExpired
                    }
                    kind => {
                        tracing::warn!("Token validation failed: {:?}", kind);
                        AuthError::InvalidToken
                    }
                }
            })
    }
}

fn signing_algorithm(jwk: &Jwk) -> Result<Algorithm, AuthError> {
    match jwk.common.key_algorithm {
        Some(KeyAlgorithm::RS256) | None => Ok(Algorithm::RS256),
        Some(KeyAlgorithm::RS384) => Ok(Algorithm::RS384),
        Some(KeyAlgorithm::RS512) => Ok(Algorithm::RS512),
        Some(KeyAlgorithm::ES256) => Ok(Algorithm::ES256),
        Some(KeyAlgorithm::ES384) => Ok(Algorithm::ES384),
        Some(KeyAlgorithm::HS256) => Ok(Algorithm::HS256),
        Some(other) => {
            tracing::warn!("JWKS entry uses unsupported algorithm {:?}", other);
            Err(AuthError::InvalidToken)
        }
    }
}

#[async_trait]
impl SessionValidator for GoTrueSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!("Unparseable token header: {}", e);
            AuthError::InvalidToken
        })?;

        let keys = self.current_keys().await?;
        let jwk = self.select_key(header.kid.as_deref(), &keys)?;
        let claims = self.decode_claims(token, jwk)?;

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Token carries an empty subject");
            AuthError::InvalidToken
        })?;

        let email = claims.email.ok_or_else(|| {
            tracing::warn!("Token for '{}' has no email claim", user_id);
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(
            user_id,
            email,
            claims.user_metadata.display_name(),
        ))
    }
}
