/*
[INPUT]:  Entered secret text and optional stored-secret backends
[OUTPUT]: The secret the checkout pipeline should derive keys from
[POS]:    Keys layer - secret source abstraction
[UPDATE]: When adding new secret storage backends
*/

use async_trait::async_trait;

use super::mnemonic::Secret;

/// Trait for stored-secret backends.
///
/// Implement this for wherever the host keeps account secrets (browser
/// storage bridge, OS keychain, config file). The trait is async to
/// support backends that need I/O or user interaction.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Return the stored account secret, if the backend holds one
    async fn secret(&self) -> Option<Secret>;
}

/// Provider backed by a fixed secret, for tests and simple hosts
#[derive(Clone)]
pub struct StaticSecretProvider {
    secret: Secret,
}

impl StaticSecretProvider {
    pub fn new(secret: Secret) -> Self {
        Self { secret }
    }
}

#[async_trait]
impl SecretProvider for StaticSecretProvider {
    async fn secret(&self) -> Option<Secret> {
        Some(self.secret.clone())
    }
}

/// Pick the secret the pipeline should use.
///
/// Entered text always wins over a stored secret; an empty result is
/// returned when neither source has one, and fails validation downstream.
pub async fn resolve_secret(entered: &str, provider: Option<&dyn SecretProvider>) -> Secret {
    if !entered.is_empty() {
        return Secret::new(entered);
    }
    if let Some(provider) = provider {
        if let Some(secret) = provider.secret().await {
            return secret;
        }
    }
    Secret::new("")
}
