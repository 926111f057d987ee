use anyhow::Context;
use argon2::{password_hash::{rand_core::OsRng, SaltString}, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use secrecy::{ExposeSecret, SecretString};

use crate::telemetry::spawn_blocking_with_tracing;

// Function to compute password hash
pub fn compute_password_hash(password: SecretString) -> Result<SecretString, anyhow::Error>{
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
                            .hash_password(password.expose_secret().as_bytes(), &salt)
                            .map_err(|_| anyhow::anyhow!("Failed to compute password hash"))?
                            .to_string();

    Ok(SecretString::from(password_hash))
}

// Hashing is CPU heavy, keep it off the async workers
pub async fn hash_password(password: SecretString) -> Result<SecretString, anyhow::Error>{
    spawn_blocking_with_tracing(move || compute_password_hash(password))
        .await
        .context("Failed due to threadpool error")?
}

// Function to verify if password matches hash
pub fn verify_password_hash(password: &SecretString, hashed_password: &str) -> Result<bool, anyhow::Error>{
    let hashed_password = PasswordHash::new(hashed_password)
                .map_err(|_| anyhow::anyhow!("Failed to parse PasswordHash \
                        from stored hashed password"))?;

    Ok(Argon2::default()
        .verify_password(password.expose_secret().as_bytes(), &hashed_password)
        .is_ok())
}

pub async fn verify_password(password: SecretString, hashed_password: String) -> Result<bool, anyhow::Error>{
    spawn_blocking_with_tracing(move || verify_password_hash(&password, &hashed_password))
        .await
        .context("Failed due to threadpool error")?
}
