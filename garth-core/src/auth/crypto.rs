use argon2::{
    Algorithm, Argon2, Params, ParamsBuilder, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier,
        SaltString,
    },
};
use rand::{TryRngCore, rngs::OsRng};
use thiserror::Error;
use zeroize::Zeroizing;

/// Argon2id password hashing with a server-side pepper.
///
/// The pepper is appended to the password before hashing so a leaked
/// database alone is not enough to brute-force staff credentials.
#[derive(Debug)]
pub struct AuthCrypto {
    argon2: Argon2<'static>,
    password_pepper: Zeroizing<Vec<u8>>,
}

#[derive(Debug, Error)]
pub enum AuthCryptoError {
    #[error("password pepper must not be empty")]
    EmptyPasswordPepper,
    #[error("invalid Argon2 parameters: {0}")]
    InvalidArgon2Params(String),
    #[error("password hashing error: {0}")]
    PasswordHash(String),
}

impl From<PasswordHashError> for AuthCryptoError {
    fn from(err: PasswordHashError) -> Self {
        AuthCryptoError::PasswordHash(err.to_string())
    }
}

impl AuthCrypto {
    const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
    const DEFAULT_ITERATIONS: u32 = 2;
    const DEFAULT_PARALLELISM: u32 = 1;
    const SALT_LENGTH: usize = argon2::password_hash::Salt::RECOMMENDED_LENGTH;

    pub fn new(password_pepper: impl AsRef<[u8]>) -> Result<Self, AuthCryptoError> {
        Self::with_params(
            password_pepper,
            ParamsBuilder::new()
                .m_cost(Self::DEFAULT_MEMORY_KIB)
                .t_cost(Self::DEFAULT_ITERATIONS)
                .p_cost(Self::DEFAULT_PARALLELISM)
                .output_len(32)
                .build()
                .map_err(|err| AuthCryptoError::InvalidArgon2Params(err.to_string()))?,
        )
    }

    /// Build a helper with caller-specified Argon2 parameters (cheap
    /// parameters keep tests fast).
    pub fn with_params(
        password_pepper: impl AsRef<[u8]>,
        params: Params,
    ) -> Result<Self, AuthCryptoError> {
        let pepper = password_pepper.as_ref();
        if pepper.is_empty() {
            return Err(AuthCryptoError::EmptyPasswordPepper);
        }

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::default(), params),
            password_pepper: Zeroizing::new(pepper.to_vec()),
        })
    }

    /// Hash `password` into a PHC string suitable for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthCryptoError> {
        let material = self.peppered(password);

        let mut salt_bytes = [0u8; Self::SALT_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|err| AuthCryptoError::PasswordHash(err.to_string()))?;
        let salt = SaltString::encode_b64(&salt_bytes)?;

        Ok(self.argon2.hash_password(&material, &salt)?.to_string())
    }

    /// Verify `password` against a stored PHC string. A malformed hash is an
    /// error, a mismatch is `Ok(false)`.
    pub fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> Result<bool, AuthCryptoError> {
        let parsed = PasswordHash::new(password_hash)?;
        let material = self.peppered(password);
        Ok(self.argon2.verify_password(&material, &parsed).is_ok())
    }

    fn peppered(&self, password: &str) -> Zeroizing<Vec<u8>> {
        let mut material = Zeroizing::new(Vec::with_capacity(
            password.len() + self.password_pepper.len(),
        ));
        material.extend_from_slice(password.as_bytes());
        material.extend_from_slice(&self.password_pepper);
        material
    }
}

#[cfg(test)]
pub(crate) fn test_crypto() -> AuthCrypto {
    let params = ParamsBuilder::new()
        .m_cost(8)
        .t_cost(1)
        .p_cost(1)
        .output_len(32)
        .build()
        .expect("valid test params");
    AuthCrypto::with_params("test-pepper", params).expect("test crypto")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let crypto = test_crypto();
        let hash = crypto.hash_password("recepcion-2024").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(crypto.verify_password("recepcion-2024", &hash).unwrap());
        assert!(!crypto.verify_password("otra-clave", &hash).unwrap());
    }

    #[test]
    fn pepper_is_part_of_the_hash() {
        let crypto = test_crypto();
        let hash = crypto.hash_password("recepcion-2024").unwrap();

        let params = ParamsBuilder::new()
            .m_cost(8)
            .t_cost(1)
            .p_cost(1)
            .output_len(32)
            .build()
            .unwrap();
        let other = AuthCrypto::with_params("other-pepper", params).unwrap();
        assert!(!other.verify_password("recepcion-2024", &hash).unwrap());
    }

    #[test]
    fn empty_pepper_is_rejected() {
        assert!(matches!(
            AuthCrypto::with_params("", Params::default()),
            Err(AuthCryptoError::EmptyPasswordPepper)
        ));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(test_crypto().verify_password("x", "not-a-phc-string").is_err());
    }
}
