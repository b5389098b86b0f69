// /auth-portal/services/portal-service/src/db/security_service.rs

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use super::DatabaseError;

/// Layanan keamanan untuk handling password
#[derive(Clone)]
pub struct SecurityService {
    argon2: Argon2<'static>,
    pepper: Vec<u8>,
}

impl SecurityService {
    pub fn new(pepper: &[u8]) -> Self {
        Self {
            argon2: Argon2::default(),
            pepper: pepper.to_vec(),
        }
    }

    fn peppered(&self, password: &str) -> Vec<u8> {
        let mut input = Vec::with_capacity(password.len() + self.pepper.len());
        input.extend_from_slice(password.as_bytes());
        input.extend_from_slice(&self.pepper);
        input
    }

    /// Hash password dengan salt acak, output dalam format PHC string
    pub fn hash_password(&self, password: &str) -> Result<String, DatabaseError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self.argon2
            .hash_password(&self.peppered(password), &salt)
            .map_err(|_| DatabaseError::Hashing)?;

        Ok(password_hash.to_string())
    }

    /// A stored hash that does not parse never verifies
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        self.argon2
            .verify_password(&self.peppered(password), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let security = SecurityService::new(b"");
        let hash = security.hash_password("wonderland").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(!hash.contains("wonderland"));
        assert!(security.verify_password("wonderland", &hash));
        assert!(!security.verify_password("looking-glass", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let security = SecurityService::new(b"");
        let first = security.hash_password("wonderland").unwrap();
        let second = security.hash_password("wonderland").unwrap();

        assert_ne!(first, second);
        assert!(security.verify_password("wonderland", &first));
        assert!(security.verify_password("wonderland", &second));
    }

    #[test]
    fn test_pepper_is_part_of_the_hash() {
        let peppered = SecurityService::new(b"pepper");
        let plain = SecurityService::new(b"");
        let hash = peppered.hash_password("wonderland").unwrap();

        assert!(peppered.verify_password("wonderland", &hash));
        assert!(!plain.verify_password("wonderland", &hash));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let security = SecurityService::new(b"");
        assert!(!security.verify_password("wonderland", "plaintext"));
        assert!(!security.verify_password("wonderland", ""));
    }
}
