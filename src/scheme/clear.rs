//! Exact, noise-free reference scheme.
//!
//! Slots are stored in the clear and every homomorphic operation is plain
//! arithmetic mod t, which makes it a faithful oracle for the pipeline. It
//! offers no confidentiality whatsoever.

use super::{
    ciphertext::Ciphertext,
    key::{EvalKey, PublicKey, SecretKey},
    params::SchemeParams,
    BatchScheme, KeySet, SchemeKeys,
};
use crate::{math::prime::is_prime, math::Polynomial, slots::SlotVector};
use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClearSchemeError {
    #[error("plaintext modulus {0} is not prime")]
    NonPrimeModulus(u64),
    #[error("batch capacity must be positive")]
    ZeroCapacity,
    #[error("expected {expected} slots, got {actual}")]
    SlotCount { expected: usize, actual: usize },
    #[error("slot value {value} is not below the plaintext modulus {modulus}")]
    SlotOutOfRange { value: u64, modulus: u64 },
    #[error("polynomial is over Z_{found}, scheme works over Z_{expected}")]
    ModulusMismatch { expected: u64, found: u64 },
    #[error("key {found:#x} does not belong to ciphertext key set {expected:#x}")]
    KeyMismatch { expected: u64, found: u64 },
}

#[derive(Debug, Clone)]
pub struct ClearScheme {
    params: SchemeParams,
}

impl ClearScheme {
    pub fn new(params: SchemeParams) -> Result<Self, ClearSchemeError> {
        if !is_prime(params.plaintext_modulus) {
            return Err(ClearSchemeError::NonPrimeModulus(params.plaintext_modulus));
        }
        if params.batch_capacity == 0 {
            return Err(ClearSchemeError::ZeroCapacity);
        }
        Ok(Self { params })
    }

    fn check_key(expected: u64, found: u64) -> Result<(), ClearSchemeError> {
        if expected != found {
            return Err(ClearSchemeError::KeyMismatch { expected, found });
        }
        Ok(())
    }
}

impl BatchScheme for ClearScheme {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type EvalKey = EvalKey;
    type Ciphertext = Ciphertext;
    type Error = ClearSchemeError;

    fn plaintext_modulus(&self) -> u64 {
        self.params.plaintext_modulus
    }

    fn batch_capacity(&self) -> usize {
        self.params.batch_capacity
    }

    fn key_gen(&self) -> Result<SchemeKeys<Self>, Self::Error> {
        let id = rand::thread_rng().gen::<u64>();
        Ok(KeySet {
            public: PublicKey { id },
            secret: SecretKey { id },
            eval: EvalKey { id },
        })
    }

    fn encrypt_batch(
        &self,
        slots: &SlotVector,
        pk: &Self::PublicKey,
    ) -> Result<Self::Ciphertext, Self::Error> {
        let expected = self.params.batch_capacity;
        if slots.len() != expected {
            return Err(ClearSchemeError::SlotCount {
                expected,
                actual: slots.len(),
            });
        }
        let modulus = self.params.plaintext_modulus;
        if let Some(&value) = slots.as_slice().iter().find(|&&v| v >= modulus) {
            return Err(ClearSchemeError::SlotOutOfRange { value, modulus });
        }

        Ok(Ciphertext {
            slots: slots.as_slice().to_vec(),
            key_id: pk.id,
        })
    }

    fn evaluate_polynomial(
        &self,
        ciphertext: &Self::Ciphertext,
        poly: &Polynomial,
        ek: &Self::EvalKey,
    ) -> Result<Self::Ciphertext, Self::Error> {
        Self::check_key(ciphertext.key_id, ek.id)?;
        let found = poly.field().modulus();
        if found != self.params.plaintext_modulus {
            return Err(ClearSchemeError::ModulusMismatch {
                expected: self.params.plaintext_modulus,
                found,
            });
        }

        let slots = ciphertext
            .slots
            .par_iter()
            .map(|&x| poly.evaluate(x))
            .collect();
        debug!(degree = ?poly.degree(), "evaluated polynomial on all slots");

        Ok(Ciphertext {
            slots,
            key_id: ciphertext.key_id,
        })
    }

    fn decrypt_batch(
        &self,
        ciphertext: &Self::Ciphertext,
        sk: &Self::SecretKey,
    ) -> Result<SlotVector, Self::Error> {
        Self::check_key(ciphertext.key_id, sk.id)?;
        Ok(SlotVector(ciphertext.slots.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encoder::encode, scheme::DEMO_PARAMS};

    fn scheme() -> ClearScheme {
        ClearScheme::new(SchemeParams::new(17, 8)).unwrap()
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            ClearScheme::new(SchemeParams::new(256, 8)).unwrap_err(),
            ClearSchemeError::NonPrimeModulus(256)
        );
        assert_eq!(
            ClearScheme::new(SchemeParams::new(17, 0)).unwrap_err(),
            ClearSchemeError::ZeroCapacity
        );
        let demo = ClearScheme::new(DEMO_PARAMS).unwrap();
        assert_eq!(demo.batch_capacity(), 1075);
        assert_eq!(demo.plaintext_modulus(), 257);
    }

    #[test]
    fn test_encrypt_evaluate_decrypt() {
        let scheme = scheme();
        let keys = scheme.key_gen().unwrap();
        let slots = SlotVector((0..8).collect());

        let ct = scheme.encrypt_batch(&slots, &keys.public).unwrap();
        assert_eq!(ct.slot_count(), 8);

        let square = encode(&|x: u64| x * x % 17, 17).unwrap();
        let ct = scheme.evaluate_polynomial(&ct, &square, &keys.eval).unwrap();
        let out = scheme.decrypt_batch(&ct, &keys.secret).unwrap();
        assert_eq!(out.0, vec![0, 1, 4, 9, 16, 8, 2, 15]);
    }

    #[test]
    fn test_encrypt_rejects_bad_slots() {
        let scheme = scheme();
        let keys = scheme.key_gen().unwrap();
        assert_eq!(
            scheme
                .encrypt_batch(&SlotVector(vec![0; 7]), &keys.public)
                .unwrap_err(),
            ClearSchemeError::SlotCount { expected: 8, actual: 7 }
        );
        assert_eq!(
            scheme
                .encrypt_batch(&SlotVector(vec![0, 0, 0, 17, 0, 0, 0, 0]), &keys.public)
                .unwrap_err(),
            ClearSchemeError::SlotOutOfRange { value: 17, modulus: 17 }
        );
    }

    #[test]
    fn test_foreign_keys_rejected() {
        let scheme = scheme();
        let keys = scheme.key_gen().unwrap();
        let mut other = scheme.key_gen().unwrap();
        while other.secret.id == keys.secret.id {
            other = scheme.key_gen().unwrap();
        }

        let ct = scheme
            .encrypt_batch(&SlotVector(vec![1; 8]), &keys.public)
            .unwrap();
        assert!(matches!(
            scheme.decrypt_batch(&ct, &other.secret),
            Err(ClearSchemeError::KeyMismatch { .. })
        ));

        let identity = encode(&|x: u64| x, 17).unwrap();
        assert!(matches!(
            scheme.evaluate_polynomial(&ct, &identity, &other.eval),
            Err(ClearSchemeError::KeyMismatch { .. })
        ));
    }

    #[test]
    fn test_modulus_mismatch() {
        let scheme = scheme();
        let keys = scheme.key_gen().unwrap();
        let ct = scheme
            .encrypt_batch(&SlotVector(vec![1; 8]), &keys.public)
            .unwrap();
        let poly = encode(&|x: u64| x, 13).unwrap();
        assert_eq!(
            scheme.evaluate_polynomial(&ct, &poly, &keys.eval).unwrap_err(),
            ClearSchemeError::ModulusMismatch { expected: 17, found: 13 }
        );
    }
}
