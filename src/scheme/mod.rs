//! Boundary to the batched homomorphic scheme.
//!
//! The pipeline only needs batch encryption, polynomial evaluation and batch
//! decryption over a prime plaintext modulus; everything else stays behind
//! [`BatchScheme`].

use crate::{math::Polynomial, slots::SlotVector};
use std::fmt;

pub mod ciphertext;
pub mod clear;
pub mod key;
pub mod params;

pub use self::{
    clear::{ClearScheme, ClearSchemeError},
    params::{SchemeParams, DEMO_PARAMS},
};

/// Which call into the scheme failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeStage {
    KeyGeneration,
    Encryption,
    Evaluation,
    Decryption,
}

impl fmt::Display for SchemeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemeStage::KeyGeneration => "key generation",
            SchemeStage::Encryption => "encryption",
            SchemeStage::Evaluation => "evaluation",
            SchemeStage::Decryption => "decryption",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct KeySet<P, S, E> {
    pub public: P,
    pub secret: S,
    pub eval: E,
}

/// Keys produced by `S::key_gen`.
pub type SchemeKeys<S> = KeySet<
    <S as BatchScheme>::PublicKey,
    <S as BatchScheme>::SecretKey,
    <S as BatchScheme>::EvalKey,
>;

pub trait BatchScheme {
    type PublicKey;
    type SecretKey;
    type EvalKey;
    type Ciphertext;
    type Error: std::error::Error + Send + Sync + 'static;

    /// The prime t of the plaintext field.
    fn plaintext_modulus(&self) -> u64;

    /// Independent plaintext slots carried by one ciphertext.
    fn batch_capacity(&self) -> usize;

    fn key_gen(&self) -> Result<SchemeKeys<Self>, Self::Error>
    where
        Self: Sized;

    fn encrypt_batch(
        &self,
        slots: &SlotVector,
        pk: &Self::PublicKey,
    ) -> Result<Self::Ciphertext, Self::Error>;

    /// Applies `poly` slot-wise under encryption.
    fn evaluate_polynomial(
        &self,
        ciphertext: &Self::Ciphertext,
        poly: &Polynomial,
        ek: &Self::EvalKey,
    ) -> Result<Self::Ciphertext, Self::Error>;

    fn decrypt_batch(
        &self,
        ciphertext: &Self::Ciphertext,
        sk: &Self::SecretKey,
    ) -> Result<SlotVector, Self::Error>;
}
