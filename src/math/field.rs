use super::prime::{is_prime, modpow, mulmod};
use crate::error::{Error, Result};

/// The plaintext field Z_t for a prime t chosen at runtime.
///
/// Elements are plain `u64` values kept in canonical form `[0, t)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Fails with `NonPrimeModulus` unless `p` is prime.
    pub fn new(p: u64) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NonPrimeModulus(p));
        }
        Ok(Self { p })
    }

    pub fn modulus(&self) -> u64 {
        self.p
    }

    /// Number of field elements.
    pub fn order(&self) -> usize {
        self.p as usize
    }

    /// Checks that `a` is already a canonical element.
    pub fn element(&self, a: u64) -> Result<u64> {
        if a >= self.p {
            return Err(Error::OutOfRange {
                value: a,
                bound: self.p,
            });
        }
        Ok(a)
    }

    pub fn reduce(&self, a: u64) -> u64 {
        a % self.p
    }

    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.p as u128) as u64
    }

    pub fn neg(&self, a: u64) -> u64 {
        let a = a % self.p;
        if a == 0 {
            return 0;
        }
        self.p - a
    }

    pub fn sub(&self, a: u64, b: u64) -> u64 {
        self.add(a, self.neg(b))
    }

    pub fn mul(&self, a: u64, b: u64) -> u64 {
        mulmod(a, b, self.p)
    }

    pub fn pow(&self, a: u64, n: u64) -> u64 {
        modpow(a, n, self.p)
    }

    /// Fermat inverse, `None` for zero.
    pub fn inv(&self, a: u64) -> Option<u64> {
        let a = a % self.p;
        if a == 0 {
            return None;
        }
        Some(modpow(a, self.p - 2, self.p))
    }

    /// Iterates over every element of the field in increasing order.
    pub fn elements(&self) -> std::ops::Range<u64> {
        0..self.p
    }
}
