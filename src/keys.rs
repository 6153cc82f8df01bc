//! Keys for discrete-log statements over the shared parameters.
//!
//! A [`KeyPair`] holds a secret scalar and its public point under the primary generator.
//! A [`DoubleKeyPair`] binds one secret to public points under both the primary generator
//! and the first auxiliary generator; it is the statement instance for the discrete log
//! equality proof.

use crate::{
    common::*,
    parameters::Params,
    proofs::{ChallengeBuilder, ChallengeInput},
    serde::SerializeElement,
};
use serde::{Deserialize, Serialize};

/// A secret key: a scalar sampled uniformly from [1, order).
///
/// Must be kept secret by the prover; it never appears in a proof or a transcript.
#[derive(Debug, Clone, Copy)]
pub struct SecretKey(pub(crate) Scalar);

/// A public point of the form `x * P` for a secret scalar `x` and a fixed generator `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey(#[serde(with = "SerializeElement")] pub(crate) G1Projective);

impl PublicKey {
    /// Get the inner group element representing the public key.
    pub fn to_element(self) -> G1Projective {
        self.0
    }
}

impl ChallengeInput for PublicKey {
    fn consume(&self, builder: &mut ChallengeBuilder) {
        builder.consume(&self.0);
    }
}

/// A keypair: a secret scalar `x` with its public point `x * g`.
#[derive(Debug, Clone, Copy)]
pub struct KeyPair {
    sk: SecretKey,
    pk: PublicKey,
}

impl KeyPair {
    /// Generate a new random keypair against the primary generator.
    pub fn new(rng: &mut impl Rng, params: &Params) -> Self {
        let x = random_nonzero_scalar(&mut *rng);
        KeyPair {
            sk: SecretKey(x),
            pk: PublicKey(params.g() * x),
        }
    }

    /// Get the public portion of the keypair.
    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    /// Get the secret portion of the keypair.
    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.sk
    }
}

/// A pair of public keys bound to one secret: `K = x * g` under the primary generator and
/// `L = x * h0` under the first auxiliary generator.
#[derive(Debug, Clone, Copy)]
pub struct DoubleKeyPair {
    sk: SecretKey,
    base_key: PublicKey,
    auxiliary_key: PublicKey,
}

impl DoubleKeyPair {
    /// Generate a fresh secret and its public points under `g` and `h0`.
    pub fn new(rng: &mut impl Rng, params: &Params) -> Self {
        let x = random_nonzero_scalar(&mut *rng);
        DoubleKeyPair {
            sk: SecretKey(x),
            base_key: PublicKey(params.g() * x),
            auxiliary_key: PublicKey(params.hs()[0] * x),
        }
    }

    /// Get the public key under the primary generator.
    pub fn base_key(&self) -> &PublicKey {
        &self.base_key
    }

    /// Get the public key under the first auxiliary generator.
    pub fn auxiliary_key(&self) -> &PublicKey {
        &self.auxiliary_key
    }

    /// Get the shared secret scalar.
    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.sk
    }
}
