//! ElGamal-style encryption in the exponent over G1.
//!
//! A plaintext `m` is encrypted under a public key as `(a, b) = (k * g, k * pub + m * h0)`
//! for fresh randomness `k`. Recovering `m` from a ciphertext requires solving a discrete
//! log on `h0`, so the scheme only suits small, known plaintexts; the proofs in
//! [`crate::proofs`] argue about a ciphertext without revealing anything beyond its
//! validity.

use crate::{
    common::*,
    keys::PublicKey,
    parameters::Params,
    proofs::{ChallengeBuilder, ChallengeInput},
    serde::SerializeElement,
};
use serde::{Deserialize, Serialize};

/// The ephemeral randomness used to form a ciphertext.
///
/// **warning:** this value must be kept secret by the encrypting party; it exists only so
/// that the encryptor can construct proofs about the ciphertext.
#[derive(Debug, Clone, Copy)]
pub struct EncryptionRandomness(pub(crate) Scalar);

/// An ElGamal-style ciphertext over G1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    #[serde(with = "SerializeElement")]
    a: G1Projective,
    #[serde(with = "SerializeElement")]
    b: G1Projective,
}

impl Ciphertext {
    /// Encrypt a small integer plaintext under the given public key.
    ///
    /// Returns the ciphertext together with the randomness used to form it.
    pub fn encrypt(
        rng: &mut impl Rng,
        params: &Params,
        public_key: &PublicKey,
        m: u64,
    ) -> (Self, EncryptionRandomness) {
        let k = random_nonzero_scalar(&mut *rng);
        let ciphertext = Ciphertext {
            a: params.g() * k,
            b: public_key.0 * k + params.hs()[0] * Scalar::from(m),
        };
        (ciphertext, EncryptionRandomness(k))
    }

    /// Encrypt a single bit under the given public key.
    pub fn encrypt_bit(
        rng: &mut impl Rng,
        params: &Params,
        public_key: &PublicKey,
        bit: bool,
    ) -> (Self, EncryptionRandomness) {
        Self::encrypt(rng, params, public_key, bit as u64)
    }

    pub(crate) fn a(&self) -> &G1Projective {
        &self.a
    }

    pub(crate) fn b(&self) -> &G1Projective {
        &self.b
    }
}

impl ChallengeInput for Ciphertext {
    fn consume(&self, builder: &mut ChallengeBuilder) {
        builder.consume(&self.a);
        builder.consume(&self.b);
    }
}
