//! Proof of correct encryption with a known plaintext.
//!
//! The statement: the prover knows `(k, m)` such that `(a, b) = (k * g, k * pub + m * h0)`.
//! Both ciphertext components are re-randomized in the first move — `a` with a fresh
//! scalar for `k`, `b` with that same scalar and another for `m` — so one challenge binds
//! the two components to a consistent pair of secrets.

use crate::{
    common::*,
    elgamal::{Ciphertext, EncryptionRandomness},
    keys::PublicKey,
    parameters::Params,
    proofs::{Challenge, ChallengeBuilder},
    serde::SerializeElement,
};
use ff::Field;
use serde::{Deserialize, Serialize};

/// Fully constructed proof that a ciphertext is well-formed with a known plaintext.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EncryptionProof {
    /// The challenge derived from the statement and both of the prover's commitments.
    challenge: Challenge,
    /// The response scalar for the encryption randomness.
    #[serde(with = "SerializeElement")]
    randomness_response_scalar: Scalar,
    /// The response scalar for the plaintext.
    #[serde(with = "SerializeElement")]
    plaintext_response_scalar: Scalar,
}

impl EncryptionProof {
    /// Prove that `ciphertext` encrypts the plaintext `m` under `public_key`.
    ///
    /// The caller must pass the randomness and plaintext that formed `ciphertext`; a
    /// mismatched witness produces a proof that will not verify.
    pub fn prove(
        rng: &mut impl Rng,
        params: &Params,
        public_key: &PublicKey,
        ciphertext: &Ciphertext,
        randomness: &EncryptionRandomness,
        m: u64,
    ) -> Self {
        let randomness_commitment_scalar = Scalar::random(&mut *rng);
        let plaintext_commitment_scalar = Scalar::random(&mut *rng);
        let a_commitment = params.g() * randomness_commitment_scalar;
        let b_commitment = public_key.0 * randomness_commitment_scalar
            + params.hs()[0] * plaintext_commitment_scalar;

        let challenge = ChallengeBuilder::new()
            .with(params.g())
            .with(&params.hs()[0])
            .with(public_key)
            .with(ciphertext.a())
            .with(&a_commitment)
            .with(ciphertext.b())
            .with(&b_commitment)
            .finish();

        let c = challenge.to_scalar();
        Self {
            challenge,
            randomness_response_scalar: randomness_commitment_scalar - c * randomness.0,
            plaintext_response_scalar: plaintext_commitment_scalar - c * Scalar::from(m),
        }
    }

    /// Verify that `ciphertext` is a well-formed encryption of a plaintext known to the
    /// prover under `public_key`.
    pub fn verify_correct_encryption(
        &self,
        params: &Params,
        public_key: &PublicKey,
        ciphertext: &Ciphertext,
    ) -> bool {
        let c = self.challenge.to_scalar();
        let a_commitment = params.g() * self.randomness_response_scalar + ciphertext.a() * c;
        let b_commitment = public_key.0 * self.randomness_response_scalar
            + ciphertext.b() * c
            + params.hs()[0] * self.plaintext_response_scalar;

        let expected = ChallengeBuilder::new()
            .with(params.g())
            .with(&params.hs()[0])
            .with(public_key)
            .with(ciphertext.a())
            .with(&a_commitment)
            .with(ciphertext.b())
            .with(&b_commitment)
            .finish();
        expected.to_scalar() == c
    }
}
