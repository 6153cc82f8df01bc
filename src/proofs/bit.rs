//! Proof that a ciphertext encrypts a bit, without revealing which one.
//!
//! The statement is a disjunction of two encryption relations: `(a, b)` encrypts 0 iff
//! `a = k * g` and `b = k * pub`, and encrypts 1 iff `a = k * g` and `b - h0 = k * pub`.
//! The prover runs the honest protocol for the true branch and simulates the other from
//! a freely chosen sub-challenge and response; the two sub-challenges must sum to the
//! transcript challenge, so exactly one branch is forced to be honest while the verifier
//! cannot tell which.

use crate::{
    common::*,
    elgamal::{Ciphertext, EncryptionRandomness},
    keys::PublicKey,
    parameters::Params,
    proofs::ChallengeBuilder,
    serde::SerializeElement,
};
use ff::Field;
use serde::{Deserialize, Serialize};

/// Fully constructed proof that a ciphertext encrypts 0 or 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BitProof {
    /// The sub-challenge for the `m = 0` branch.
    #[serde(with = "SerializeElement")]
    zero_challenge_scalar: Scalar,
    /// The sub-challenge for the `m = 1` branch.
    #[serde(with = "SerializeElement")]
    one_challenge_scalar: Scalar,
    /// The response scalar for the `m = 0` branch.
    #[serde(with = "SerializeElement")]
    zero_response_scalar: Scalar,
    /// The response scalar for the `m = 1` branch.
    #[serde(with = "SerializeElement")]
    one_response_scalar: Scalar,
}

impl BitProof {
    /// Prove that `ciphertext` encrypts the bit it was formed from.
    ///
    /// The caller must pass the randomness and bit that formed `ciphertext`; a
    /// mismatched witness produces a proof that will not verify.
    pub fn prove(
        rng: &mut impl Rng,
        params: &Params,
        public_key: &PublicKey,
        ciphertext: &Ciphertext,
        randomness: &EncryptionRandomness,
        bit: bool,
    ) -> Self {
        let commitment_scalar = Scalar::random(&mut *rng);
        let simulated_challenge = Scalar::random(&mut *rng);
        let simulated_response = Scalar::random(&mut *rng);

        // Branch targets: the `m = 1` branch argues about `b - h0` instead of `b`.
        let zero_target = *ciphertext.b();
        let one_target = ciphertext.b() - params.hs()[0];

        // Honest first move for the real branch; the other branch's first move is
        // reconstructed from its chosen sub-challenge and response, exactly as the
        // verifier will reconstruct it.
        let real_a = params.g() * commitment_scalar;
        let real_b = public_key.0 * commitment_scalar;
        let simulated_target = if bit { zero_target } else { one_target };
        let simulated_a = params.g() * simulated_response + ciphertext.a() * simulated_challenge;
        let simulated_b =
            public_key.0 * simulated_response + simulated_target * simulated_challenge;

        let (zero_a, zero_b, one_a, one_b) = if bit {
            (simulated_a, simulated_b, real_a, real_b)
        } else {
            (real_a, real_b, simulated_a, simulated_b)
        };

        let challenge = ChallengeBuilder::new()
            .with(params.g())
            .with(&params.hs()[0])
            .with(public_key)
            .with(ciphertext)
            .with(&zero_a)
            .with(&zero_b)
            .with(&one_a)
            .with(&one_b)
            .finish();

        let real_challenge = challenge.to_scalar() - simulated_challenge;
        let real_response = commitment_scalar - real_challenge * randomness.0;

        if bit {
            Self {
                zero_challenge_scalar: simulated_challenge,
                one_challenge_scalar: real_challenge,
                zero_response_scalar: simulated_response,
                one_response_scalar: real_response,
            }
        } else {
            Self {
                zero_challenge_scalar: real_challenge,
                one_challenge_scalar: simulated_challenge,
                zero_response_scalar: real_response,
                one_response_scalar: simulated_response,
            }
        }
    }

    /// Verify that `ciphertext` encrypts either 0 or 1 under `public_key`.
    pub fn verify_bit(
        &self,
        params: &Params,
        public_key: &PublicKey,
        ciphertext: &Ciphertext,
    ) -> bool {
        let zero_a =
            params.g() * self.zero_response_scalar + ciphertext.a() * self.zero_challenge_scalar;
        let zero_b =
            public_key.0 * self.zero_response_scalar + ciphertext.b() * self.zero_challenge_scalar;
        let one_a =
            params.g() * self.one_response_scalar + ciphertext.a() * self.one_challenge_scalar;
        let one_b = public_key.0 * self.one_response_scalar
            + (ciphertext.b() - params.hs()[0]) * self.one_challenge_scalar;

        let challenge = ChallengeBuilder::new()
            .with(params.g())
            .with(&params.hs()[0])
            .with(public_key)
            .with(ciphertext)
            .with(&zero_a)
            .with(&zero_b)
            .with(&one_a)
            .with(&one_b)
            .finish();
        challenge.to_scalar() == self.zero_challenge_scalar + self.one_challenge_scalar
    }
}
