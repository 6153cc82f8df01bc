//! Proof of knowledge of a secret key, after Schnorr's identification protocol.
//!
//! The statement: the prover knows `x` such that `pub = x * g`. The prover commits to a
//! fresh scalar `w` as `W = w * g`, derives the challenge from `[g, pub, W]`, and
//! responds with `r = w - c * x`. The verifier reassembles `W' = c * pub + r * g`, which
//! equals `W` exactly when the response was formed with the secret behind `pub`.

use crate::{
    common::*,
    keys::{KeyPair, PublicKey},
    parameters::Params,
    proofs::{Challenge, ChallengeBuilder},
    serde::SerializeElement,
};
use ff::Field;
use serde::{Deserialize, Serialize};

/// Fully constructed proof of knowledge of a secret key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeyProof {
    /// The challenge derived from the statement and the prover's commitment.
    challenge: Challenge,
    /// The response scalar for the secret key.
    #[serde(with = "SerializeElement")]
    response_scalar: Scalar,
}

impl KeyProof {
    /// Prove knowledge of the secret key in `key_pair`.
    pub fn prove(rng: &mut impl Rng, params: &Params, key_pair: &KeyPair) -> Self {
        let commitment_scalar = Scalar::random(&mut *rng);
        let scalar_commitment = params.g() * commitment_scalar;

        let challenge = ChallengeBuilder::new()
            .with(params.g())
            .with(key_pair.public_key())
            .with(&scalar_commitment)
            .finish();

        let response_scalar = commitment_scalar - challenge.to_scalar() * key_pair.secret_key().0;
        Self {
            challenge,
            response_scalar,
        }
    }

    /// Verify knowledge of the secret key underlying `public_key`.
    pub fn verify_knowledge_of_key(&self, params: &Params, public_key: &PublicKey) -> bool {
        let scalar_commitment =
            public_key.0 * self.challenge.to_scalar() + params.g() * self.response_scalar;

        let expected = ChallengeBuilder::new()
            .with(params.g())
            .with(public_key)
            .with(&scalar_commitment)
            .finish();
        expected.to_scalar() == self.challenge.to_scalar()
    }
}
