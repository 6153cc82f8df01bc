//! Proof that two public keys on different generators share one secret.
//!
//! The statement: the prover knows `x` such that `K = x * g` and `L = x * h0`. A single
//! commitment scalar and a single response are shared across both relations, which is
//! what proves the *same* secret underlies both points; two independent proofs of
//! knowledge would not.

use crate::{
    common::*,
    keys::{DoubleKeyPair, PublicKey},
    parameters::Params,
    proofs::{Challenge, ChallengeBuilder},
    serde::SerializeElement,
};
use ff::Field;
use serde::{Deserialize, Serialize};

/// Fully constructed proof that two public keys share one discrete log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EqualityProof {
    /// The challenge derived from the statement and both of the prover's commitments.
    challenge: Challenge,
    /// The response scalar shared by both relations.
    #[serde(with = "SerializeElement")]
    response_scalar: Scalar,
}

impl EqualityProof {
    /// Prove that `keys` binds one secret under both `g` and `h0`.
    pub fn prove(rng: &mut impl Rng, params: &Params, keys: &DoubleKeyPair) -> Self {
        let commitment_scalar = Scalar::random(&mut *rng);
        let base_commitment = params.g() * commitment_scalar;
        let auxiliary_commitment = params.hs()[0] * commitment_scalar;

        let challenge = ChallengeBuilder::new()
            .with(params.g())
            .with(&params.hs()[0])
            .with(keys.base_key())
            .with(&base_commitment)
            .with(keys.auxiliary_key())
            .with(&auxiliary_commitment)
            .finish();

        let response_scalar = commitment_scalar - challenge.to_scalar() * keys.secret_key().0;
        Self {
            challenge,
            response_scalar,
        }
    }

    /// Verify that `base_key = x * g` and `auxiliary_key = x * h0` for a single secret
    /// `x` known to the prover.
    pub fn verify_equal_discrete_logs(
        &self,
        params: &Params,
        base_key: &PublicKey,
        auxiliary_key: &PublicKey,
    ) -> bool {
        let c = self.challenge.to_scalar();
        let base_commitment = params.g() * self.response_scalar + base_key.0 * c;
        let auxiliary_commitment = params.hs()[0] * self.response_scalar + auxiliary_key.0 * c;

        let expected = ChallengeBuilder::new()
            .with(params.g())
            .with(&params.hs()[0])
            .with(base_key)
            .with(&base_commitment)
            .with(auxiliary_key)
            .with(&auxiliary_commitment)
            .finish();
        expected.to_scalar() == c
    }
}
