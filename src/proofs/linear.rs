//! Proof that a commitment opens to a pair satisfying a fixed affine relation.
//!
//! The statement: `C = bf * g + x1 * h1 + x0 * h0` commits to `(x0, x1)` with
//! `x0 = 10 * x1 + 20`. The multiplier and constant are public, so the prover's first
//! move re-randomizes only the secret-dependent terms: `x0`'s slot takes `10 * w1`
//! rather than a fresh scalar, and the constant takes nothing at all. The verifier
//! cancels the constant explicitly, so the equation balances exactly when the committed
//! pair satisfies the relation.

use crate::{
    common::*,
    parameters::Params,
    pedersen::Commitment,
    proofs::{Challenge, ChallengeBuilder},
    serde::SerializeElement,
};
use ff::Field;
use serde::{Deserialize, Serialize};

/// Multiplier applied to `x1` in the relation.
const RELATION_COEFFICIENT: u64 = 10;
/// Public constant added to the multiplied term in the relation.
const RELATION_CONSTANT: u64 = 20;

/// An instance of the relation: a commitment to `(x0, x1)` with `x0 = 10 * x1 + 20`,
/// together with its opening.
#[derive(Debug, Clone, Copy)]
pub struct LinearRelation {
    commitment: Commitment,
    x0: Scalar,
    x1: Scalar,
    blinding_factor: BlindingFactor,
}

impl LinearRelation {
    /// Commit to `x1` and the induced `x0 = 10 * x1 + 20`.
    pub fn new(rng: &mut impl Rng, params: &Params, x1: u64) -> Self {
        let x1 = Scalar::from(x1);
        let x0 = Scalar::from(RELATION_COEFFICIENT) * x1 + Scalar::from(RELATION_CONSTANT);
        let blinding_factor = BlindingFactor::new(&mut *rng);
        let commitment = Message::new([x0, x1, Scalar::zero(), Scalar::zero()])
            .commit(params, blinding_factor);
        Self {
            commitment,
            x0,
            x1,
            blinding_factor,
        }
    }

    /// Get the commitment for this instance.
    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    /// Get the committed pair `(x0, x1)`.
    pub fn values(&self) -> (Scalar, Scalar) {
        (self.x0, self.x1)
    }
}

/// Fully constructed proof that a commitment opens to a pair in the relation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LinearProof {
    /// The challenge derived from the statement and the prover's scalar commitment.
    challenge: Challenge,
    /// The response scalar for the blinding factor.
    #[serde(with = "SerializeElement")]
    blinding_factor_response_scalar: Scalar,
    /// The response scalar for `x1`; the response for `x0` is implied by the relation.
    #[serde(with = "SerializeElement")]
    message_response_scalar: Scalar,
}

impl LinearProof {
    /// Prove that the commitment in `relation` opens to a pair `(x0, x1)` with
    /// `x0 = 10 * x1 + 20`.
    pub fn prove(rng: &mut impl Rng, params: &Params, relation: &LinearRelation) -> Self {
        let blinding_factor_commitment_scalar = Scalar::random(&mut *rng);
        let message_commitment_scalar = Scalar::random(&mut *rng);

        let scalar_commitment = params.g() * blinding_factor_commitment_scalar
            + params.hs()[1] * message_commitment_scalar
            + params.hs()[0] * (Scalar::from(RELATION_COEFFICIENT) * message_commitment_scalar);

        let challenge = ChallengeBuilder::new()
            .with(params.g())
            .with(&params.hs()[0])
            .with(&params.hs()[1])
            .with(&relation.commitment)
            .with(&scalar_commitment)
            .finish();

        let c = challenge.to_scalar();
        Self {
            challenge,
            blinding_factor_response_scalar: blinding_factor_commitment_scalar
                - c * relation.blinding_factor.as_scalar(),
            message_response_scalar: message_commitment_scalar - c * relation.x1,
        }
    }

    /// Verify that `commitment` commits to a pair `(x0, x1)` with `x0 = 10 * x1 + 20`.
    pub fn verify_linear_relation(&self, params: &Params, commitment: &Commitment) -> bool {
        let c = self.challenge.to_scalar();
        // The `10 * r1` term mirrors the prover's first move; the `-20 * c` term cancels
        // the public constant carried inside the commitment.
        let scalar_commitment = commitment.to_element() * c
            + params.g() * self.blinding_factor_response_scalar
            + params.hs()[1] * self.message_response_scalar
            + params.hs()[0]
                * (Scalar::from(RELATION_COEFFICIENT) * self.message_response_scalar
                    - Scalar::from(RELATION_CONSTANT) * c);

        let expected = ChallengeBuilder::new()
            .with(params.g())
            .with(&params.hs()[0])
            .with(&params.hs()[1])
            .with(commitment)
            .with(&scalar_commitment)
            .finish();
        expected.to_scalar() == c
    }
}
