//! Proof of knowledge of the opening of a Pedersen commitment.
//!
//! The statement: the prover knows a message `(m0..m3)` and blinding factor `bf` such
//! that `C = bf * g + sum(mi * hi)`. The prover's first move re-commits a tuple of fresh
//! commitment scalars under the same generators; the challenge is derived from the full
//! parameter set, the commitment, and that scalar commitment.

use crate::{
    common::*,
    parameters::Params,
    pedersen::Commitment,
    proofs::{Challenge, ChallengeBuilder},
    serde::SerializeElement,
};
use ff::Field;
use serde::{Deserialize, Serialize};

/// Fully constructed proof of knowledge of the opening of a commitment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommitmentProof {
    /// The challenge derived from the statement and the prover's scalar commitment.
    challenge: Challenge,
    /// The response scalars for the message tuple.
    #[serde(with = "SerializeElement")]
    message_response_scalars: [Scalar; MESSAGE_LENGTH],
    /// The response scalar for the blinding factor.
    #[serde(with = "SerializeElement")]
    blinding_factor_response_scalar: Scalar,
}

impl CommitmentProof {
    /// Prove knowledge of the message and blinding factor opening `commitment`.
    ///
    /// The caller must pass the same message and blinding factor that formed
    /// `commitment`; a mismatched witness produces a proof that will not verify.
    pub fn prove(
        rng: &mut impl Rng,
        params: &Params,
        commitment: &Commitment,
        bf: BlindingFactor,
        msg: &Message,
    ) -> Self {
        let blinding_factor_commitment_scalar = Scalar::random(&mut *rng);
        let mut message_commitment_scalars = [Scalar::zero(); MESSAGE_LENGTH];
        for w in message_commitment_scalars.iter_mut() {
            *w = Scalar::random(&mut *rng);
        }

        // Commit to the commitment scalars under the same generators.
        let scalar_commitment = Message::new(message_commitment_scalars).commit(
            params,
            BlindingFactor::from_scalar(blinding_factor_commitment_scalar),
        );

        let challenge = ChallengeBuilder::new()
            .with(params)
            .with(commitment)
            .with(&scalar_commitment)
            .finish();

        let c = challenge.to_scalar();
        let mut message_response_scalars = [Scalar::zero(); MESSAGE_LENGTH];
        let responses = message_response_scalars
            .iter_mut()
            .zip(message_commitment_scalars.iter().zip(msg.iter()));
        for (ri, (wi, mi)) in responses {
            *ri = wi - c * mi;
        }
        let blinding_factor_response_scalar =
            blinding_factor_commitment_scalar - c * bf.as_scalar();

        Self {
            challenge,
            message_response_scalars,
            blinding_factor_response_scalar,
        }
    }

    /// Verify knowledge of the opening of `commitment`.
    pub fn verify_knowledge_of_opening(&self, params: &Params, commitment: &Commitment) -> bool {
        // Reassemble the scalar commitment from the challenge and responses.
        let response_commitment = Message::new(self.message_response_scalars).commit(
            params,
            BlindingFactor::from_scalar(self.blinding_factor_response_scalar),
        );
        let scalar_commitment = Commitment(
            commitment.to_element() * self.challenge.to_scalar() + response_commitment.to_element(),
        );

        let expected = ChallengeBuilder::new()
            .with(params)
            .with(commitment)
            .with(&scalar_commitment)
            .finish();
        expected.to_scalar() == self.challenge.to_scalar()
    }
}
