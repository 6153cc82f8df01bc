//! Pedersen commitments over the prime-order group G1 from BLS12-381.
//!
//! Commitments may be formed using the [`commit`] method on a [`Message`] and verified
//! with the [`verify_opening`] method on a [`Commitment`]. The commitment is
//! `bf * g + m0 * h0 + m1 * h1 + m2 * h2 + m3 * h3`; it is hiding because the blinding
//! factor is uniform and binding because no discrete log relationship among the
//! generators is known.
//!
//! ```
//! # use sigma_proofs::{BlindingFactor, Message, parameters::Params};
//! # let mut rng = rand::thread_rng();
//! let params = Params::new(&mut rng);
//! let msg = Message::random(&mut rng);
//! let bf = BlindingFactor::new(&mut rng);
//! let commitment = msg.commit(&params, bf);
//! assert!(commitment.verify_opening(&params, bf, &msg));
//! ```
//!
//! [`commit`]: Message::commit
//! [`verify_opening`]: Commitment::verify_opening

use crate::{
    common::*,
    parameters::Params,
    proofs::{ChallengeBuilder, ChallengeInput},
    serde::SerializeElement,
};
use serde::{Deserialize, Serialize};

/// A Pedersen commitment to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "SerializeElement")] pub(crate) G1Projective);

impl Commitment {
    /// Form a commitment to a message and blinding factor using the given parameters.
    pub(crate) fn new(msg: &Message, params: &Params, bf: BlindingFactor) -> Self {
        Commitment(params.g() * bf.as_scalar() + inner_product(params.hs(), msg))
    }

    /// Verify a provided opening of the commitment.
    pub fn verify_opening(&self, params: &Params, bf: BlindingFactor, msg: &Message) -> bool {
        msg.commit(params, bf) == *self
    }

    /// Get the inner group element representing the commitment.
    pub fn to_element(self) -> G1Projective {
        self.0
    }
}

impl ChallengeInput for Commitment {
    fn consume(&self, builder: &mut ChallengeBuilder) {
        builder.consume(&self.0);
    }
}

impl Message {
    /// Form a commitment to this message with the given blinding factor.
    pub fn commit(&self, params: &Params, bf: BlindingFactor) -> Commitment {
        Commitment::new(self, params, bf)
    }
}
