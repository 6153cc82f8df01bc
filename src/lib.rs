//! This crate includes non-interactive zero-knowledge proofs instantiated over the
//! prime-order group G1 of the pairing-friendly curve BLS12-381:
//! - Pedersen commitments with a fixed four-slot message layout.
//! - Schnorr-style proofs of knowledge of a secret key and of the opening of a
//!   commitment.
//! - Proofs of discrete log equality, of correct ElGamal-style encryption with a known
//!   plaintext, of a fixed linear relationship between committed values, and of a
//!   ciphertext encrypting a bit.
//!
//! Each protocol is made non-interactive with the Fiat-Shamir heuristic: the verifier's
//! challenge is derived by hashing the statement's public elements together with the
//! prover's first move, so a proof is bound to the exact statement it was produced for.
//! Proving and verifying are pure computations over immutable values; any number of
//! threads may run them concurrently against shared [`parameters::Params`].

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod elgamal;
pub mod keys;
pub mod parameters;
pub mod pedersen;
pub mod proofs;

mod serde;

pub use crate::common::Rng;
pub use crate::serde::SerializeElement;

use crate::common::*;
use ::serde::*;
use ff::Field;
use std::ops::Deref;
use thiserror::*;

/// Error types that may arise when constructing cryptographic artifacts.
#[derive(Debug, Error, Clone, Copy)]
pub enum Error {
    /// Caused by attempting to build parameters around an identity generator, which
    /// cannot bind a commitment.
    #[error("parameter generators must not be the identity element")]
    IdentityGenerator,
}

/// The number of message slots in a commitment.
pub const MESSAGE_LENGTH: usize = 4;

/// Fixed-length message type used across schemes.
#[derive(Debug, Clone, Copy)]
pub struct Message([Scalar; MESSAGE_LENGTH]);

impl Deref for Message {
    type Target = [Scalar; MESSAGE_LENGTH];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Message {
    /// Create a new message from an array of scalars.
    pub fn new(scalars: [Scalar; MESSAGE_LENGTH]) -> Self {
        Message(scalars)
    }

    /// Create a message of scalars sampled uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut scalars = [Scalar::zero(); MESSAGE_LENGTH];
        for scalar in scalars.iter_mut() {
            *scalar = Scalar::random(&mut *rng);
        }
        Message(scalars)
    }
}

/// Blinding factor for a commitment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlindingFactor(#[serde(with = "SerializeElement")] Scalar);

impl BlindingFactor {
    /// Generate a new blinding factor uniformly at random from the set of possible
    /// [`Scalar`]s.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self(Scalar::random(rng))
    }

    /// Construct a blinding factor from the scalar representing it.
    ///
    /// **warning:** this should only be used to re-commit derived scalars while proving
    /// or verifying; a blinding factor for a fresh commitment must come from
    /// [`BlindingFactor::new`].
    pub fn from_scalar(scalar: Scalar) -> Self {
        Self(scalar)
    }

    /// Convert to the inner scalar representing this blinding factor.
    pub fn as_scalar(&self) -> Scalar {
        self.0
    }
}

mod common {
    //! Common types used internally.

    pub use crate::{BlindingFactor, Message, MESSAGE_LENGTH};
    pub use bls12_381::{G1Affine, G1Projective, Scalar};
    pub use group::Group;

    use ff::Field;

    /// A trait synonym for a cryptographically secure random number generator. This trait
    /// is blanket-implemented for all valid types and will never need to be implemented
    /// by-hand.
    pub trait Rng: rand::CryptoRng + rand::RngCore {}
    impl<T: rand::CryptoRng + rand::RngCore> Rng for T {}

    /// Sample a scalar uniformly at random from [1, order).
    pub fn random_nonzero_scalar(rng: &mut impl Rng) -> Scalar {
        loop {
            let r = Scalar::random(&mut *rng);
            if !r.is_zero() {
                return r;
            }
        }
    }

    /// Multiply each generator by the matching message slot and sum the results.
    pub fn inner_product(points: &[G1Projective; MESSAGE_LENGTH], scalars: &Message) -> G1Projective {
        points
            .iter()
            .zip(scalars.iter())
            .fold(G1Projective::identity(), |sum, (point, scalar)| {
                sum + point * scalar
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keys::KeyPair, parameters::Params, proofs::KeyProof};

    #[test]
    fn make_keypair() {
        let mut rng = rand::thread_rng();
        let params = Params::new(&mut rng);
        let _kp = KeyPair::new(&mut rng, &params);
    }

    #[test]
    fn key_proof_is_correct() {
        let mut rng = rand::thread_rng();
        let params = Params::new(&mut rng);
        let kp = KeyPair::new(&mut rng, &params);

        let proof = KeyProof::prove(&mut rng, &params, &kp);
        assert!(
            proof.verify_knowledge_of_key(&params, kp.public_key()),
            "Proof of knowledge of a key didn't verify!! {:?}",
            kp,
        );
    }

    #[test]
    fn messages_are_distinct() {
        let mut rng = rand::thread_rng();
        let msg = Message::random(&mut rng);
        let other = Message::random(&mut rng);
        assert_ne!(&*msg, &*other, "unfortunate RNG seed");
    }
}
