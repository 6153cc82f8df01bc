//! Functionality for building challenge scalars.
//!
//! A [`Challenge`] binds a proof to its statement under the Fiat-Shamir heuristic: prover
//! and verifier each hash the same ordered sequence of public elements, and a proof only
//! verifies if the two transcripts agree exactly. Determinism is what carries the
//! binding, so the encoding is fixed: each group element enters the transcript as its
//! uncompressed affine encoding (x- then y-coordinate, big-endian), consecutive elements
//! are separated by a fixed one-byte separator, and the digest is reduced into the
//! scalar field when the builder is finished.

use crate::{common::*, serde::SerializeElement};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};
use std::convert::TryFrom;

/// Separator written between the encodings of consecutive transcript elements.
const ELEMENT_SEPARATOR: u8 = b',';

/// A trait implemented by types which can feed their public components into a
/// [`ChallengeBuilder`].
pub trait ChallengeInput {
    /// Incorporate public components of this type into a [`ChallengeBuilder`].
    fn consume(&self, builder: &mut ChallengeBuilder);
}

impl<'a, T: ChallengeInput> ChallengeInput for &'a T {
    fn consume(&self, builder: &mut ChallengeBuilder) {
        (**self).consume(builder);
    }
}

impl ChallengeInput for G1Affine {
    fn consume(&self, builder: &mut ChallengeBuilder) {
        builder.consume_bytes(self.to_uncompressed());
    }
}

impl ChallengeInput for G1Projective {
    fn consume(&self, builder: &mut ChallengeBuilder) {
        builder.consume(&G1Affine::from(self));
    }
}

impl ChallengeInput for Scalar {
    fn consume(&self, builder: &mut ChallengeBuilder) {
        builder.consume_bytes(self.to_bytes());
    }
}

/// A challenge scalar for use in a Schnorr-style proof.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Challenge(#[serde(with = "SerializeElement")] Scalar);

impl Challenge {
    /// Retrieve the internal scalar value.
    pub fn to_scalar(self) -> Scalar {
        self.0
    }
}

/// Holds state used when building a [`Challenge`] using the Fiat-Shamir heuristic, as in
/// a non-interactive Schnorr proof.
#[derive(Debug)]
#[allow(missing_copy_implementations)]
pub struct ChallengeBuilder {
    hasher: Sha3_256,
    separate_next: bool,
}

impl Default for ChallengeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeBuilder {
    /// Initialize a new, empty challenge.
    pub fn new() -> Self {
        Self {
            hasher: Sha3_256::new(),
            separate_next: false,
        }
    }

    /// Incorporate public data from some given type into the challenge.
    pub fn consume<T: ChallengeInput>(&mut self, object: &T) {
        object.consume(self);
    }

    /// A conveniently chainable variant of [`ChallengeBuilder::consume`].
    pub fn with<T: ChallengeInput>(mut self, object: &T) -> Self {
        object.consume(&mut self);
        self
    }

    /// A conveniently chainable variant of [`ChallengeBuilder::consume_bytes`].
    pub fn with_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.consume_bytes(bytes);
        self
    }

    /// Incorporate the encoding of one transcript element into the challenge.
    pub fn consume_bytes(&mut self, bytes: impl AsRef<[u8]>) {
        if self.separate_next {
            self.hasher.update([ELEMENT_SEPARATOR]);
        }
        self.hasher.update(bytes);
        self.separate_next = true;
    }

    /// Consume the builder and generate a [`Challenge`] from the accumulated data.
    ///
    /// The digest is interpreted as an integer and reduced into the scalar field here,
    /// so a challenge is always a canonical scalar and all downstream arithmetic on it
    /// is uniform.
    pub fn finish(self) -> Challenge {
        let mut digested = [0; 32];
        digested.copy_from_slice(self.hasher.finalize().as_ref());
        let scalar = Scalar::from_raw([
            u64::from_le_bytes(<[u8; 8]>::try_from(&digested[0..8]).unwrap()),
            u64::from_le_bytes(<[u8; 8]>::try_from(&digested[8..16]).unwrap()),
            u64::from_le_bytes(<[u8; 8]>::try_from(&digested[16..24]).unwrap()),
            u64::from_le_bytes(<[u8; 8]>::try_from(&digested[24..32]).unwrap()),
        ]);
        Challenge(scalar)
    }
}
