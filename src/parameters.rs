//! Public parameters shared by every protocol in this crate.
//!
//! [`Params`] fixes a primary generator `g` and four auxiliary generators `h0..h3` of the
//! prime-order group G1. The generators are derived by multiplying the canonical base
//! point by independently sampled uniform exponents, so no discrete log relationship
//! among them is known to any party; this is what makes commitments over them binding.
//!
//! All proofs in a given context must share one set of parameters. Construct a fresh set
//! with [`Params::new`] and pass it to every call site, or use [`Params::shared`] for a
//! process-wide set that is generated on first use.

use crate::{
    common::*,
    proofs::{ChallengeBuilder, ChallengeInput},
    serde::SerializeElement,
    Error,
};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Public parameters: a primary generator and four auxiliary generators of G1.
///
/// The group order does not appear as a field; it is the modulus of [`Scalar`], and every
/// scalar operation in this crate reduces by it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Params {
    #[serde(with = "SerializeElement")]
    g: G1Projective,
    #[serde(with = "SerializeElement")]
    hs: [G1Projective; MESSAGE_LENGTH],
}

static SHARED_PARAMS: OnceLock<Params> = OnceLock::new();

impl Params {
    /// Generate a new, random set of parameters.
    ///
    /// Each generator is the canonical base point raised to a freshly sampled uniform
    /// nonzero exponent, so the generators are uniform non-identity elements with no
    /// known discrete log relationships among them.
    pub fn new(rng: &mut impl Rng) -> Self {
        let base = G1Projective::generator();
        let g = base * random_nonzero_scalar(&mut *rng);
        let mut hs = [G1Projective::identity(); MESSAGE_LENGTH];
        for h in hs.iter_mut() {
            *h = base * random_nonzero_scalar(&mut *rng);
        }
        Self { g, hs }
    }

    /// Retrieve the process-wide shared parameters, generating them on first use.
    ///
    /// Initialization happens at most once; every caller in the process observes the
    /// identical value, so proofs built against the shared parameters verify anywhere in
    /// the process.
    pub fn shared() -> &'static Params {
        SHARED_PARAMS.get_or_init(|| Params::new(&mut rand::thread_rng()))
    }

    /// Produce parameters from a set of known generators.
    ///
    /// Fails with [`Error::IdentityGenerator`] if any generator is the identity, which
    /// would let a commitment ignore the corresponding message slot entirely.
    pub fn from_generators(
        g: G1Projective,
        hs: [G1Projective; MESSAGE_LENGTH],
    ) -> Result<Self, Error> {
        if bool::from(g.is_identity()) || hs.iter().any(|h| bool::from(h.is_identity())) {
            return Err(Error::IdentityGenerator);
        }
        Ok(Self { g, hs })
    }

    pub(crate) fn g(&self) -> &G1Projective {
        &self.g
    }

    pub(crate) fn hs(&self) -> &[G1Projective; MESSAGE_LENGTH] {
        &self.hs
    }
}

impl ChallengeInput for Params {
    fn consume(&self, builder: &mut ChallengeBuilder) {
        builder.consume(&self.g);
        for h in &self.hs {
            builder.consume(h);
        }
    }
}
