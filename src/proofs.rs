//! Non-interactive proof constructions, one module per statement.
//!
//! Every proof here follows the same three-move shape: the prover commits to fresh
//! random scalars, derives a [`Challenge`] by hashing the statement's public elements
//! together with that commitment, and answers with response scalars. The verifier
//! reassembles the prover's commitment from the responses and accepts only if hashing
//! the reassembled transcript reproduces the challenge carried in the proof.
//!
//! Proof modules do not depend on each other; they share only
//! [`Params`](crate::parameters::Params) and the challenge primitive in this module.

mod bit;
mod challenge;
mod commitment;
mod encryption;
mod equality;
mod key;
mod linear;

pub use self::{
    bit::*, challenge::*, commitment::*, encryption::*, equality::*, key::*, linear::*,
};
