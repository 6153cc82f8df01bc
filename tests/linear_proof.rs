mod test_utils;

use bls12_381::Scalar;
use ff::Field;
use sigma_proofs::{
    parameters::Params,
    proofs::{LinearProof, LinearRelation},
    BlindingFactor, Message,
};

#[test]
fn linear_proof_verifies() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    let relation = LinearRelation::new(&mut rng, &params, 3);
    let (x0, x1) = relation.values();
    assert_eq!(x0, Scalar::from(10u64) * x1 + Scalar::from(20u64));

    let proof = LinearProof::prove(&mut rng, &params, &relation);
    assert!(proof.verify_linear_relation(&params, &relation.commitment()));
}

#[test]
fn linear_proof_verifies_on_zero() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    // x1 = 0 commits to the bare constant, x0 = 20.
    let relation = LinearRelation::new(&mut rng, &params, 0);
    let proof = LinearProof::prove(&mut rng, &params, &relation);
    assert!(proof.verify_linear_relation(&params, &relation.commitment()));
}

#[test]
fn linear_proof_fails_on_swapped_slots() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    let relation = LinearRelation::new(&mut rng, &params, 3);
    let (x0, x1) = relation.values();

    // A commitment with the pair assigned to opposite slots. The pair still satisfies
    // the relation abstractly, but the statement binds each value to its slot.
    let swapped = Message::new([x1, x0, Scalar::zero(), Scalar::zero()])
        .commit(&params, BlindingFactor::new(&mut rng));
    assert_ne!(relation.commitment(), swapped);

    let proof = LinearProof::prove(&mut rng, &params, &relation);
    assert!(
        !proof.verify_linear_relation(&params, &swapped),
        "Proof verified against a commitment with swapped slots."
    );
}

#[test]
fn linear_proof_fails_on_unrelated_commitment() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    let relation = LinearRelation::new(&mut rng, &params, 3);
    let unrelated = Message::random(&mut rng).commit(&params, BlindingFactor::new(&mut rng));

    let proof = LinearProof::prove(&mut rng, &params, &relation);
    assert!(!proof.verify_linear_relation(&params, &unrelated));
}

#[test]
fn linear_proof_fails_on_wrong_params() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let other_params = Params::new(&mut rng);

    let relation = LinearRelation::new(&mut rng, &params, 3);
    let proof = LinearProof::prove(&mut rng, &params, &relation);
    assert!(!proof.verify_linear_relation(&other_params, &relation.commitment()));
}
