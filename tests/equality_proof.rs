mod test_utils;

use sigma_proofs::{keys::DoubleKeyPair, parameters::Params, proofs::EqualityProof};

#[test]
fn equality_proof_verifies() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let keys = DoubleKeyPair::new(&mut rng, &params);

    let proof = EqualityProof::prove(&mut rng, &params, &keys);
    assert!(proof.verify_equal_discrete_logs(&params, keys.base_key(), keys.auxiliary_key()));
}

#[test]
fn equality_proof_fails_on_unrelated_auxiliary_key() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let keys = DoubleKeyPair::new(&mut rng, &params);

    // A well-formed point on `h0` whose exponent differs from the proven secret.
    let other_keys = DoubleKeyPair::new(&mut rng, &params);
    assert_ne!(
        keys.auxiliary_key(),
        other_keys.auxiliary_key(),
        "Unfortunate RNG seed: Accidentally generated matching keypairs."
    );

    let proof = EqualityProof::prove(&mut rng, &params, &keys);
    assert!(
        !proof.verify_equal_discrete_logs(&params, keys.base_key(), other_keys.auxiliary_key()),
        "Proof verified with an auxiliary key for a different secret."
    );
}

#[test]
fn equality_proof_fails_on_unrelated_base_key() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let keys = DoubleKeyPair::new(&mut rng, &params);
    let other_keys = DoubleKeyPair::new(&mut rng, &params);

    let proof = EqualityProof::prove(&mut rng, &params, &keys);
    assert!(
        !proof.verify_equal_discrete_logs(&params, other_keys.base_key(), keys.auxiliary_key()),
        "Proof verified with a base key for a different secret."
    );
}

#[test]
fn equality_proof_fails_on_swapped_keys() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let keys = DoubleKeyPair::new(&mut rng, &params);

    // The statement fixes which generator each key lives on; swapping them changes the
    // statement even though the underlying secret is the same.
    let proof = EqualityProof::prove(&mut rng, &params, &keys);
    assert!(!proof.verify_equal_discrete_logs(&params, keys.auxiliary_key(), keys.base_key()));
}
