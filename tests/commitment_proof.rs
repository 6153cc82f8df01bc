mod test_utils;

use bls12_381::Scalar;
use sigma_proofs::{
    parameters::Params, proofs::CommitmentProof, BlindingFactor, Message,
};

#[test]
fn commitment_proof_verifies() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    // Commit to a small, concrete message tuple.
    let msg = Message::new([
        Scalar::from(10u64),
        Scalar::from(20u64),
        Scalar::from(30u64),
        Scalar::from(40u64),
    ]);
    let bf = BlindingFactor::new(&mut rng);
    let commitment = msg.commit(&params, bf);

    let proof = CommitmentProof::prove(&mut rng, &params, &commitment, bf, &msg);
    assert!(proof.verify_knowledge_of_opening(&params, &commitment));
}

#[test]
fn commitment_proof_verifies_on_random_messages() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    for _ in 0..10 {
        let msg = Message::random(&mut rng);
        let bf = BlindingFactor::new(&mut rng);
        let commitment = msg.commit(&params, bf);

        let proof = CommitmentProof::prove(&mut rng, &params, &commitment, bf, &msg);
        assert!(proof.verify_knowledge_of_opening(&params, &commitment));
    }
}

#[test]
fn commitment_proof_fails_on_wrong_commitment() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    let msg = Message::random(&mut rng);
    let bf = BlindingFactor::new(&mut rng);
    let commitment = msg.commit(&params, bf);

    // An independently generated commitment to different secrets.
    let other_msg = Message::random(&mut rng);
    let other_bf = BlindingFactor::new(&mut rng);
    let other_commitment = other_msg.commit(&params, other_bf);

    assert_ne!(
        commitment, other_commitment,
        "Unfortunate RNG seed: Accidentally generated matching commitments."
    );

    let proof = CommitmentProof::prove(&mut rng, &params, &commitment, bf, &msg);
    assert!(
        !proof.verify_knowledge_of_opening(&params, &other_commitment),
        "Proof verified against a commitment to different secrets."
    );
}

#[test]
fn commitment_proof_fails_on_wrong_params() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let other_params = Params::new(&mut rng);

    let msg = Message::random(&mut rng);
    let bf = BlindingFactor::new(&mut rng);
    let commitment = msg.commit(&params, bf);

    let proof = CommitmentProof::prove(&mut rng, &params, &commitment, bf, &msg);
    assert!(
        !proof.verify_knowledge_of_opening(&other_params, &commitment),
        "Proof verified against parameters it was not built for."
    );
}

#[test]
fn commitment_proof_fails_on_mismatched_witness() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    let msg = Message::random(&mut rng);
    let bf = BlindingFactor::new(&mut rng);
    let commitment = msg.commit(&params, bf);

    // Proving with a message that does not open the commitment must not verify.
    let wrong_msg = Message::random(&mut rng);
    let proof = CommitmentProof::prove(&mut rng, &params, &commitment, bf, &wrong_msg);
    assert!(!proof.verify_knowledge_of_opening(&params, &commitment));
}

#[test]
fn commitment_proof_survives_serialization() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);

    let msg = Message::random(&mut rng);
    let bf = BlindingFactor::new(&mut rng);
    let commitment = msg.commit(&params, bf);

    let proof = CommitmentProof::prove(&mut rng, &params, &commitment, bf, &msg);
    let bytes = bincode::serialize(&proof).unwrap();
    let proof: CommitmentProof = bincode::deserialize(&bytes).unwrap();
    assert!(proof.verify_knowledge_of_opening(&params, &commitment));
}
