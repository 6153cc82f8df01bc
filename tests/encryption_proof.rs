mod test_utils;

use sigma_proofs::{
    elgamal::Ciphertext, keys::KeyPair, parameters::Params, proofs::EncryptionProof,
};

#[test]
fn encryption_proof_verifies() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let key_pair = KeyPair::new(&mut rng, &params);

    let (ciphertext, randomness) = Ciphertext::encrypt(&mut rng, &params, key_pair.public_key(), 42);
    let proof = EncryptionProof::prove(
        &mut rng,
        &params,
        key_pair.public_key(),
        &ciphertext,
        &randomness,
        42,
    );
    assert!(proof.verify_correct_encryption(&params, key_pair.public_key(), &ciphertext));
}

#[test]
fn encryption_proof_fails_on_wrong_ciphertext() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let key_pair = KeyPair::new(&mut rng, &params);

    let (ciphertext, randomness) = Ciphertext::encrypt(&mut rng, &params, key_pair.public_key(), 7);
    // A second encryption of the same plaintext uses fresh randomness, so it is a
    // different ciphertext and a different statement.
    let (other_ciphertext, _) = Ciphertext::encrypt(&mut rng, &params, key_pair.public_key(), 7);
    assert_ne!(
        ciphertext, other_ciphertext,
        "Unfortunate RNG seed: Accidentally generated matching ciphertexts."
    );

    let proof = EncryptionProof::prove(
        &mut rng,
        &params,
        key_pair.public_key(),
        &ciphertext,
        &randomness,
        7,
    );
    assert!(
        !proof.verify_correct_encryption(&params, key_pair.public_key(), &other_ciphertext),
        "Proof verified against a ciphertext it was not built for."
    );
}

#[test]
fn encryption_proof_fails_on_wrong_public_key() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let key_pair = KeyPair::new(&mut rng, &params);
    let other_key_pair = KeyPair::new(&mut rng, &params);

    let (ciphertext, randomness) = Ciphertext::encrypt(&mut rng, &params, key_pair.public_key(), 7);
    let proof = EncryptionProof::prove(
        &mut rng,
        &params,
        key_pair.public_key(),
        &ciphertext,
        &randomness,
        7,
    );
    assert!(
        !proof.verify_correct_encryption(&params, other_key_pair.public_key(), &ciphertext),
        "Proof verified against the wrong public key."
    );
}

#[test]
fn encryption_proof_fails_on_mismatched_plaintext() {
    let mut rng = test_utils::seeded_rng();
    let params = Params::new(&mut rng);
    let key_pair = KeyPair::new(&mut rng, &params);

    let (ciphertext, randomness) = Ciphertext::encrypt(&mut rng, &params, key_pair.public_key(), 7);
    // Proving with a plaintext the ciphertext does not contain must not verify.
    let proof = EncryptionProof::prove(
        &mut rng,
        &params,
        key_pair.public_key(),
        &ciphertext,
        &randomness,
        8,
    );
    assert!(!proof.verify_correct_encryption(&params, key_pair.public_key(), &ciphertext));
}
