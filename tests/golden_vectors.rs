//! Golden test vector validation
//!
//! The vectors in testdata/golden-vectors.json were produced by an unrelated
//! PBKDF2-HMAC-SHA256 / AES-256-GCM implementation, so passing them pins the
//! container layout and the primitives to the standard constructions.

use std::num::NonZeroU32;

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use gcmbox::cipher::NONCE_LEN;
use gcmbox::kdf::{KdfParams, SALT_LEN};
use gcmbox::secretcrypt;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenVector {
    plaintext: String,
    passphrase: String,
    salt: String,
    nonce: String,
    iterations: u32,
    container: String,
    comment: String,
}

fn load_golden_vectors() -> Vec<GoldenVector> {
    let json_data = include_str!("../testdata/golden-vectors.json");
    serde_json::from_str(json_data).expect("failed to parse golden vectors")
}

fn decode(field: &str) -> Vec<u8> {
    BASE64_STANDARD.decode(field).expect("invalid base64 in golden vectors")
}

/// Run golden vector tests on vectors selected by `include`.
fn run_golden_vector_tests(include: impl Fn(&GoldenVector) -> bool) {
    let vectors = load_golden_vectors();

    let mut passed = 0;
    let mut failed = 0;

    for (i, vector) in vectors.iter().enumerate().filter(|(_, v)| include(*v)) {
        let plaintext = decode(&vector.plaintext);
        let passphrase = decode(&vector.passphrase);
        let expected_container = decode(&vector.container);
        let salt: [u8; SALT_LEN] = decode(&vector.salt)
            .try_into()
            .expect("salt must be 16 bytes");
        let nonce: [u8; NONCE_LEN] = decode(&vector.nonce)
            .try_into()
            .expect("nonce must be 12 bytes");
        let params = KdfParams::new(
            NonZeroU32::new(vector.iterations).expect("iterations must be positive"),
        );

        let container =
            secretcrypt::encrypt_deterministic(&passphrase, &plaintext, &salt, &nonce, &params)
                .expect("encryption failed");

        if container != expected_container {
            eprintln!("Vector {}: FAILED - container mismatch", i);
            eprintln!("  Comment: {}", vector.comment);
            failed += 1;
            continue;
        }

        match secretcrypt::decrypt(&passphrase, &expected_container, &params) {
            Ok(decrypted) if decrypted == plaintext => passed += 1,
            Ok(_) => {
                eprintln!("Vector {}: FAILED - plaintext mismatch", i);
                eprintln!("  Comment: {}", vector.comment);
                failed += 1;
            }
            Err(e) => {
                eprintln!("Vector {}: FAILED to decrypt - {}", i, e);
                eprintln!("  Comment: {}", vector.comment);
                failed += 1;
            }
        }
    }

    println!("Results: {} passed, {} failed", passed, failed);

    assert_eq!(failed, 0, "Some golden vectors failed validation");
    assert!(passed > 0, "No golden vectors were tested");
}

/// Vectors with cheap iteration counts, for regular testing.
#[test]
fn test_golden_vectors_subset() {
    run_golden_vector_tests(|v| v.iterations <= 10_000);
}

/// Test all golden vectors, including those at the default iteration count
///
/// Run with: cargo test test_all_golden_vectors -- --ignored
#[test]
#[ignore]
fn test_all_golden_vectors() {
    run_golden_vector_tests(|_| true);
}
