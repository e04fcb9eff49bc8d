// Demo binary: generate a keypair, round-trip a message, solve a congruence
// system. Non-interactive; all inputs are fixed below.

use anyhow::Result;

use rsa_toolkit::{
    decrypt_message, encrypt_message, generate_keypair, solve_crt, Congruence, DEFAULT_EXPONENT,
};

const MESSAGE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890!@";

fn run() -> Result<()> {
    println!("Generating RSA keypair (two 128-bit primes, e = {})...", DEFAULT_EXPONENT);
    let keypair = generate_keypair(128, DEFAULT_EXPONENT)?;
    println!("n = {:x} ({} bits)", keypair.public_key.n, keypair.modulus_bits());

    let ciphertext = encrypt_message(&keypair.public_key, MESSAGE);
    println!("Encrypted {} characters; first block = {:x}", ciphertext.len(), ciphertext[0]);

    let recovered = decrypt_message(&keypair.private_key, &ciphertext);
    println!("Decrypted: {}", recovered);
    if recovered != MESSAGE {
        anyhow::bail!("round-trip mismatch");
    }

    // x ≡ 2 (mod 3), x ≡ 3 (mod 5), x ≡ 2 (mod 7)
    let system = [
        Congruence::new(1u64, 2, 3),
        Congruence::new(1u64, 3, 5),
        Congruence::new(1u64, 2, 7),
    ];
    let x0 = solve_crt(&system)?;
    println!("Congruence system solution: x ≡ {} (mod 105)", x0);

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
