// RSA Toolkit
// Number-theoretic building blocks: probabilistic primality testing, prime
// generation, extended Euclid and modular inverses, textbook RSA over raw
// integers, and a Chinese Remainder Theorem solver

pub mod crt;
pub mod error;
pub mod euclid;
pub mod prime;
pub mod rsa;

pub use crt::{solve_congruence, solve_crt, Congruence};
pub use error::{Error, Result};
pub use euclid::{extended_gcd, gcd, mod_inverse, mod_inverse_uint};
pub use prime::{
    generate_prime, generate_prime_with_rng, is_probable_prime, is_probable_prime_with_rng, sieve,
    PrimeGenerator, DEFAULT_ROUNDS,
};
pub use rsa::{
    decrypt_int, decrypt_message, derive_keypair, encrypt_int, encrypt_message, generate_keypair,
    generate_keypair_with_rng, RsaKeyPair, RsaPrivateKey, RsaPublicKey, DEFAULT_EXPONENT,
};
