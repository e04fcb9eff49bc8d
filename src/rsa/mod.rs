// RSA Module - Main module file
// Key derivation plus raw integer and message-level encrypt/decrypt

pub mod decrypt;
pub mod encrypt;
pub mod keygen;

pub use decrypt::{decrypt_int, decrypt_message};
pub use encrypt::{encrypt_int, encrypt_message};
pub use keygen::{
    derive_keypair, generate_keypair, generate_keypair_with_rng, RsaKeyPair, RsaPrivateKey,
    RsaPublicKey, DEFAULT_EXPONENT,
};
