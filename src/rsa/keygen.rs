// RSA Key Derivation and Generation
// Builds a keypair from two primes; the private exponent comes from the
// extended-Euclidean modular inverse

use num_bigint::{BigInt, BigUint};
use num_traits::One;
use rand::{thread_rng, Rng};

use crate::error::Result;
use crate::euclid::mod_inverse;
use crate::prime::generate_prime_with_rng;

/// Public exponent used by the convenience generators
pub const DEFAULT_EXPONENT: u64 = 65537;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: BigUint, // Modulus
    pub e: BigUint, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: BigUint, // Modulus (same as public)
    pub d: BigUint, // Private exponent
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaKeyPair {
    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.public_key.n.bits()
    }
}

/// Derive a keypair from two distinct primes and a public exponent.
///
/// n = p*q, φ = (p-1)(q-1), d = e^(-1) mod φ. Fails with `Error::NoInverse`
/// when e and φ are not coprime. That p != q and that both are prime are
/// caller preconditions; they are not re-checked here. The primes are used
/// only during derivation and are not retained in the key material.
pub fn derive_keypair(p: &BigUint, q: &BigUint, e: &BigUint) -> Result<RsaKeyPair> {
    let n = p * q;
    let one = BigUint::one();
    let phi = (p - &one) * (q - &one);

    let d = mod_inverse(&BigInt::from(e.clone()), &BigInt::from(phi))?;
    let d = d.magnitude().clone();

    Ok(RsaKeyPair {
        public_key: RsaPublicKey {
            n: n.clone(),
            e: e.clone(),
        },
        private_key: RsaPrivateKey { n, d },
    })
}

/// Generate a keypair over two fresh primes of `prime_bits` bits each
pub fn generate_keypair(prime_bits: u64, e: u64) -> Result<RsaKeyPair> {
    generate_keypair_with_rng(prime_bits, e, &mut thread_rng())
}

/// `generate_keypair` drawing all entropy from the supplied rng
/// q is redrawn for as long as it collides with p
pub fn generate_keypair_with_rng<R: Rng + ?Sized>(
    prime_bits: u64,
    e: u64,
    rng: &mut R,
) -> Result<RsaKeyPair> {
    let p = generate_prime_with_rng(prime_bits, rng);
    let mut q = generate_prime_with_rng(prime_bits, rng);
    while q == p {
        q = generate_prime_with_rng(prime_bits, rng);
    }

    derive_keypair(&p, &q, &BigUint::from(e))
}
