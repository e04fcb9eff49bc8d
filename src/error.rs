// Toolkit Error Types
// The single mathematical failure is a missing modular inverse

use num_bigint::BigInt;
use thiserror::Error;

/// Errors produced by the toolkit.
///
/// `NoInverse` is the only failure the underlying mathematics can produce;
/// it is raised by `mod_inverse` and propagated unchanged through RSA key
/// derivation and the CRT solver. `PrimeAttemptsExhausted` only occurs when
/// a caller opts into a bounded prime search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no modular inverse: {a} and {modulus} are not coprime")]
    NoInverse { a: BigInt, modulus: BigInt },

    #[error("no {bit_length}-bit prime found within {attempts} attempts")]
    PrimeAttemptsExhausted { bit_length: u64, attempts: u64 },
}

/// Result type for toolkit operations
pub type Result<T> = std::result::Result<T, Error>;
