// Primality Testing and Prime Generation
// Fermat pre-check plus Miller-Rabin witness rounds, and a rejection-sampling
// generator for random primes of an exact bit length

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::{thread_rng, Rng};

use crate::error::{Error, Result};

/// Witness rounds used by the convenience generators
pub const DEFAULT_ROUNDS: u32 = 10;

/// Sieve of Eratosthenes: all primes up to and including `limit`
pub fn sieve(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let n = limit as usize;
    let mut is_prime = vec![true; n + 1];
    is_prime[0] = false;
    is_prime[1] = false;

    let mut p = 2;
    while p * p <= n {
        if is_prime[p] {
            let mut multiple = p * p;
            while multiple <= n {
                is_prime[multiple] = false;
                multiple += p;
            }
        }
        p += 1;
    }

    (2..=n).filter(|&i| is_prime[i]).map(|i| i as u64).collect()
}

/// Fermat pre-check with `rounds` random bases a in [2, n-2]
/// Rejects n as soon as some base gives a^(n-1) mod n != 1
pub fn fermat_test_with_rng<R: Rng + ?Sized>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
    let one = BigUint::one();
    if n <= &one {
        return false;
    }
    if n <= &BigUint::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let two = BigUint::from(2u8);
    let n_minus_one = n - &one;
    for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        if a.modpow(&n_minus_one, n) != one {
            return false;
        }
    }
    true
}

/// Probabilistic primality test: Fermat pre-check plus `rounds` Miller-Rabin
/// witness rounds, each against a random base in [2, n-2].
///
/// A "true" verdict is a probable prime, not a proof; a composite survives
/// with probability at most 4^(-rounds). `rounds == 0` draws no bases and
/// trivially passes any odd n > 4; choosing a meaningful round count is the
/// caller's contract.
pub fn is_probable_prime_with_rng<R: Rng + ?Sized>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
    if !fermat_test_with_rng(n, rounds, rng) {
        return false;
    }
    if n <= &BigUint::from(3u8) {
        return true;
    }

    // Write n - 1 = 2^s * d with d odd
    let one = BigUint::one();
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let two = BigUint::from(2u8);
    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        // No square reached n-1: a witnesses compositeness
        return false;
    }
    true
}

/// `is_probable_prime_with_rng` drawing bases from the thread-local rng
pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
    is_probable_prime_with_rng(n, rounds, &mut thread_rng())
}

/// Random candidate with exactly `bit_length` bits: the top bit is forced set
/// so the bit length is exact, the bottom bit so the candidate is odd
fn gen_candidate<R: Rng + ?Sized>(bit_length: u64, rng: &mut R) -> BigUint {
    let mut p = rng.gen_biguint(bit_length);
    p |= (BigUint::one() << (bit_length - 1)) | BigUint::one();
    p
}

/// Rejection-sampling prime generator.
///
/// Draws odd candidates of exactly `bit_length` bits and tests each until one
/// passes. The search is unbounded by default; `max_attempts` turns a
/// hopeless input (a 1-bit "prime", say) into an explicit error instead of an
/// infinite loop. Every attempt consumes entropy from the supplied rng.
#[derive(Debug, Clone)]
pub struct PrimeGenerator {
    bit_length: u64,
    rounds: u32,
    max_attempts: Option<u64>,
}

impl PrimeGenerator {
    pub fn new(bit_length: u64) -> Self {
        Self {
            bit_length,
            rounds: DEFAULT_ROUNDS,
            max_attempts: None,
        }
    }

    /// Witness rounds run against each candidate
    pub fn rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Cap the number of candidates drawn before giving up
    pub fn max_attempts(mut self, attempts: u64) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Generate a prime using the thread-local rng
    pub fn generate(&self) -> Result<BigUint> {
        self.generate_with_rng(&mut thread_rng())
    }

    /// Generate a prime, drawing all entropy from the supplied rng
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        let mut attempts = 0u64;
        loop {
            if let Some(cap) = self.max_attempts {
                if attempts >= cap {
                    return Err(Error::PrimeAttemptsExhausted {
                        bit_length: self.bit_length,
                        attempts,
                    });
                }
            }
            attempts += 1;

            let candidate = gen_candidate(self.bit_length, rng);
            if is_probable_prime_with_rng(&candidate, self.rounds, rng) {
                return Ok(candidate);
            }
        }
    }
}

/// Generate a random probable prime of exactly `bit_length` bits
/// Unbounded search with the default witness rounds
pub fn generate_prime(bit_length: u64) -> BigUint {
    generate_prime_with_rng(bit_length, &mut thread_rng())
}

/// `generate_prime` drawing entropy from the supplied rng
pub fn generate_prime_with_rng<R: Rng + ?Sized>(bit_length: u64, rng: &mut R) -> BigUint {
    loop {
        let candidate = gen_candidate(bit_length, rng);
        if is_probable_prime_with_rng(&candidate, DEFAULT_ROUNDS, rng) {
            return candidate;
        }
    }
}
