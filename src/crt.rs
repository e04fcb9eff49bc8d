// Chinese Remainder Theorem Solver
// Solves systems a_i*x ≡ c_i (mod m_i) with pairwise-coprime moduli

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::Result;
use crate::euclid::mod_inverse_uint;

/// One congruence `a*x ≡ c (mod m)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Congruence {
    pub a: BigUint,
    pub c: BigUint,
    pub m: BigUint,
}

impl Congruence {
    pub fn new<T: Into<BigUint>>(a: T, c: T, m: T) -> Self {
        Self {
            a: a.into(),
            c: c.into(),
            m: m.into(),
        }
    }
}

/// Reduce `a*x ≡ c (mod m)` to its solution `x ≡ b (mod m)`
/// Fails with `Error::NoInverse` when a is not invertible mod m
pub fn solve_congruence(a: &BigUint, c: &BigUint, m: &BigUint) -> Result<BigUint> {
    let inv = mod_inverse_uint(a, m)?;
    Ok(inv * c % m)
}

/// Solve a system of congruences, returning the unique x0 in [0, ∏ m_i).
///
/// The moduli must be pairwise coprime and each a_i coprime to its m_i.
/// Neither precondition is checked up front: a violation surfaces as
/// `Error::NoInverse` from the failing inverse computation. The solver is
/// deterministic, so repeated calls on the same system agree.
pub fn solve_crt(congruences: &[Congruence]) -> Result<BigUint> {
    let m_total = congruences
        .iter()
        .fold(BigUint::one(), |acc, con| acc * &con.m);

    let mut x0 = BigUint::zero();
    for con in congruences {
        let n_i = &m_total / &con.m;
        let s_i = mod_inverse_uint(&n_i, &con.m)?;
        let b_i = solve_congruence(&con.a, &con.c, &con.m)?;
        x0 += b_i * n_i * s_i;
    }

    Ok(x0 % m_total)
}
