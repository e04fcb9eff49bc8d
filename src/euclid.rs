// Extended Euclidean Algorithm and Modular Inverse
// Bézout coefficients are signed, so this module works over BigInt

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Greatest common divisor
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Extended Euclidean algorithm
/// Returns (g, x, y) such that a*x + b*y = g = gcd(a, b), with g >= 0
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
    let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next = &old_r - &q * &r;
        old_r = r;
        r = next;

        let next = &old_x - &q * &x;
        old_x = x;
        x = next;

        let next = &old_y - &q * &y;
        old_y = y;
        y = next;
    }

    // Report the gcd non-negative regardless of input signs; negating all
    // three keeps the Bézout identity intact.
    if old_r.is_negative() {
        (-old_r, -old_x, -old_y)
    } else {
        (old_r, old_x, old_y)
    }
}

/// Modular inverse: a^(-1) mod m, normalized into [0, m)
/// Fails with `Error::NoInverse` when a and m are not coprime
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Result<BigInt> {
    let (g, x, _) = extended_gcd(a, m);

    if !g.is_one() {
        return Err(Error::NoInverse {
            a: a.clone(),
            modulus: m.clone(),
        });
    }

    Ok(x.mod_floor(m))
}

/// Modular inverse over the unsigned domain used by key derivation and the
/// CRT solver
pub fn mod_inverse_uint(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let inv = mod_inverse(&BigInt::from(a.clone()), &BigInt::from(m.clone()))?;
    Ok(inv.magnitude().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_bezout(a: i64, b: i64) {
        let (a, b) = (BigInt::from(a), BigInt::from(b));
        let (g, x, y) = extended_gcd(&a, &b);
        assert_eq!(&a * &x + &b * &y, g, "Bézout identity for ({}, {})", a, b);
        assert_eq!(g, a.gcd(&b));
    }

    #[test]
    fn test_extended_gcd_identity() {
        let pairs = [
            (240, 46),
            (46, 240),
            (17, 3120),
            (0, 7),
            (7, 0),
            (0, 0),
            (-4, 6),
            (6, -4),
            (-15, -27),
            (1, 1),
        ];
        for (a, b) in pairs {
            check_bezout(a, b);
        }
    }

    #[test]
    fn test_extended_gcd_value() {
        // gcd(240, 46) = 2 = 240*(-9) + 46*47
        let (g, x, y) = extended_gcd(&BigInt::from(240), &BigInt::from(46));
        assert_eq!(g, BigInt::from(2));
        assert_eq!(BigInt::from(240) * x + BigInt::from(46) * y, BigInt::from(2));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7
        let inv = mod_inverse(&BigInt::from(3), &BigInt::from(7)).unwrap();
        assert_eq!(inv, BigInt::from(5));

        // RSA reference pair: 17^(-1) mod 3120 = 2753
        let inv = mod_inverse(&BigInt::from(17), &BigInt::from(3120)).unwrap();
        assert_eq!(inv, BigInt::from(2753));
    }

    #[test]
    fn test_mod_inverse_property() {
        let m = BigInt::from(97);
        for a in 1..97 {
            let a = BigInt::from(a);
            let inv = mod_inverse(&a, &m).unwrap();
            assert_eq!((&a * &inv).mod_floor(&m), BigInt::one());
            assert!(inv >= BigInt::zero() && inv < m);
        }
    }

    #[test]
    fn test_mod_inverse_negative_operand() {
        // -3 ≡ 4 (mod 7), and 4 * 2 ≡ 1 (mod 7)
        let inv = mod_inverse(&BigInt::from(-3), &BigInt::from(7)).unwrap();
        assert_eq!(inv, BigInt::from(2));
    }

    #[test]
    fn test_mod_inverse_none() {
        let err = mod_inverse(&BigInt::from(4), &BigInt::from(8)).unwrap_err();
        assert_eq!(
            err,
            Error::NoInverse {
                a: BigInt::from(4),
                modulus: BigInt::from(8),
            }
        );
    }

    #[test]
    fn test_mod_inverse_uint() {
        let inv = mod_inverse_uint(&BigUint::from(65537u32), &BigUint::from(3120u32));
        assert!(inv.is_ok());

        let err = mod_inverse_uint(&BigUint::from(6u32), &BigUint::from(9u32));
        assert!(err.is_err());
    }

    #[test]
    fn test_gcd() {
        assert_eq!(
            gcd(&BigUint::from(48u32), &BigUint::from(18u32)),
            BigUint::from(6u32)
        );
        assert_eq!(
            gcd(&BigUint::from(17u32), &BigUint::from(3120u32)),
            BigUint::from(1u32)
        );
    }
}
