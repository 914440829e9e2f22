//! # GF(2^8) Arithmetic
//!
//! Galois-field arithmetic for the FX.25 Reed-Solomon code. The field is
//! generated by the polynomial 0x187 (x^8 + x^7 + x^2 + x + 1), the
//! parameterization the FX.25 correlation tags are defined against.

/// Field polynomial generating GF(2^8)
pub const FIELD_POLY: u16 = 0x187;

/// Order of the multiplicative group (2^8 - 1)
pub const GROUP_ORDER: usize = 255;

/// Exponential and logarithm tables for GF(2^8).
///
/// The exp table is doubled so products of two logs index it directly
/// without a modulo reduction.
pub struct GaloisField {
    exp: [u8; 2 * GROUP_ORDER],
    log: [u8; 256],
}

impl GaloisField {
    /// Build the exp/log tables by walking the powers of alpha.
    ///
    /// # Returns
    ///
    /// * `Option<GaloisField>` - Tables, or `None` if the polynomial does not
    ///   generate the full multiplicative group
    pub fn new() -> Option<Self> {
        let mut exp = [0u8; 2 * GROUP_ORDER];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        for i in 0..GROUP_ORDER {
            exp[i] = x as u8;
            log[x as usize] = i as u8;

            x <<= 1;
            if x & 0x100 != 0 {
                x ^= FIELD_POLY;
            }
        }

        // alpha^255 must cycle back to 1 for a primitive polynomial
        if x != 1 {
            return None;
        }

        for i in GROUP_ORDER..2 * GROUP_ORDER {
            exp[i] = exp[i - GROUP_ORDER];
        }

        Some(Self { exp, log })
    }

    /// Multiply two field elements
    pub fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }

    /// alpha raised to the given power (reduced mod 255)
    pub fn alpha_pow(&self, power: usize) -> u8 {
        self.exp[power % GROUP_ORDER]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> GaloisField {
        GaloisField::new().expect("0x187 is primitive")
    }

    #[test]
    fn test_field_polynomial_is_primitive() {
        assert!(GaloisField::new().is_some());
    }

    #[test]
    fn test_mul_identity_and_zero() {
        let gf = field();
        for a in 0..=255u8 {
            assert_eq!(gf.mul(a, 1), a);
            assert_eq!(gf.mul(1, a), a);
            assert_eq!(gf.mul(a, 0), 0);
            assert_eq!(gf.mul(0, a), 0);
        }
    }

    #[test]
    fn test_mul_commutes() {
        let gf = field();
        for a in [1u8, 2, 3, 0x53, 0x87, 0xFE, 0xFF] {
            for b in [1u8, 5, 0x11, 0xA0, 0xFF] {
                assert_eq!(gf.mul(a, b), gf.mul(b, a));
            }
        }
    }

    #[test]
    fn test_exp_log_are_inverse() {
        let gf = field();
        for i in 0..GROUP_ORDER {
            let elem = gf.exp[i];
            assert_ne!(elem, 0, "powers of alpha are never zero");
            assert_eq!(gf.log[elem as usize] as usize, i);
        }
    }

    #[test]
    fn test_alpha_pow_wraps() {
        let gf = field();
        assert_eq!(gf.alpha_pow(0), 1);
        assert_eq!(gf.alpha_pow(GROUP_ORDER), 1);
        assert_eq!(gf.alpha_pow(1), gf.alpha_pow(GROUP_ORDER + 1));
    }

    #[test]
    fn test_mul_by_alpha_matches_table_walk() {
        let gf = field();
        // alpha * alpha^i = alpha^(i+1)
        for i in 0..GROUP_ORDER - 1 {
            assert_eq!(gf.mul(2, gf.alpha_pow(i)), gf.alpha_pow(i + 1));
        }
    }
}
