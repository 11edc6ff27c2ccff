//! Immutable quaternion with real and i/j/k coefficients.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A quaternion `a + bi + cj + dk`.
///
/// No coefficient is ever NaN; every operation that could produce one
/// goes through [`Quaternion::new`] and fails instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Quaternion {
    pub const ZERO: Quaternion = Quaternion::raw(0.0, 0.0, 0.0, 0.0);
    pub const I: Quaternion = Quaternion::raw(0.0, 1.0, 0.0, 0.0);
    pub const J: Quaternion = Quaternion::raw(0.0, 0.0, 1.0, 0.0);
    pub const K: Quaternion = Quaternion::raw(0.0, 0.0, 0.0, 1.0);

    const UNITS: [&'static str; 4] = ["", "i", "j", "k"];

    const fn raw(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Build a quaternion, rejecting NaN in any position.
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Self, DomainError> {
        if a.is_nan() || b.is_nan() || c.is_nan() || d.is_nan() {
            return Err(DomainError::NanCoefficient);
        }
        Ok(Self::raw(a, b, c, d))
    }

    /// Component-wise sum. Fails only when IEEE arithmetic yields NaN (`inf + -inf`).
    pub fn plus(&self, q: &Quaternion) -> Result<Self, DomainError> {
        Self::new(self.a + q.a, self.b + q.b, self.c + q.c, self.d + q.d)
    }

    /// Hamilton product `self * q` (not commutative).
    pub fn times(&self, q: &Quaternion) -> Result<Self, DomainError> {
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        Self::new(
            a * q.a - b * q.b - c * q.c - d * q.d,
            a * q.b + b * q.a + c * q.d - d * q.c,
            a * q.c - b * q.d + c * q.a + d * q.b,
            a * q.d + b * q.c - c * q.b + d * q.a,
        )
    }

    pub fn conjugate(&self) -> Self {
        Self::raw(self.a, -self.b, -self.c, -self.d)
    }

    /// Coefficients in order `[real, i, j, k]`.
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl TryFrom<[f64; 4]> for Quaternion {
    type Error = DomainError;

    fn try_from([a, b, c, d]: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(a, b, c, d)
    }
}

/// Parses `a,b,c,d`; missing trailing coefficients default to zero.
impl FromStr for Quaternion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| DomainError::InvalidQuaternion {
            input: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() > 4 {
            return Err(invalid(format!("expected at most 4 coefficients, got {}", parts.len())));
        }

        let mut coefficients = [0.0; 4];
        for (slot, part) in coefficients.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|e| invalid(format!("'{}': {}", part, e)))?;
        }
        Self::try_from(coefficients)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for (coefficient, unit) in self.coefficients().into_iter().zip(Self::UNITS) {
            if coefficient == 0.0 {
                continue;
            }
            if !out.is_empty() && coefficient > 0.0 {
                out.push('+');
            }
            if unit.is_empty() || coefficient.abs() != 1.0 {
                out.push_str(&coefficient.to_string());
            } else if coefficient < 0.0 {
                out.push('-');
            }
            out.push_str(unit);
        }
        if out.is_empty() {
            out.push('0');
        }
        f.pad(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn q(a: f64, b: f64, c: f64, d: f64) -> Quaternion {
        Quaternion::new(a, b, c, d).unwrap()
    }

    #[rstest]
    #[case(f64::NAN, 0.0, 0.0, 0.0)]
    #[case(0.0, f64::NAN, 0.0, 0.0)]
    #[case(0.0, 0.0, f64::NAN, 0.0)]
    #[case(0.0, 0.0, 0.0, f64::NAN)]
    fn test_new_rejects_nan(#[case] a: f64, #[case] b: f64, #[case] c: f64, #[case] d: f64) {
        assert_eq!(Quaternion::new(a, b, c, d), Err(DomainError::NanCoefficient));
    }

    #[test]
    fn test_new_accepts_infinity() {
        assert!(Quaternion::new(f64::INFINITY, f64::NEG_INFINITY, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_plus_infinities_of_opposite_sign_fails() {
        let pos = q(f64::INFINITY, 0.0, 0.0, 0.0);
        let neg = q(f64::NEG_INFINITY, 0.0, 0.0, 0.0);
        assert_eq!(pos.plus(&neg), Err(DomainError::NanCoefficient));
    }

    #[test]
    fn test_unit_products_follow_hamilton_rules() {
        let minus_one = q(-1.0, 0.0, 0.0, 0.0);
        assert_eq!(Quaternion::I.times(&Quaternion::I).unwrap(), minus_one);
        assert_eq!(Quaternion::J.times(&Quaternion::J).unwrap(), minus_one);
        assert_eq!(Quaternion::K.times(&Quaternion::K).unwrap(), minus_one);
        assert_eq!(Quaternion::I.times(&Quaternion::J).unwrap(), Quaternion::K);
        assert_eq!(Quaternion::J.times(&Quaternion::K).unwrap(), Quaternion::I);
        assert_eq!(Quaternion::K.times(&Quaternion::I).unwrap(), Quaternion::J);
        assert_eq!(
            Quaternion::J.times(&Quaternion::I).unwrap(),
            q(0.0, 0.0, 0.0, -1.0)
        );
    }

    #[test]
    fn test_times_general_case() {
        let x = q(1.0, 3.0, 5.0, 2.0);
        let y = q(-2.0, 2.0, 8.0, -1.0);
        assert_eq!(x.times(&y).unwrap(), q(-46.0, -25.0, 5.0, 9.0));
        assert_eq!(y.times(&x).unwrap(), q(-46.0, 17.0, -9.0, -19.0));
    }

    #[test]
    fn test_times_zero_is_zero() {
        let x = q(3.5, -2.0, 7.0, 0.25);
        assert_eq!(x.times(&Quaternion::ZERO).unwrap(), Quaternion::ZERO);
    }

    #[test]
    fn test_double_conjugate_is_identity() {
        let x = q(1.5, -2.0, 0.0, 9.0);
        assert_eq!(x.conjugate().conjugate(), x);
        assert_eq!(x.conjugate().coefficients(), [1.5, 2.0, -0.0, -9.0]);
    }

    #[rstest]
    #[case(q(0.0, 0.0, 0.0, 0.0), "0")]
    #[case(q(1.0, 2.0, -3.0, 0.0), "1+2i-3j")]
    #[case(q(4.0, 0.0, 1.0, 0.0), "4+j")]
    #[case(q(0.0, -1.0, 0.0, 2.5), "-i+2.5k")]
    #[case(q(-1.0, 0.0, 0.0, 0.0), "-1")]
    #[case(q(1.0, 0.0, 0.0, 0.0), "1")]
    #[case(q(0.0, 0.0, 0.0, 1.0), "k")]
    #[case(q(0.0, 1.0, -1.0, 1.0), "i-j+k")]
    #[case(q(-2.0, -2.0, 0.0, -1.0), "-2-2i-k")]
    fn test_display(#[case] value: Quaternion, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_display_honors_width_and_fill() {
        assert_eq!(format!("{:>8}", Quaternion::I), "       i");
        assert_eq!(format!("{:*<6}", q(4.0, 0.0, 1.0, 0.0)), "4+j***");
        assert_eq!(format!("{:^5}", Quaternion::ZERO), "  0  ");
    }

    #[rstest]
    #[case("1,2,3,4", q(1.0, 2.0, 3.0, 4.0))]
    #[case(" -1.5 , 0 ", q(-1.5, 0.0, 0.0, 0.0))]
    #[case("0,0,0,1", Quaternion::K)]
    fn test_from_str(#[case] input: &str, #[case] expected: Quaternion) {
        assert_eq!(input.parse::<Quaternion>().unwrap(), expected);
    }

    #[rstest]
    #[case("1,2,3,4,5")]
    #[case("1,x")]
    #[case("NaN")]
    fn test_from_str_rejects(#[case] input: &str) {
        assert!(input.parse::<Quaternion>().is_err());
    }
}
