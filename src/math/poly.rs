use super::field::PrimeField;
use crate::error::Result;

/// Polynomial over a prime field in coefficient form, lowest degree first.
///
/// Trailing zero coefficients are kept: the length is part of the value and
/// fixes the degree bound the evaluator works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    field: PrimeField,
    coefficients: Vec<u64>,
}

impl Polynomial {
    /// Every coefficient must already be a canonical field element.
    pub fn with_coefficients(field: PrimeField, coefficients: Vec<u64>) -> Result<Self> {
        for &c in &coefficients {
            field.element(c)?;
        }
        Ok(Self {
            field,
            coefficients,
        })
    }

    pub fn field(&self) -> PrimeField {
        self.field
    }

    pub fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The zero polynomial has degree < 0
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|&c| c != 0)
    }

    /// Horner evaluation at `x`.
    pub fn evaluate(&self, x: u64) -> u64 {
        let f = &self.field;
        let x = f.reduce(x);
        self.coefficients
            .iter()
            .rev()
            .fold(0, |acc, &c| f.add(f.mul(acc, x), c))
    }

    /// Newton divided-difference interpolation through distinct points.
    ///
    /// Returns the unique polynomial of degree < `points.len()` passing through
    /// every `(x, y)`, padded to exactly `points.len()` coefficients, or `None`
    /// when two abscissae coincide modulo the field.
    pub fn interpolate(field: PrimeField, points: &[(u64, u64)]) -> Option<Self> {
        let n = points.len();
        let xs: Vec<u64> = points.iter().map(|&(x, _)| field.reduce(x)).collect();
        let mut table: Vec<u64> = points.iter().map(|&(_, y)| field.reduce(y)).collect();

        // table[i] becomes f[x_0, ..., x_i]
        for level in 1..n {
            for i in (level..n).rev() {
                let denom = field.inv(field.sub(xs[i], xs[i - level]))?;
                table[i] = field.mul(field.sub(table[i], table[i - 1]), denom);
            }
        }

        // Newton form to monomial form, innermost factor first
        let mut coefficients = vec![0u64; n];
        for i in (0..n).rev() {
            // coefficients *= (X - x_i), then += table[i]
            for k in (1..n).rev() {
                coefficients[k] =
                    field.sub(coefficients[k - 1], field.mul(coefficients[k], xs[i]));
            }
            coefficients[0] = field.sub(table[i], field.mul(coefficients[0], xs[i]));
        }

        Some(Self {
            field,
            coefficients,
        })
    }
}
