// src/core/numeric.rs
//
// Permissive number coercion for transcript cells. Anything that is not a
// plain decimal (blank, "INC", "DRP", "5.0*", …) becomes `None` instead of an
// error; callers treat `None` as "not a number".

/// Parse a cell as `f64`.
/// Accepts surrounding whitespace, a leading sign, decimals and exponents.
/// `NaN` spelled out in the cell is still "not a number".
pub fn to_numeric(cell: &str) -> Option<f64> {
    let t = cell.trim();
    if t.is_empty() { return None; }
    match t.parse::<f64>() {
        Ok(v) if v.is_nan() => None,
        Ok(v) => Some(v),
        Err(_) => None,
    }
}

/// `a * b`, with a missing operand propagating.
#[inline]
pub fn mul(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    a.zip(b).map(|(x, y)| x * y)
}

/// Sum that skips missing values; an all-missing input sums to 0.0.
pub fn sum_present<I: IntoIterator<Item = Option<f64>>>(vals: I) -> f64 {
    vals.into_iter().flatten().fold(0.0, |acc, v| acc + v)
}

/// Weighted mean with the zero-units fallback.
/// Non-positive totals yield 0.0, never NaN or ±inf.
#[inline]
pub fn weighted_mean(weighted_sum: f64, total_units: f64) -> f64 {
    if total_units > 0.0 { weighted_sum / total_units } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_cells() {
        assert_eq!(to_numeric("1.25"), Some(1.25));
        assert_eq!(to_numeric(" 3 "), Some(3.0));
        assert_eq!(to_numeric("-1"), Some(-1.0));
        assert_eq!(to_numeric("+2.5"), Some(2.5));
        assert_eq!(to_numeric(".5"), Some(0.5));
        assert_eq!(to_numeric("1e1"), Some(10.0));
    }

    #[test]
    fn non_numeric_cells() {
        for cell in ["", "   ", "INC", "DRP", "5.0*", "(3)", "1,000", "NaN", "—"] {
            assert_eq!(to_numeric(cell), None, "cell {cell:?}");
        }
    }

    #[test]
    fn mul_propagates_missing() {
        assert_eq!(mul(Some(1.5), Some(3.0)), Some(4.5));
        assert_eq!(mul(None, Some(3.0)), None);
        assert_eq!(mul(Some(1.5), None), None);
    }

    #[test]
    fn sums_skip_missing() {
        assert_eq!(sum_present([Some(1.0), None, Some(2.0)]), 3.0);
        assert_eq!(sum_present(Vec::<Option<f64>>::new()), 0.0);
        assert_eq!(sum_present([None, None]), 0.0);
    }

    #[test]
    fn weighted_mean_zero_units() {
        assert_eq!(weighted_mean(6.0, 3.0), 2.0);
        assert_eq!(weighted_mean(0.0, 0.0), 0.0);
        assert_eq!(weighted_mean(5.0, -1.0), 0.0);
    }
}
