use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProsuiteError {
    #[error("Cannot compute {metric}: denominator is zero")]
    ZeroDenominator { metric: &'static str },
}

/// Integer percentage of `part` over `whole`, rounded half up.
///
/// A zero `whole` is reported as [`ProsuiteError::ZeroDenominator`] so each
/// caller decides how an empty pool should read.
pub fn percentage(part: u32, whole: u32, metric: &'static str) -> Result<u32, ProsuiteError> {
    if whole == 0 {
        return Err(ProsuiteError::ZeroDenominator { metric });
    }
    let part = u64::from(part) * 100;
    let whole = u64::from(whole);
    Ok(((part + whole / 2) / whole) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(percentage(1, 3, "x").unwrap(), 33);
        assert_eq!(percentage(2, 3, "x").unwrap(), 67);
        assert_eq!(percentage(1, 8, "x").unwrap(), 13);
        assert_eq!(percentage(10, 10, "x").unwrap(), 100);
    }

    #[test]
    fn zero_denominator_is_an_error() {
        let err = percentage(3, 0, "license utilization").unwrap_err();
        assert!(matches!(
            err,
            ProsuiteError::ZeroDenominator { metric: "license utilization" }
        ));
        assert_eq!(
            err.to_string(),
            "Cannot compute license utilization: denominator is zero"
        );
    }
}
