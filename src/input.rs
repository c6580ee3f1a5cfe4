//! Array acquisition: textual parsing, file load/save, random generation.
//!
//! Arrays travel as whitespace-delimited integer text everywhere outside the
//! sort core (user entry, files, store records); this module is the single
//! place that converts between that form and `Vec<i64>`.

use std::fs;
use std::path::Path;

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// A token that does not parse as an `i64`.
    #[error("not an integer: {0:?}")]
    InvalidToken(String),
    /// `min > max` leaves nothing to draw from.
    #[error("empty value range: {min} > {max}")]
    EmptyRange { min: i64, max: i64 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses whitespace-delimited integers. Empty or whitespace-only text is an
/// empty array, not an error.
pub fn parse_values(text: &str) -> Result<Vec<i64>, InputError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| InputError::InvalidToken(token.to_owned()))
        })
        .collect()
}

/// Space-joined textual form, the inverse of [`parse_values`].
pub fn format_values(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn load_values(path: &Path) -> Result<Vec<i64>, InputError> {
    parse_values(&fs::read_to_string(path)?)
}

pub fn save_values(path: &Path, values: &[i64]) -> Result<(), InputError> {
    fs::write(path, format_values(values))?;
    Ok(())
}

/// Draws `len` values uniformly from `min..=max`.
pub fn random_values<R: Rng>(
    len: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<Vec<i64>, InputError> {
    if min > max {
        return Err(InputError::EmptyRange { min, max });
    }
    Ok((0..len).map(|_| rng.random_range(min..=max)).collect())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn parses_and_formats_round_trip() {
        let values = parse_values(" 170  45\t75\n90 ").unwrap();
        assert_eq!(values, [170, 45, 75, 90]);
        assert_eq!(format_values(&values), "170 45 75 90");
    }

    #[test]
    fn empty_text_is_an_empty_array() {
        assert_eq!(parse_values("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_values("   \n\t ").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn reports_the_offending_token() {
        let err = parse_values("1 2 three 4").unwrap_err();
        match err {
            InputError::InvalidToken(token) => assert_eq!(token, "three"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_values_parse() {
        assert_eq!(parse_values("-5 0 5").unwrap(), [-5, 0, 5]);
    }

    #[test]
    fn random_values_respect_the_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = random_values(100, 0, 1000, &mut rng).unwrap();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (0..=1000).contains(v)));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            random_values(1, 10, 0, &mut rng),
            Err(InputError::EmptyRange { min: 10, max: 0 })
        ));
    }
}
