use log::debug;
use thiserror::Error;

/// Saisie du nombre de particules refusée.
///
/// Le lot de particules courant est conservé quand cette erreur est levée.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CountError {
    #[error("particle count is empty")]
    Empty,
    #[error("particle count '{0}' is not an integer")]
    NotANumber(String),
    #[error("particle count {0} is negative")]
    Negative(i64),
}

/// Valide la saisie brute (non fiable) du nombre de particules.
///
/// Les espaces autour sont ignorés. Une valeur au-dessus de `max_count` est
/// ramenée à `max_count`.
pub fn parse_particle_count(raw: &str, max_count: usize) -> Result<usize, CountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CountError::Empty);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| CountError::NotANumber(trimmed.to_string()))?;

    if value < 0 {
        return Err(CountError::Negative(value));
    }

    let count = usize::try_from(value).unwrap_or(usize::MAX);
    if count > max_count {
        debug!("particle count {} clamped to {}", count, max_count);
        return Ok(max_count);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_counts() {
        assert_eq!(parse_particle_count("0", 100), Ok(0));
        assert_eq!(parse_particle_count("3", 100), Ok(3));
        assert_eq!(parse_particle_count("  42\n", 100), Ok(42));
        assert_eq!(parse_particle_count("+7", 100), Ok(7));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_particle_count("", 100), Err(CountError::Empty));
        assert_eq!(parse_particle_count("   ", 100), Err(CountError::Empty));
        assert_eq!(
            parse_particle_count("abc", 100),
            Err(CountError::NotANumber("abc".into()))
        );
        assert_eq!(
            parse_particle_count("12.5", 100),
            Err(CountError::NotANumber("12.5".into()))
        );
        assert_eq!(parse_particle_count("-5", 100), Err(CountError::Negative(-5)));
    }

    #[test]
    fn test_parse_clamps_to_max() {
        assert_eq!(parse_particle_count("1000000", 5000), Ok(5000));
        assert_eq!(parse_particle_count("5000", 5000), Ok(5000));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CountError::Negative(-5).to_string(),
            "particle count -5 is negative"
        );
        assert_eq!(
            CountError::NotANumber("abc".into()).to_string(),
            "particle count 'abc' is not an integer"
        );
    }
}
