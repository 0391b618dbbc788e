use rand::Rng;

use crate::{
    convert::to_numeral,
    error::ConversionError,
    numeral::{MAX_VALUE, MIN_VALUE},
};

/// Draws a random numeral in `[min, max]` from the thread-local generator.
///
/// Returns the canonical numeral together with its decimal.
///
/// # Errors
/// See [`random_numeral_with`].
pub fn random_numeral(min: i64, max: i64) -> Result<(String, i64), ConversionError> {
    random_numeral_with(&mut rand::thread_rng(), min, max)
}

/// Draws a random numeral in `[min, max]` from `rng`.
///
/// The bounds are checked before anything is drawn.
///
/// # Errors
/// Returns [`ConversionError::InvalidBounds`] if either bound is outside
/// `[1, 3999]` or `min` is greater than `max`.
///
/// # Example
/// ```
/// use numera::convert::random_numeral_with;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(random_numeral_with(&mut rng, 1, 1).unwrap(), ("I".to_string(), 1));
/// assert!(random_numeral_with(&mut rng, 5, 1).is_err());
/// ```
pub fn random_numeral_with<R>(rng: &mut R, min: i64, max: i64) -> Result<(String, i64), ConversionError>
    where R: Rng
{
    let range = i64::from(MIN_VALUE)..=i64::from(MAX_VALUE);
    if !range.contains(&min) || !range.contains(&max) {
        return Err(ConversionError::InvalidBounds { details: format!("values must be between {MIN_VALUE} and {MAX_VALUE}, found {min} and {max}") });
    }
    if min > max {
        return Err(ConversionError::InvalidBounds { details: format!("minimum {min} cannot be greater than maximum {max}") });
    }

    let number = rng.gen_range(min..=max);
    Ok((to_numeral(number)?, number))
}
