use std::borrow::Borrow;

use validator::ValidationError;

/// `range` compares, and every comparison with NaN is false, so non-finite
/// coordinates have to be rejected separately.
pub fn finite<T: Borrow<f64>>(value: T) -> Result<(), ValidationError> {
    if value.borrow().is_finite() {
        Ok(())
    } else {
        let mut error = ValidationError::new("finite");
        error.message = Some("Must be a finite number".into());
        Err(error)
    }
}
