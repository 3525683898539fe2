//! Grouped finite-difference projection
//!
//! Extrapolates from a seed value in groups of [`PROJECTION_GROUP_SIZE`]
//! steps. Every step in a group adds the same velocity; acceleration is
//! folded into the velocity once the group completes.

use crate::{MathError, Result, PROJECTION_GROUP_SIZE};

/// Number of values [`project`] returns for a requested horizon.
///
/// Always the smallest multiple of the group size that covers `horizon`.
pub fn projected_len(horizon: usize) -> usize {
    horizon.div_ceil(PROJECTION_GROUP_SIZE) * PROJECTION_GROUP_SIZE
}

/// Project `horizon` days forward from `seed`.
///
/// Each step truncates `current + velocity` toward zero. The output length is
/// rounded up to a whole number of groups, so a horizon of 5 yields 6 values.
///
/// # Errors
///
/// Returns [`MathError::DegenerateInput`] if any input is NaN or infinite.
pub fn project(seed: f64, horizon: usize, velocity: f64, acceleration: f64) -> Result<Vec<i64>> {
    for (name, value) in [
        ("seed", seed),
        ("velocity", velocity),
        ("acceleration", acceleration),
    ] {
        if !value.is_finite() {
            return Err(MathError::DegenerateInput(format!(
                "Projection {} must be finite, got {}",
                name, value
            )));
        }
    }

    let mut projection = Vec::new();
    let mut current = seed;
    let mut velocity = velocity;

    while projection.len() < horizon {
        for _ in 0..PROJECTION_GROUP_SIZE {
            let next = (current + velocity).trunc() as i64;
            projection.push(next);
            current = next as f64;
        }
        velocity += acceleration;
    }

    Ok(projection)
}
