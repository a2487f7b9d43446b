/// Applies logarithmic rubber-band damping to a drag distance.
///
/// Movement up to `limit` passes through unchanged; beyond it the distance
/// grows only logarithmically, so however far the drag goes the damped
/// result creeps rather than tracks. Used for drags that stretch an entry
/// away from its exit edge.
///
/// # Arguments
///
/// * `raw` - Raw drag distance in rows (negative values clamp to zero)
/// * `limit` - Distance at which damping kicks in, at least 1.0
///
/// # Returns
///
/// The damped distance in rows
pub fn rubber_band(raw: f32, limit: f32) -> f32 {
	let raw = raw.max(0.0);
	let limit = limit.max(1.0);
	if raw <= limit {
		raw
	} else {
		limit * (1.0 + (raw / limit).log10())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_identity_below_limit() {
		assert_eq!(rubber_band(2.5, 4.0), 2.5);
		assert_eq!(rubber_band(4.0, 4.0), 4.0);
	}

	#[test]
	fn test_damped_beyond_limit() {
		let damped = rubber_band(8.0, 4.0);
		assert!(damped < 8.0);
		assert!(damped > 4.0);
	}

	#[test]
	fn test_decade_beyond_limit_adds_one_limit() {
		assert!((rubber_band(40.0, 4.0) - 8.0).abs() < 1e-4);
	}

	#[test]
	fn test_negative_clamps_to_zero() {
		assert_eq!(rubber_band(-3.0, 4.0), 0.0);
	}
}
