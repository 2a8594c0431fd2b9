//! Inclusive numeric ranges for damage and defence rolls.

use rand::Rng;

use super::ItemError;

/// Inclusive `[min, max]` range with `0 <= min <= max`.
///
/// Invalid bounds are rejected at construction, so a weapon can never hold a
/// range that would only fail at attack time.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RangeSpec"))]
pub struct RangeOfValues {
    min: f32,
    max: f32,
}

impl RangeOfValues {
    pub fn new(min: f32, max: f32) -> Result<Self, ItemError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ItemError::InvalidRange { min, max });
        }
        if min < 0.0 {
            return Err(ItemError::NegativeBound { min, max });
        }
        Ok(Self { min, max })
    }

    /// Degenerate range that always yields `value`.
    pub fn fixed(value: f32) -> Result<Self, ItemError> {
        Self::new(value, value)
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Uniform draw from `[min, max]`, inclusive.
    pub fn get_random<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.min == self.max {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Unvalidated wire form of [`RangeOfValues`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RangeSpec {
    min: f32,
    max: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeSpec> for RangeOfValues {
    type Error = ItemError;

    fn try_from(spec: RangeSpec) -> Result<Self, Self::Error> {
        Self::new(spec.min, spec.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    #[test]
    fn rejects_inverted_and_negative_bounds() {
        assert_eq!(
            RangeOfValues::new(5.0, 1.0),
            Err(ItemError::InvalidRange { min: 5.0, max: 1.0 })
        );
        assert_eq!(
            RangeOfValues::new(-1.0, 1.0),
            Err(ItemError::NegativeBound { min: -1.0, max: 1.0 })
        );
        assert!(RangeOfValues::new(f32::NAN, 1.0).is_err());
    }

    #[test]
    fn samples_stay_within_bounds() {
        let range = RangeOfValues::new(10.0, 20.0).unwrap();
        let mut rng = PcgRng::new(0xdead_beef);
        for _ in 0..10_000 {
            let value = range.get_random(&mut rng);
            assert!(range.contains(value), "{value} escaped [10, 20]");
        }
    }

    #[test]
    fn fixed_range_is_constant() {
        let range = RangeOfValues::fixed(4.0).unwrap();
        let mut rng = PcgRng::new(1);
        assert_eq!(range.get_random(&mut rng), 4.0);
    }
}
