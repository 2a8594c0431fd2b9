//! Value modifiers and the characteristics fold.
//!
//! A [`CharacteristicsModifier`] carries at most one [`ValueModifier`] per
//! characteristic. [`effective`] folds an ordered sequence of them onto a base
//! value field by field:
//!
//! ```text
//! running = base.field
//! for source in sources:
//!     match source.field:
//!         None                   => running
//!         AddToValue(v)          => running + v
//!         SetAbsoluteValue(v)    => v            // earlier accumulation discarded
//! ```

use super::characteristics::Characteristics;

/// Primitive transform applied to a single scalar stat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueModifier {
    /// Replaces the value outright.
    SetAbsoluteValue(f32),
    /// Adds to the value.
    AddToValue(f32),
}

impl ValueModifier {
    /// Apply this modifier to `base`. Pure.
    pub fn apply(&self, base: f32) -> f32 {
        match *self {
            ValueModifier::SetAbsoluteValue(value) => value,
            ValueModifier::AddToValue(value) => base + value,
        }
    }
}

/// Apply an optional modifier; an absent modifier is the identity.
#[inline]
fn apply_optional(modifier: Option<&ValueModifier>, base: f32) -> f32 {
    modifier.map_or(base, |m| m.apply(base))
}

/// Per-characteristic modifiers carried by an item or potion.
///
/// A `None` field leaves the corresponding characteristic unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacteristicsModifier {
    pub max_health: Option<ValueModifier>,
    pub defence: Option<ValueModifier>,
    pub speed: Option<ValueModifier>,
    pub luck: Option<ValueModifier>,
}

impl CharacteristicsModifier {
    /// Create a modifier that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_health(mut self, modifier: ValueModifier) -> Self {
        self.max_health = Some(modifier);
        self
    }

    pub fn defence(mut self, modifier: ValueModifier) -> Self {
        self.defence = Some(modifier);
        self
    }

    pub fn speed(mut self, modifier: ValueModifier) -> Self {
        self.speed = Some(modifier);
        self
    }

    pub fn luck(mut self, modifier: ValueModifier) -> Self {
        self.luck = Some(modifier);
        self
    }

    /// Returns true if no field carries a modifier.
    pub fn is_identity(&self) -> bool {
        self.max_health.is_none()
            && self.defence.is_none()
            && self.speed.is_none()
            && self.luck.is_none()
    }

    /// Apply every present field modifier to `value` in place.
    pub fn apply(&self, value: &mut Characteristics) {
        value.max_health = apply_optional(self.max_health.as_ref(), value.max_health);
        value.defence = apply_optional(self.defence.as_ref(), value.defence);
        value.speed = apply_optional(self.speed.as_ref(), value.speed);
        value.luck = apply_optional(self.luck.as_ref(), value.luck);
    }
}

/// Fold `sources` left-to-right onto `base`, each field independently.
///
/// The result depends only on `base` and the order of `sources`; callers pass
/// equipped weapons first, then wearables in slot order.
pub fn effective<'a, I>(base: &Characteristics, sources: I) -> Characteristics
where
    I: IntoIterator<Item = &'a CharacteristicsModifier>,
{
    sources.into_iter().fold(*base, |mut running, modifier| {
        modifier.apply(&mut running);
        running
    })
}
