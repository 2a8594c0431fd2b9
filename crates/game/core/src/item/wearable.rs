//! Wearables (armour, shields, trinkets).

use rand::Rng;
use strum::{EnumCount, EnumIter};

use crate::common::Vector2;
use crate::spatial::{Placement, SpatialDistribution};
use crate::stats::CharacteristicsModifier;

use super::RangeOfValues;

/// Equipment slot a wearable occupies. Exactly one slot per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WearableKind {
    Helmet,
    ChestPlate,
    Leggings,
    Boots,
    Shield,
    Amulet,
}

impl WearableKind {
    /// Slot index in enumeration order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Wearable payload.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wearable {
    pub kind: WearableKind,
    /// Passive bonus applied to the wearer while equipped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub artefact: Option<CharacteristicsModifier>,
    /// Extra defence rolled against every incoming hit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub defence_range: Option<RangeOfValues>,
    /// Block arc in the wearer's local frame. When set, the defence roll only
    /// applies to attackers inside it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distribution: Option<SpatialDistribution>,
}

impl Wearable {
    pub fn new(kind: WearableKind) -> Self {
        Self {
            kind,
            artefact: None,
            defence_range: None,
            distribution: None,
        }
    }

    pub fn with_artefact(mut self, artefact: CharacteristicsModifier) -> Self {
        self.artefact = Some(artefact);
        self
    }

    pub fn with_defence_range(mut self, range: RangeOfValues) -> Self {
        self.defence_range = Some(range);
        self
    }

    pub fn with_distribution(mut self, distribution: SpatialDistribution) -> Self {
        self.distribution = Some(distribution);
        self
    }

    /// Whether this wearable guards against an attack coming from `attacker`.
    pub fn covers(&self, wearer: &Placement, attacker: Vector2) -> bool {
        self.distribution
            .as_ref()
            .is_none_or(|arc| arc.affects_world(wearer, attacker))
    }

    /// Defence contributed against an attack from `attacker`.
    pub fn generate_defence<R: Rng + ?Sized>(
        &self,
        wearer: &Placement,
        attacker: Vector2,
        rng: &mut R,
    ) -> f32 {
        match &self.defence_range {
            Some(range) if self.covers(wearer, attacker) => range.get_random(rng),
            _ => 0.0,
        }
    }
}
