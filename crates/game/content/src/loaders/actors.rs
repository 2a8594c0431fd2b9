//! Actor template loader.
//!
//! Templates describe the player and every enemy type. Equipment and
//! inventory are given as item catalog keys and resolved when an actor is
//! instantiated.

use std::path::Path;

use crawler_core::{
    Actor, ActorClass, ActorId, Characteristics, Equipment, GameConfig, Inventory, Item,
};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::loaders::{ItemCatalog, LoadResult, read_file};

/// Which side a template spawns on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateKind {
    Player,
    Enemy { class: ActorClass, level: u32 },
}

/// Blueprint for an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorTemplate {
    pub kind: TemplateKind,
    pub characteristics: Characteristics,
    /// Item keys equipped at spawn, in equipment order.
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Item keys carried at spawn. Only players have an inventory.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Item keys an enemy may drop on death; one is rolled per spawn.
    #[serde(default)]
    pub drops: Vec<String>,
}

impl ActorTemplate {
    pub fn is_player(&self) -> bool {
        matches!(self.kind, TemplateKind::Player)
    }

    /// Builds a full-health actor from this template.
    pub fn instantiate(
        &self,
        id: ActorId,
        items: &ItemCatalog,
        config: &GameConfig,
    ) -> LoadResult<Actor> {
        let mut equipment = Equipment::builder();
        for item in items.instantiate_all(&self.equipment)? {
            equipment = equipment.item(item);
        }
        let equipment = equipment
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid equipment for actor {}: {}", id, e))?;

        let actor = match self.kind {
            TemplateKind::Player => {
                let inventory = Inventory::with_items(
                    config.lock_pick_stack_limit,
                    items.instantiate_all(&self.inventory)?,
                )
                .map_err(|e| anyhow::anyhow!("Invalid inventory for actor {}: {}", id, e))?;
                if !self.drops.is_empty() {
                    anyhow::bail!("Player templates cannot drop loot (actor {})", id);
                }
                Actor::player(id, self.characteristics).with_inventory(inventory)
            }
            TemplateKind::Enemy { class, level } => {
                if !self.inventory.is_empty() {
                    anyhow::bail!("Enemy templates cannot carry an inventory (actor {})", id);
                }
                Actor::enemy(id, class, level, self.characteristics)
            }
        };

        Ok(actor.with_equipment(equipment))
    }

    /// Picks the item a freshly spawned enemy will leave behind, if any.
    ///
    /// Every key is resolved so a typo fails at load time even when it is
    /// not the one rolled.
    pub fn roll_loot<R: Rng + ?Sized>(
        &self,
        items: &ItemCatalog,
        rng: &mut R,
    ) -> LoadResult<Option<Item>> {
        let mut candidates = items.instantiate_all(&self.drops)?;
        if candidates.is_empty() {
            return Ok(None);
        }
        let pick = rng.gen_range(0..candidates.len());
        Ok(Some(candidates.swap_remove(pick)))
    }
}

/// Loader for actor templates from RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load actor templates from a RON file.
    ///
    /// RON format: `Vec<(String, ActorTemplate)>`
    pub fn load(path: &Path) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let templates: Vec<(String, ActorTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse actor catalog RON: {}", e))?;

        for (index, (key, _)) in templates.iter().enumerate() {
            if templates[..index].iter().any(|(other, _)| other == key) {
                anyhow::bail!("Duplicate actor template '{}'", key);
            }
        }

        Ok(templates)
    }

    /// Finds a template by key.
    pub fn find<'a>(
        templates: &'a [(String, ActorTemplate)],
        key: &str,
    ) -> LoadResult<&'a ActorTemplate> {
        templates
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, template)| template)
            .ok_or_else(|| anyhow::anyhow!("Unknown actor template '{}'", key))
    }
}
