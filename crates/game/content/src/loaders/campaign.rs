//! Campaign loader: who plays and which maps form the dungeon.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Campaign description for RON files.
///
/// `levels` are map names in descent order: a down ladder on level `i` leads
/// to level `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Actor template key used for the player character.
    pub player: String,
    pub levels: Vec<String>,
}

/// Loader for campaign descriptions from RON files.
pub struct CampaignLoader;

impl CampaignLoader {
    pub fn load(path: &Path) -> LoadResult<Campaign> {
        let content = read_file(path)?;
        let campaign: Campaign = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse campaign RON: {}", e))?;

        if campaign.levels.is_empty() {
            anyhow::bail!("Campaign {} lists no levels", path.display());
        }

        Ok(campaign)
    }
}
