//! Data-driven content definitions and loaders.
//!
//! This crate turns RON/TOML data files into `crawler-core` values:
//! - Item catalogs (RON)
//! - Actor templates for the player and enemies (RON)
//! - Level layouts with chests, floor items and enemy spawns (RON)
//! - Campaign description: which template plays and in which level order (RON)
//! - Game configuration (TOML)
//!
//! Content is resolved into a ready-to-run [`crawler_core::Game`] by
//! [`ContentFactory`]; nothing here participates in the simulation itself.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorLoader, ActorTemplate, Campaign, CampaignLoader, ConfigLoader, ContentFactory,
    ItemCatalog, ItemLoader, MapData, MapLoader, TemplateKind,
};
