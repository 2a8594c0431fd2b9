//! End-to-end rule scenarios driven through the public API.

use crawler_core::{
    Actor, ActorClass, ActorId, Characteristics, CharacteristicsModifier, Chest, CombatParams,
    DungeonLevel, Enchantment, Equipment, Game, GameConfig, Inventory, Item, ItemUse,
    ItemUseOutcome, LockPickError, LockPicks, LockPickingParams, PcgRng, Potion, RangeOfValues,
    SpatialDistribution, Tick, Tile, TileKind, TilePosition, ValueModifier, Vector2, Weapon,
    Wearable, WearableKind,
};

const GOBLIN: ActorClass = ActorClass(1);
const SKELETON: ActorClass = ActorClass(2);

fn armour(name: &str, kind: WearableKind, defence: ValueModifier) -> Item {
    Item::new(
        name,
        Wearable::new(kind).with_artefact(CharacteristicsModifier::new().defence(defence)),
    )
}

fn hero_with(weapon: Weapon) -> Actor {
    Actor::player(ActorId::PLAYER, Characteristics::new(100.0, 0.0))
        .with_position(Vector2::new(1.5, 1.5))
        .with_equipment(
            Equipment::builder()
                .item(Item::new("weapon", weapon))
                .build()
                .expect("weapons always equip"),
        )
}

fn arena(hero: Actor, target: Actor) -> DungeonLevel {
    let mut level = DungeonLevel::new(4, 4);
    level.spawn(hero).expect("hero spawns");
    level.spawn(target).expect("target spawns");
    level
}

/// Additive armour stacks; a later absolute value wins regardless.
#[test]
fn scenario_set_after_add_wins() {
    let mut actor = Actor::player(ActorId::PLAYER, Characteristics::new(100.0, 5.0));

    actor
        .equip(armour("leather cap", WearableKind::Helmet, ValueModifier::AddToValue(3.0)))
        .expect("helmet fits");
    assert_eq!(actor.effective_characteristics().defence, 8.0);

    actor
        .equip(armour(
            "mithril plate",
            WearableKind::ChestPlate,
            ValueModifier::SetAbsoluteValue(20.0),
        ))
        .expect("plate fits");
    assert_eq!(actor.effective_characteristics().defence, 20.0);
    assert_eq!(actor.base_characteristics().defence, 5.0);
}

/// Rolled damage lands in the weapon range scaled by the defence factor.
#[test]
fn scenario_damage_scaled_by_defence() {
    // Always hit; reduction factor 100 / (100 + 25) = 0.8.
    let config = GameConfig::new().with_combat(CombatParams::new(0.0, 100.0, 1.0));
    let weapon = Weapon::new(
        RangeOfValues::new(10.0, 20.0).expect("valid range"),
        SpatialDistribution::Circle { radius: 1.5 },
    );

    for seed in 0..200 {
        let target = Actor::enemy(ActorId(1), GOBLIN, 1, Characteristics::new(100.0, 25.0))
            .with_position(Vector2::new(2.5, 1.5));
        let mut level = arena(hero_with(weapon.clone()), target);

        level
            .attack(ActorId::PLAYER, &config, &mut PcgRng::new(seed))
            .expect("attack resolves");
        let lost = 100.0 - level.actor(ActorId(1)).expect("target alive").health();
        assert!((8.0 - 1e-4..=16.0 + 1e-4).contains(&lost), "lost {lost}");
    }

    // A frail target is clamped at zero and removed.
    let frail = Actor::enemy(ActorId(1), GOBLIN, 1, Characteristics::new(5.0, 25.0))
        .with_position(Vector2::new(2.5, 1.5));
    let mut level = arena(hero_with(weapon), frail);
    let results = level
        .attack(ActorId::PLAYER, &config, &mut PcgRng::new(1))
        .expect("attack resolves");
    assert!(results[0].outcome.killed());
    assert!(level.actor(ActorId(1)).is_none());
}

/// The last pick breaks and further attempts are refused.
#[test]
fn scenario_last_pick_breaks() {
    let mut chest = Chest::new(2);
    let mut picks = LockPicks::new(1);
    let never_opens = LockPickingParams::new(0.0, 1.0, 0.0);
    let mut rng = PcgRng::new(8);

    let result = chest
        .try_to_pick(&mut picks, 1.0, &never_opens, &mut rng)
        .expect("one pick left");
    assert!(result.pick_broken);
    assert!(!result.lock_picked);
    assert_eq!(picks.count, 0);

    assert_eq!(
        chest.try_to_pick(&mut picks, 1.0, &never_opens, &mut rng),
        Err(LockPickError::NoPicks)
    );
    assert!(chest.is_locked());
}

/// Shrinking drops out-of-range tiles and keeps the rest intact.
#[test]
fn scenario_resize_keeps_in_bounds_tiles() {
    let mut level = DungeonLevel::new(1, 1);
    level.resize_tiles(10, 10);

    *level.tile_mut(TilePosition::new(4, 4)).expect("in bounds") = Tile::new(TileKind::ClosedDoor)
        .with_item(Item::new("lock picks", LockPicks::new(2)));
    *level.tile_mut(TilePosition::new(7, 2)).expect("in bounds") = Tile::new(TileKind::DownLadder);

    level.resize_tiles(5, 5);

    let kept = level.tile(TilePosition::new(4, 4)).expect("still in bounds");
    assert_eq!(kept.kind, TileKind::ClosedDoor);
    assert_eq!(kept.laying_items.len(), 1);
    assert!(level.tile(TilePosition::new(7, 2)).is_none());
    assert_eq!(level.dimensions().width, 5);
    assert_eq!(level.dimensions().height, 5);
}

/// Enchantments double damage against their class only, before defence.
#[test]
fn scenario_enchantment_targets_class() {
    let config = GameConfig::new().with_combat(CombatParams::new(0.0, 100.0, 1.0));
    let weapon = Weapon::new(
        RangeOfValues::fixed(10.0).expect("valid range"),
        SpatialDistribution::Circle { radius: 1.5 },
    )
    .with_enchantment(Enchantment::new(GOBLIN, 2.0).expect("valid multiplier"));

    let strike = |class: ActorClass| {
        let target = Actor::enemy(ActorId(1), class, 1, Characteristics::new(100.0, 100.0))
            .with_position(Vector2::new(2.5, 1.5));
        let mut level = arena(hero_with(weapon.clone()), target);
        level
            .attack(ActorId::PLAYER, &config, &mut PcgRng::new(3))
            .expect("attack resolves");
        100.0 - level.actor(ActorId(1)).expect("target alive").health()
    };

    // Defence 100 halves whatever the enchantment produced.
    assert_eq!(strike(GOBLIN), 10.0);
    assert_eq!(strike(SKELETON), 5.0);
}

fn single_room_game(player: Actor, enemies: Vec<Actor>, config: GameConfig) -> Game {
    let mut level = DungeonLevel::new(6, 6).with_entry_position(Vector2::new(1.5, 1.5));
    for enemy in enemies {
        level.spawn(enemy).expect("enemy spawns");
    }
    Game::new(vec![level], player, config, 17).expect("game starts")
}

/// A potion that zeroes max health kills its drinker on the spot.
#[test]
fn scenario_fatal_potion_ends_the_game() {
    let lethal = CharacteristicsModifier::new().max_health(ValueModifier::SetAbsoluteValue(0.0));
    let poison = Item::new("hemlock", Potion::new(lethal));
    let inventory = Inventory::with_items(16, [poison]).expect("fits");
    let hero =
        Actor::player(ActorId::PLAYER, Characteristics::new(50.0, 0.0)).with_inventory(inventory);
    let mut game = single_room_game(hero, Vec::new(), GameConfig::new());

    assert_eq!(game.use_item(0), Ok(ItemUseOutcome::Used(ItemUse::Consumed)));
    assert!(!game.is_playing());
    assert!(game.player().is_none());

    let report = game.update();
    assert!(report.died(ActorId::PLAYER));
    assert_eq!(report.deaths.len(), 1);
    assert_eq!(report.deaths[0].killer, None);
    assert_eq!(report.tick, Tick(1));

    let after = game.update();
    assert!(after.is_quiet());
    assert_eq!(after.tick, Tick(1));
}

/// Shedding health through gear outside combat is still a death, reported once.
#[test]
fn scenario_cursed_gear_death_is_reported() {
    let hero = Actor::player(ActorId::PLAYER, Characteristics::new(50.0, 0.0));
    let mut game = single_room_game(hero, Vec::new(), GameConfig::new());
    assert_eq!(game.update().tick, Tick(1));

    let cursed = Item::new(
        "cursed amulet",
        Wearable::new(WearableKind::Amulet).with_artefact(
            CharacteristicsModifier::new().max_health(ValueModifier::AddToValue(-80.0)),
        ),
    );
    let player = game
        .current_level_mut()
        .actor_mut(ActorId::PLAYER)
        .expect("player on level");
    player.equip(cursed).expect("amulet fits");
    assert_eq!(player.health(), 0.0);

    let report = game.update();
    assert!(report.died(ActorId::PLAYER));
    assert_eq!(report.tick, Tick(2));
    assert!(game.player().is_none());
    assert!(game.update().deaths.is_empty());
}

/// Kills made by the player between ticks show up in the next report, and
/// the victim's loot stays where it fell.
#[test]
fn scenario_player_kill_reaches_tick_report() {
    let config = GameConfig::new().with_combat(CombatParams::always_hit_no_reduction());
    let club = Weapon::new(
        RangeOfValues::fixed(5.0).expect("valid range"),
        SpatialDistribution::Circle { radius: 1.5 },
    );
    let rat = Actor::enemy(ActorId(1), GOBLIN, 1, Characteristics::new(1.0, 0.0))
        .with_position(Vector2::new(2.5, 1.5))
        .with_loot([Item::new("lock picks", LockPicks::new(1))]);
    let mut game = single_room_game(hero_with(club), vec![rat], config);

    let results = game.player_attack().expect("attack resolves");
    assert_eq!(results.len(), 1);
    assert!(results[0].outcome.killed());
    assert!(game.current_level().actor(ActorId(1)).is_none());
    let remains = game.current_level().tile(TilePosition::new(2, 1)).expect("in bounds");
    assert_eq!(remains.laying_items.len(), 1);

    let report = game.update();
    assert_eq!(report.attacks, results);
    assert_eq!(report.deaths.len(), 1);
    assert_eq!(report.deaths[0].victim, ActorId(1));
    assert_eq!(report.deaths[0].killer, Some(ActorId::PLAYER));

    assert!(game.update().is_quiet());
}

/// Items on the player's own tile are in reach whatever the tile size.
#[test]
fn scenario_pick_up_on_large_tiles() {
    let mut config = GameConfig::new();
    config.tile_size = 4.0;
    let mut level = DungeonLevel::new(3, 3).with_entry_position(Vector2::new(0.2, 0.2));
    level
        .tile_mut(TilePosition::new(0, 0))
        .expect("in bounds")
        .laying_items
        .push(Item::new("lock picks", LockPicks::new(2)));
    let hero = Actor::player(ActorId::PLAYER, Characteristics::new(50.0, 0.0));
    let mut game = Game::new(vec![level], hero, config, 3).expect("game starts");

    game.pick_up_item(0).expect("own tile is in reach");
    let inventory = game.player().and_then(Actor::inventory).expect("player inventory");
    assert_eq!(inventory.len(), 1);
}
