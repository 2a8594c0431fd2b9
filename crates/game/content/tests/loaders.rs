//! Loader behaviour against hand-written data directories.

use std::fs;
use std::path::Path;

use crawler_content::ContentFactory;
use crawler_core::{ActorClass, ActorId, TilePosition};
use tempfile::TempDir;

const ITEMS: &str = r#"(items: [
    (key: "stick", item: (name: "Stick", kind: Weapon((
        damage_range: (min: 1.0, max: 2.0),
        distribution: Circle(radius: 1.0),
    )))),
    (key: "picks", item: (name: "Picks", kind: LockPicks((count: 2)))),
])"#;

const ACTORS: &str = r#"[
    ("hero", (
        kind: Player,
        characteristics: (max_health: 10.0, defence: 0.0),
        equipment: ["stick"],
    )),
    ("bat", (
        kind: Enemy(class: ActorClass(9), level: 1),
        characteristics: (max_health: 3.0, defence: 0.0),
        drops: ["picks"],
    )),
]"#;

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create data dir");
    }
    fs::write(path, content).expect("write data file");
}

fn data_dir(map: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "config.toml", "tile_size = 2.0\n");
    write(dir.path(), "campaign.ron", r#"(player: "hero", levels: ["only"])"#);
    write(dir.path(), "items.ron", ITEMS);
    write(dir.path(), "actors.ron", ACTORS);
    write(dir.path(), "maps/only.ron", map);
    dir
}

#[test]
fn level_is_populated_from_placements() {
    let dir = data_dir(
        r#"(
            layout: ["....", "...."],
            entry: (0, 0),
            chests: [(at: (3, 1), level: 2, items: ["picks"])],
            items: [(at: (1, 0), item: "picks")],
            enemies: [(at: (2, 1), template: "bat")],
        )"#,
    );

    let game = ContentFactory::new(dir.path())
        .build_game(3)
        .expect("game should build");
    let level = game.current_level();

    assert_eq!(level.tile_size(), 2.0);
    assert_eq!(level.entry_position, level.tile_center(TilePosition::new(0, 0)));

    let bat = level
        .actors()
        .iter()
        .find(|actor| !actor.is_player())
        .expect("bat spawned");
    assert_eq!(bat.actor_class, ActorClass(9));
    assert_eq!(
        level.get_tile_coordinates(bat.position),
        Some(TilePosition::new(2, 1))
    );

    let floor = level.tile(TilePosition::new(1, 0)).expect("tile exists");
    assert_eq!(floor.laying_items.len(), 1);
    let chest_tile = level.tile(TilePosition::new(3, 1)).expect("tile exists");
    assert!(chest_tile.building.is_some());
}

#[test]
fn enemies_leave_their_loot_behind() {
    let dir = data_dir(
        r#"(layout: ["...."], entry: (0, 0), enemies: [(at: (3, 0), template: "bat")])"#,
    );

    let mut game = ContentFactory::new(dir.path())
        .build_game(5)
        .expect("game should build");
    let bat = game
        .current_level()
        .actors()
        .iter()
        .find(|actor| !actor.is_player())
        .map(|actor| actor.id)
        .expect("bat spawned");

    game.current_level_mut()
        .die(bat, Some(ActorId::PLAYER))
        .expect("bat dies");
    let floor = game
        .current_level()
        .tile(TilePosition::new(3, 0))
        .expect("tile exists");
    assert_eq!(floor.laying_items.len(), 1);
    assert_eq!(floor.laying_items[0].name, "Picks");
}

#[test]
fn unknown_item_reference_names_the_level() {
    let dir = data_dir(r#"(layout: ["..."], entry: (0, 0), items: [(at: (1, 0), item: "ghost")])"#);

    let err = ContentFactory::new(dir.path()).build_game(0).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("only"), "{message}");
    assert!(message.contains("ghost"), "{message}");
}

#[test]
fn player_template_cannot_spawn_as_enemy() {
    let dir = data_dir(
        r#"(layout: ["..."], entry: (0, 0), enemies: [(at: (2, 0), template: "hero")])"#,
    );

    let err = ContentFactory::new(dir.path()).build_game(0).unwrap_err();
    assert!(err.to_string().contains("cannot spawn"));
}

#[test]
fn missing_files_report_their_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ContentFactory::new(dir.path()).load_items().unwrap_err();
    assert!(err.to_string().contains("items.ron"));
}
