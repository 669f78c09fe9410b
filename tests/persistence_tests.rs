//! Save/restore integration tests.
//!
//! Restoring must put every player back on the tile they left, and bad
//! tile data must fall back to tile 1 rather than fail the load.

use ladder_race::board::{TileId, VariantConfig};
use ladder_race::core::{GameError, PlayerId};
use ladder_race::engine::GameBuilder;
use ladder_race::save::SaveGame;

fn game_in_progress(seed: u64, turns: usize) -> ladder_race::GameEngine {
    let mut game = GameBuilder::new()
        .player("Ada", "red")
        .player("Bo", "blue")
        .player("Cy", "green")
        .variant(VariantConfig::classic())
        .seed(seed)
        .build()
        .unwrap();
    for _ in 0..turns {
        if game.is_over() {
            break;
        }
        game.take_turn().unwrap();
    }
    game
}

/// Positions, waiting flags and turn order survive a JSON round trip.
#[test]
fn test_json_round_trip_restores_positions() {
    for seed in [1u64, 2, 3, 4, 5] {
        let game = game_in_progress(seed, 10);
        let json = SaveGame::capture(&game).unwrap().to_json().unwrap();
        let restored = SaveGame::from_json(&json).unwrap().restore().unwrap();

        for id in PlayerId::all(3) {
            assert_eq!(restored.position(id).unwrap(), game.position(id).unwrap());
            assert_eq!(
                restored.player(id).unwrap().will_wait_turn(),
                game.player(id).unwrap().will_wait_turn()
            );
            assert_eq!(restored.player(id).unwrap().name(), game.player(id).unwrap().name());
        }
        assert_eq!(restored.current_player(), game.current_player());
        assert_eq!(restored.turn_number(), game.turn_number());
        assert_eq!(restored.winner(), game.winner());
    }
}

/// The binary encoding restores the same game as JSON.
#[test]
fn test_binary_round_trip() {
    let game = game_in_progress(8, 12);
    let save = SaveGame::capture(&game).unwrap();

    let from_bytes = SaveGame::from_bytes(&save.to_bytes().unwrap()).unwrap();
    assert_eq!(from_bytes, save);
}

/// A restored game plays on exactly like the original.
#[test]
fn test_restored_game_continues_identically() {
    let mut original = game_in_progress(21, 9);
    let mut restored = SaveGame::capture(&original).unwrap().restore().unwrap();

    let a = original.play_to_completion(5_000).unwrap();
    let b = restored.play_to_completion(5_000).unwrap();
    assert_eq!(a, b);
    assert_eq!(original.turn_number(), restored.turn_number());
}

/// Hand-edited saves with broken tile ids load with those players on tile 1.
#[test]
fn test_malformed_tiles_fall_back_to_start() {
    let game = game_in_progress(3, 9);
    let mut save = SaveGame::capture(&game).unwrap();
    save.players[0].tile = Some("not-a-tile".to_string());
    save.players[1].tile = Some("9000".to_string());
    save.players[2].tile = None;

    let restored = save.restore().unwrap();
    for id in PlayerId::all(3) {
        assert_eq!(restored.position(id).unwrap(), TileId::START);
    }
}

/// Missing optional fields in JSON take their defaults.
#[test]
fn test_minimal_json_save() {
    let json = r#"{
        "variant": { "name": "tiny", "length": 10, "winning_tile": 10 },
        "players": [
            { "name": "Ada", "token": "red", "tile": "4" },
            { "name": "Bo", "token": "blue" }
        ],
        "current": 1,
        "turn_number": 3
    }"#;

    let game = SaveGame::from_json(json).unwrap().restore().unwrap();
    assert_eq!(game.position(PlayerId::new(0)).unwrap(), TileId::new(4));
    assert_eq!(game.position(PlayerId::new(1)).unwrap(), TileId::START);
    assert_eq!(game.current_player(), PlayerId::new(1));
    assert!(!game.is_over());
}

/// A save whose variant is itself broken cannot be restored.
#[test]
fn test_invalid_variant_in_save() {
    let game = game_in_progress(4, 3);
    let mut save = SaveGame::capture(&game).unwrap();
    save.variant.winning_tile = TileId::new(500);

    assert!(matches!(save.restore(), Err(GameError::InvalidLayout { .. })));
}
