use broadside::{
    computer_strategy, create_game, generate_grid, Cell, Game, ShipSpec, StrategyState,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn cells_use_camel_case_fields() {
    let json = serde_json::to_value(Cell::water()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"isShip": false, "isDiscovered": false, "length": null, "name": null})
    );
}

#[test]
fn grid_serializes_as_nested_rows() {
    let json = serde_json::to_value(generate_grid(3, 2)).unwrap();
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.as_array().unwrap().len() == 3));
}

#[test]
fn ship_specs_parse_from_json() {
    let specs: Vec<ShipSpec> =
        serde_json::from_str(r#"[{"name": "Carrier", "length": 5}, {"length": 2}, {}]"#).unwrap();
    assert_eq!(specs[0], ShipSpec::new("Carrier", 5));
    assert_eq!(specs[1], ShipSpec::unnamed(2));
    assert_eq!(specs[2], ShipSpec::default());
}

#[test]
fn game_roundtrip_through_json() {
    let mut rng = SmallRng::seed_from_u64(77);
    let game = create_game(&mut rng, None, None, None).unwrap();
    let text = serde_json::to_string(&game).unwrap();
    assert!(text.contains("\"playerA\""));
    let back: Game = serde_json::from_str(&text).unwrap();
    assert_eq!(back, game);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn strategy_state_bincode_roundtrip(seed in any::<u64>(), turns in 0usize..40) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = create_game(&mut rng, None, None, None).unwrap();
        let mut state = StrategyState::new();
        for _ in 0..turns {
            state = computer_strategy(&mut rng, Some(state), Some(&game.player_b));
        }
        let bytes = state.to_bytes().unwrap();
        let decoded = StrategyState::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded, state);
    }
}
