use broadside::{create_game, ComputerPlayer, GameStatus, PlayerId, StrategyState};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn computer_vs_computer_game_finishes() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = create_game(&mut rng, None, None, None).unwrap();
    let mut a = ComputerPlayer::new();
    let mut b = ComputerPlayer::new();

    let mut turns = 0;
    loop {
        turns += 1;
        let target = a.select_target(&mut rng, &game.player_b).unwrap();
        let res = game.fire_at(PlayerId::A, target).unwrap();
        a.handle_shot_result(target, res);
        if game.status() != GameStatus::InProgress {
            break;
        }
        let target = b.select_target(&mut rng, &game.player_a).unwrap();
        let res = game.fire_at(PlayerId::B, target).unwrap();
        b.handle_shot_result(target, res);
        if game.status() != GameStatus::InProgress {
            break;
        }
        if turns > 200 {
            panic!("game took too many turns");
        }
    }
    let winner = match game.status() {
        GameStatus::Won(p) => p,
        GameStatus::InProgress => unreachable!(),
    };
    let loser_grid = game.grid(winner.opponent());
    assert!(loser_grid.all_sunk());
    let winner_player = if winner == PlayerId::A { &a } else { &b };
    assert_eq!(winner_player.hits(), loser_grid.ship_cells());
}

#[test]
fn resumed_player_continues_its_plan() {
    let mut rng = SmallRng::seed_from_u64(8);
    let game = create_game(&mut rng, None, None, None).unwrap();
    let mut player = ComputerPlayer::new();
    player.select_target(&mut rng, &game.player_b);

    let saved = StrategyState::from_bytes(&player.state().to_bytes().unwrap()).unwrap();
    let mut resumed = ComputerPlayer::from_state(saved);
    let expected = player.state().next.front().or(player.state().plan.front()).copied();
    assert_eq!(resumed.select_target(&mut rng, &game.player_b), expected);
}

#[test]
fn placed_ships_are_reported() {
    let mut rng = SmallRng::seed_from_u64(4);
    let mut grid = broadside::generate_grid(10, 10);
    let fleet = broadside::standard_fleet();
    let placements = ComputerPlayer::new()
        .place_ships(&mut rng, &mut grid, &fleet)
        .unwrap();
    assert_eq!(placements.len(), fleet.len());
    for (ship, p) in fleet.iter().zip(&placements) {
        let cell = grid.cell(p.origin).unwrap();
        assert_eq!(cell.name.as_deref(), Some(ship.name.as_str()));
    }
}
