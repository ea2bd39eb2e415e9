#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    create_game, generate_grid, init_logging, parse_fleet, ComputerPlayer, Game, GameStatus,
    PlayerId, ShipSpec,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::info;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug)]
#[cfg(feature = "std")]
struct MatchArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 10)]
    width: usize,
    #[arg(long, default_value_t = 10)]
    height: usize,
    #[arg(
        long,
        help = "Fleet as Name:len pairs (e.g., Carrier:5,Destroyer:2) or a JSON array"
    )]
    fleet: Option<String>,
}

#[derive(clap::Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a computer vs computer match and print the boards.
    Play {
        #[command(flatten)]
        args: MatchArgs,
    },
    /// Run a computer vs computer match and print a JSON summary.
    Sim {
        #[command(flatten)]
        args: MatchArgs,
    },
}

#[cfg(feature = "std")]
struct MatchSummary {
    winner: PlayerId,
    turns: usize,
    a: ComputerPlayer,
    b: ComputerPlayer,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { args } => {
            if let Some(s) = args.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = seeded_rng(args.seed);
            let mut game = new_game(&mut rng, &args)?;
            println!("Fleet: {}", fleet_names(&game));
            let summary = run_match(&mut rng, &mut game, true)?;
            println!("\n=== GAME OVER after {} turns ===", summary.turns);
            println!("Player A\n{}", game.player_a);
            println!("Player B\n{}", game.player_b);
            let (hits, shots) = winner_stats(&summary);
            println!("Player {} wins ({} hits / {} shots)", summary.winner, hits, shots);
        }
        Commands::Sim { args } => {
            let mut rng = seeded_rng(args.seed);
            let mut game = new_game(&mut rng, &args)?;
            let summary = run_match(&mut rng, &mut game, false)?;
            let result = json!({
                "seed": args.seed,
                "turns": summary.turns,
                "playerA": {"shots": summary.a.shots(), "hits": summary.a.hits()},
                "playerB": {"shots": summary.b.shots(), "hits": summary.b.hits()},
                "winner": summary.winner.to_string(),
            });
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn new_game(rng: &mut SmallRng, args: &MatchArgs) -> anyhow::Result<Game> {
    let fleet = args.fleet.as_deref().map(read_fleet).transpose()?;
    let grid_a = generate_grid(args.width, args.height);
    let grid_b = generate_grid(args.width, args.height);
    create_game(rng, Some(grid_a), Some(grid_b), fleet.as_deref())
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(feature = "std")]
fn read_fleet(raw: &str) -> anyhow::Result<Vec<ShipSpec>> {
    if raw.trim_start().starts_with('[') {
        Ok(serde_json::from_str(raw)?)
    } else {
        Ok(parse_fleet(raw))
    }
}

#[cfg(feature = "std")]
fn fleet_names(game: &Game) -> String {
    game.boats
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(feature = "std")]
fn winner_stats(summary: &MatchSummary) -> (usize, usize) {
    let p = match summary.winner {
        PlayerId::A => &summary.a,
        PlayerId::B => &summary.b,
    };
    (p.hits(), p.shots())
}

/// Alternate turns between two computer players until one fleet is sunk.
#[cfg(feature = "std")]
fn run_match(rng: &mut SmallRng, game: &mut Game, verbose: bool) -> anyhow::Result<MatchSummary> {
    let mut a = ComputerPlayer::new();
    let mut b = ComputerPlayer::new();
    let cells = game.player_a.rows().iter().map(Vec::len).sum::<usize>()
        + game.player_b.rows().iter().map(Vec::len).sum::<usize>();
    // every sweep covers the board once; hit neighbours add at most four each
    let max_turns = cells * 5;

    let mut shooter = PlayerId::A;
    let mut turns = 0;
    loop {
        turns += 1;
        if turns > max_turns {
            return Err(anyhow::anyhow!("match exceeded {} turns", max_turns));
        }
        let player = match shooter {
            PlayerId::A => &mut a,
            PlayerId::B => &mut b,
        };
        let target = player
            .select_target(rng, game.grid(shooter.opponent()))
            .ok_or_else(|| anyhow::anyhow!("player {} has nothing to fire at", shooter))?;
        let outcome = game
            .fire_at(shooter, target)
            .map_err(|e| anyhow::anyhow!(e))?;
        player.handle_shot_result(target, outcome);
        if verbose {
            println!("Player {} fires at {}: {:?}", shooter, target, outcome);
        }

        if let GameStatus::Won(winner) = game.status() {
            info!("player {} won after {} turns", winner, turns);
            if verbose {
                println!("\nPlayer {} view of the opponent:", winner);
                println!("{}", game.grid(winner.opponent()).fog());
            }
            return Ok(MatchSummary {
                winner,
                turns,
                a,
                b,
            });
        }
        shooter = shooter.opponent();
    }
}
