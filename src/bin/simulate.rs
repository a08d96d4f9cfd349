use std::error::Error;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crazy8::bots::registry::seat_seed;
use crazy8::{
    Bot, DEFAULT_SEED, Game, GameConfig, HeuristicBot, Side, create_bot_from_spec,
    VisualOptions, describe_action, label_for_spec, render_state_with_options,
};

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play a bot against the computer opponent over many rounds."
)]
struct Args {
    /// Number of rounds to simulate
    #[arg(short = 'g', long = "games", default_value_t = 100)]
    games: usize,

    /// Base RNG seed (deck and bot RNGs are derived from it per round)
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Safety cap on turns per round; capped rounds count as aborted
    #[arg(long = "max-turns", default_value_t = 1000)]
    max_turns: usize,

    /// Print every state and move
    #[arg(long = "visualize")]
    visualize: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Bot spec for the player seat: random[:seed] or heuristic[:seed]
    #[arg(default_value = "random")]
    player: String,
}

#[derive(Debug, Default)]
struct Tally {
    player_wins: usize,
    ai_wins: usize,
    aborted: usize,
    turns: usize,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    if args.games == 0 {
        return Err("games must be positive".into());
    }
    info!(games = args.games, player = %args.player, "starting simulation");

    let mut tally = Tally::default();
    for round in 0..args.games {
        let round_seed = seat_seed(args.seed, round);
        let mut player = create_bot_from_spec(&args.player, 0, round_seed)?;
        let mut computer = HeuristicBot::new(StdRng::seed_from_u64(seat_seed(round_seed, 1)));
        let mut game = Game::new(GameConfig::new(round_seed));
        game.start_game();

        let mut turns = 0usize;
        while !game.is_finished() && turns < args.max_turns {
            let side = game.turn();
            let view = game.state_view(side);
            let legal_actions = game.legal_actions(side)?;
            let action = match side {
                Side::Player => player.select_action(&view, &legal_actions),
                Side::Ai => computer.select_action(&view, &legal_actions),
            };
            if args.visualize {
                let options = VisualOptions {
                    show_hand_indices: false,
                    show_pile_counts: true,
                };
                println!("{}", render_state_with_options(&view, options));
                println!("{side}: {}\n", describe_action(&action));
            }
            game.apply_action(side, action)?;
            turns += 1;
        }
        tally.turns += turns;
        match game.winner() {
            Some(Side::Player) => tally.player_wins += 1,
            Some(Side::Ai) => tally.ai_wins += 1,
            None => {
                debug!(round, turns, "round hit the turn cap");
                tally.aborted += 1;
            }
        }
    }

    let finished = args.games - tally.aborted;
    let rate = |wins: usize| {
        if finished == 0 {
            0.0
        } else {
            wins as f64 * 100.0 / finished as f64
        }
    };
    println!("Rounds: {} ({} aborted)", args.games, tally.aborted);
    println!(
        "  {:<10} wins {:>5}  ({:.1}%)",
        label_for_spec(&args.player),
        tally.player_wins,
        rate(tally.player_wins)
    );
    println!(
        "  {:<10} wins {:>5}  ({:.1}%)",
        "computer",
        tally.ai_wins,
        rate(tally.ai_wins)
    );
    println!(
        "Average turns per round: {:.1}",
        tally.turns as f64 / args.games as f64
    );
    Ok(())
}
