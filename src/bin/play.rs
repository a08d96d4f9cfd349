use std::error::Error;
use std::io::{self, BufRead, Write};
use std::process;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;

use crazy8::{
    DEFAULT_SEED, GameConfig, GameError, GameStateView, Session, Side, Suit, describe_action,
    render_state,
};

#[derive(Parser, Debug)]
#[command(name = "play", about = "Play Crazy Eights against the computer.")]
struct Args {
    /// Seed for shuffling and the computer's choices
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Computer "thinking" pause in milliseconds
    #[arg(long = "delay-ms", default_value_t = 1500)]
    delay_ms: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

enum Command {
    Play(usize),
    Draw,
    NewGame,
    Quit,
    Help,
}

fn main() {
    let args = Args::parse();
    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = GameConfig::new(args.seed).with_ai_delay(Duration::from_millis(args.delay_ms));
    info!(seed = config.seed, delay = ?config.ai_delay, "starting table");
    let mut session = Session::new(config);
    let clock = Instant::now();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    session.start_game();
    println!("New game. Match the top card by suit or rank; eights are wild.");
    loop {
        let view = session.game().state_view(Side::Player);
        if session.state().is_over() {
            println!("{}", render_state(&view));
            match session.state().winner {
                Some(Side::Player) => println!("You win!"),
                Some(Side::Ai) => println!("The computer wins."),
                None => println!("Round over."),
            }
            match prompt(&mut lines, "[n] new game, [q] quit: ")? {
                Some(line) if line.eq_ignore_ascii_case("n") => {
                    session.start_game();
                }
                Some(line) if line.eq_ignore_ascii_case("q") => return Ok(()),
                Some(_) => {}
                None => return Ok(()),
            }
            continue;
        }

        if session.state().turn == Side::Ai {
            if let Some(action) = session.tick(clock.elapsed()) {
                println!("Computer: {}", describe_action(&action));
            } else if let Some(deadline) = session.next_deadline() {
                println!("Computer is thinking...");
                thread::sleep(deadline.saturating_sub(clock.elapsed()));
            }
            continue;
        }

        println!("\n{}", render_state(&view));
        if let Some(card) = session.pending_card() {
            let Some(line) = prompt(&mut lines, &format!("Suit for {card} [h/d/c/s]: "))? else {
                return Ok(());
            };
            match parse_suit(&line) {
                Some(suit) => report(session.handle_suit_selection(suit).map(|_| ())),
                None => println!("Unknown suit '{line}'."),
            }
            continue;
        }

        let Some(line) = prompt(
            &mut lines,
            "Card index to play, [d] draw, [n] new game, [q] quit: ",
        )?
        else {
            return Ok(());
        };
        match parse_command(&line) {
            Some(Command::Play(index)) => play_index(&mut session, &view, index),
            Some(Command::Draw) => report(session.draw_card().map(|_| ())),
            Some(Command::NewGame) => {
                session.start_game();
                println!("New game.");
            }
            Some(Command::Quit) => return Ok(()),
            Some(Command::Help) => {
                println!("Enter the number shown before a card in your hand to play it.");
                println!("Playable cards match the top card's rank or the suit in force.");
            }
            None => println!("Invalid input: '{line}'. Type 'help' for options."),
        }
    }
}

fn play_index(session: &mut Session, view: &GameStateView, index: usize) {
    match view.hand.get(index) {
        Some(card) => report(session.handle_player_play(card.id).map(|_| ())),
        None => println!("Index out of range. Please choose a card from your hand."),
    }
}

fn report(result: Result<(), GameError>) {
    if let Err(err) = result {
        println!("Not allowed: {err}");
    }
}

fn prompt<B: BufRead>(
    lines: &mut io::Lines<B>,
    message: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn parse_command(input: &str) -> Option<Command> {
    match input.to_ascii_lowercase().as_str() {
        "d" | "draw" => Some(Command::Draw),
        "n" | "new" => Some(Command::NewGame),
        "q" | "quit" => Some(Command::Quit),
        "help" | "?" => Some(Command::Help),
        other => other.parse::<usize>().ok().map(Command::Play),
    }
}

fn parse_suit(input: &str) -> Option<Suit> {
    match input.to_ascii_lowercase().as_str() {
        "h" | "hearts" => Some(Suit::Hearts),
        "d" | "diamonds" => Some(Suit::Diamonds),
        "c" | "clubs" => Some(Suit::Clubs),
        "s" | "spades" => Some(Suit::Spades),
        _ => None,
    }
}
