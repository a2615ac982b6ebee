//! Go Fish against the computer in the terminal.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use gofish::{
    Card, Console, Game, GameOptions, Player, Suit, TurnEvent, TurnReport, TurnResult,
};

#[derive(Parser)]
#[command(author, version, about = "Play Go Fish against the computer", long_about = None)]
struct Args {
    /// Seed for the shuffle and the computer's choices (defaults to the clock).
    #[arg(long)]
    seed: Option<u64>,
    /// Your name at the table.
    #[arg(long, default_value = "Player 1")]
    name: String,
    /// Cards dealt to each player.
    #[arg(long, default_value_t = 7)]
    hand_size: usize,
    /// Show the computer's hand too.
    #[arg(long)]
    reveal: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();
    let args = Args::parse();

    let options = GameOptions::default()
        .with_hand_size(args.hand_size)
        .with_reveal_hands(args.reveal);
    let mut seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    loop {
        println!("\n\n=== [ New Game ] ===\nShuffling deck...\n");
        log::info!("starting game with seed {seed}");

        if let Err(err) = play_game(options, seed, &args.name) {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }

        let mut console = Console::new(io::stdin().lock(), io::stdout());
        if !console.ask_play_again() {
            break;
        }
        seed = seed.wrapping_add(1);
    }
}

fn play_game(options: GameOptions, seed: u64, name: &str) -> Result<(), gofish::DealError> {
    let user = Player::new(name, true, Console::new(io::stdin().lock(), io::stdout()));
    let computer = Player::computer("Player 2");
    let mut game = Game::new(options, seed, user, computer)?;

    loop {
        let shows_draws = game.playing().is_human() || options.reveal_hands;
        println!("=== {}'s Turn ===", game.playing().name());
        print_table(&game);
        if game.playing().is_human() {
            print_askable(game.playing());
        }

        let Ok(report) = game.play_turn() else {
            break;
        };
        print_report(shows_draws, &report);

        if report.result == TurnResult::Won {
            for player in game.players() {
                print_books(player);
            }
            println!("\n\nHear ye! Hear ye! {} has won!\n", report.player);
            break;
        }
    }
    Ok(())
}

fn print_table(game: &Game) {
    for player in game.players() {
        if player.is_human() || game.options().reveal_hands {
            print_hand(player);
        }
    }
    for player in game.players() {
        print_books(player);
    }
    println!("Deck: {} cards remaining\n", game.deck().remaining());
}

fn print_hand(player: &Player) {
    let cards = player
        .hand()
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}'s hand - {cards}", player.name());
}

fn print_books(player: &Player) {
    let books = player
        .books()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}'s books - {books}", player.name());
}

fn print_askable(player: &Player) {
    let ranks = player
        .hand()
        .ranks()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("You can ask for: {ranks}");
}

fn print_report(shows_draws: bool, report: &TurnReport) {
    let name = &report.player;
    let other = &report.opponent;
    for event in &report.events {
        match event {
            TurnEvent::DrewIntoEmptyHand(_) => println!("    {name} has no cards, drawing..."),
            TurnEvent::Passed => println!(
                "    {name} has no cards and cannot draw from an empty deck, passing the turn..."
            ),
            TurnEvent::NoRank => println!("    {name} has nothing to ask for"),
            TurnEvent::Asked(rank) => {
                println!("    {name} is looking for Rank: {}", colorize(rank.label(), "36"));
            }
            TurnEvent::Hit { taken, held, .. } => {
                println!("    {other} had {}", format_cards(taken));
                println!("    {name} had {}", format_cards(held));
            }
            TurnEvent::GoFish(rank) => println!("    {other} has no rank {rank} cards"),
            TurnEvent::Drew(card) => {
                let shown = if shows_draws {
                    format_card(card)
                } else {
                    String::new()
                };
                println!("    Go fish! {name} draws a card {shown}");
            }
            TurnEvent::DrewRequested(card) => {
                println!("    Go fish! {name} drew the card they asked for {}", format_card(card));
            }
            TurnEvent::DeckEmpty => println!("    Cannot go fish, the deck is empty"),
            TurnEvent::Book(rank) => println!("    {name} made a book of the {rank} cards"),
        }
    }
    if report.result == TurnResult::ExtraTurn {
        println!("    {name} gets another turn");
    }
    println!();
    let _ = io::stdout().flush();
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "32",
    };
    colorize(&format!("[{card}]"), code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
