#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging,
    ui::{print_fleet, TerminalDisplay},
    GameSession, GameStatus, Notification, NUM_SHIPS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play interactively, one guess per line.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Show where the ships are before the first guess")]
        reveal: bool,
    },
    /// Fire a fixed list of guesses and report every notification.
    Script {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Emit one JSON object per line")]
        json: bool,
        /// Guesses such as `a0 B3 g6`.
        guesses: Vec<String>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, reveal } => play(seed, reveal),
        Commands::Script {
            seed,
            json,
            guesses,
        } => script(seed, json, &guesses),
    }
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, reveal: bool) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (fleet will be reproducible)", s);
    }
    let mut rng = make_rng(seed);
    let mut session = GameSession::new(&mut rng, TerminalDisplay::stdout())
        .map_err(|e| anyhow::anyhow!(e))?;

    if reveal {
        print_fleet(&mut io::stdout(), session.board())?;
    }
    println!("Enter a guess like A0 or g6, or 'quit' to leave.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let guess = line.trim();
        if guess.eq_ignore_ascii_case("quit") {
            break;
        }

        session.process_guess(guess);
        session.sink_mut().render()?;
        if session.status() == GameStatus::Won {
            return Ok(());
        }
    }

    println!("Game abandoned after {} guesses.", session.guess_count());
    Ok(())
}

#[cfg(feature = "std")]
fn script(seed: Option<u64>, json: bool, guesses: &[String]) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let mut session =
        GameSession::new(&mut rng, Vec::<Notification>::new()).map_err(|e| anyhow::anyhow!(e))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for guess in guesses {
        for n in session.process_guess(guess) {
            if json {
                writeln!(out, "{}", serde_json::to_string(&n)?)?;
            } else {
                match n {
                    Notification::Message(text) => writeln!(out, "{}", text)?,
                    Notification::MarkHit(at) => writeln!(out, "[hit {}]", at)?,
                    Notification::MarkMiss(at) => writeln!(out, "[miss {}]", at)?,
                }
            }
        }
    }

    if json {
        let summary = serde_json::json!({
            "guesses": session.guess_count(),
            "ships_sunk": session.ships_sunk(),
            "status": session.status(),
        });
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    } else {
        writeln!(
            out,
            "{} guesses, {}/{} ships sunk, {:?}",
            session.guess_count(),
            session.ships_sunk(),
            NUM_SHIPS,
            session.status()
        )?;
    }
    Ok(())
}
