use std::io::Write;
use crate::criterion::Criterion;
use crate::session::Session;
use crate::source::{JsonFileSource, load_or_empty};
use clap::Parser;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod criterion;
mod filters;
mod flight;
mod ordering;
mod render;
mod session;
mod source;
mod time;

#[derive(Parser)]
#[command(name = "flightsort", version, about = "Sort flight offers by direct flight, price and duration")]
struct Args {
    /// Path to the JSON file with the flight offers
    #[arg(short, long, value_name = "FILE", env = "FLIGHTSORT_FLIGHTS", default_value = "data/flights.json")]
    flights: PathBuf,

    /// Origin city shown in the trip header
    #[arg(long, env = "FLIGHTSORT_ORIGIN", default_value = "BOG")]
    origin: String,

    /// Destination city shown in the trip header
    #[arg(long, env = "FLIGHTSORT_DESTINATION", default_value = "MDE")]
    destination: String,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

fn paginate(content: &str) {
    let spawned = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        // Fallback to 'more' if 'less' isn't available
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn());

    let mut pager = match spawned {
        Ok(pager) => pager,
        Err(e) => {
            warn!(error = %e, "no pager available");
            println!("{}", content);
            return;
        }
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe is common if the user quits the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                warn!(error = %e, "error writing to pager");
            }
        }
    }

    // Wait for the user to close the pager before returning to the ">> " prompt
    let _ = pager.wait();
}

fn show_flights(session: &Session) {
    let table = render::flights_table(session);
    if session.len() > 20 {
        paginate(&table);
    } else {
        println!("{}", table);
    }
}

fn show_filters(session: &Session) {
    println!("{}", render::filter_bar(session));
    println!("{}", render::applied_filters(session));
}

fn parse_criterion(arg: Option<&&str>, usage: &str) -> Option<Criterion> {
    let Some(name) = arg else {
        println!("Usage: {}", usage);
        return None;
    };
    match name.parse::<Criterion>() {
        Ok(c) => Some(c),
        Err(e) => {
            println!("{}", e);
            None
        }
    }
}

fn toggle(session: &mut Session, criterion: Criterion) {
    let active = session.toggle(criterion);
    debug!(%criterion, active, "filter toggled");
    show_filters(session);
    show_flights(session);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let source = JsonFileSource::new(&args.flights);
    let mut session = Session::new(load_or_empty(&source));
    println!("{}", render::trip_header(&args.origin, &args.destination));
    println!("Loaded {} flights from {}", session.len(), args.flights.display());
    show_filters(&session);

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "ls".to_string(),
            "toggle".to_string(),
            "direct".to_string(),
            "price".to_string(),
            "duration".to_string(),
            "rm".to_string(),
            "filters".to_string(),
            "reset".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => show_flights(&session),
                    "toggle" | "t" => {
                        if let Some(c) = parse_criterion(parts.get(1), "toggle <direct|price|duration>") {
                            toggle(&mut session, c);
                        }
                    },
                    "direct" => toggle(&mut session, Criterion::DirectFlight),
                    "price" => toggle(&mut session, Criterion::Price),
                    "duration" => toggle(&mut session, Criterion::Duration),
                    "rm" => {
                        if let Some(c) = parse_criterion(parts.get(1), "rm <direct|price|duration>") {
                            session.remove(c);
                            show_filters(&session);
                            show_flights(&session);
                        }
                    },
                    "filters" | "f" => show_filters(&session),
                    "reset" => {
                        session.reset();
                        println!("All filters cleared.");
                        show_flights(&session);
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - List flights in the current order");
                        println!("  toggle <filter>     - Turn a filter on or off: direct, price, duration");
                        println!("  direct|price|duration - Shortcut for toggle <filter>");
                        println!("  rm <filter>         - Dismiss an applied filter");
                        println!("  filters             - Show filter buttons and applied filters");
                        println!("  reset               - Clear all applied filters");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
