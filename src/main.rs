//! shrdlite CLI: blocks-world command interpreter and planner.

use std::io::{BufRead, Write as _};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use shrdlite::error::WorldError;
use shrdlite::interpret;
use shrdlite::parse;
use shrdlite::plan::{self, PlannerConfig, ALREADY_TRUE};
use shrdlite::world::{catalog, WorldState};

#[derive(Parser)]
#[command(name = "shrdlite", version, about = "Blocks-world command interpreter and planner")]
struct Cli {
    /// Built-in world to load.
    #[arg(long, global = true, default_value = "small")]
    world: String,

    /// Load a world snapshot from a JSON file instead.
    #[arg(long, global = true)]
    world_file: Option<PathBuf>,

    /// Planner timeout in seconds.
    #[arg(long, global = true, default_value = "10")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in worlds.
    Worlds,

    /// Show every parse of an utterance.
    Parse {
        /// The utterance, e.g. "put a ball in a box".
        utterance: String,
    },

    /// Show the goal formula of every surviving interpretation.
    Interpret {
        /// The utterance.
        utterance: String,
    },

    /// Plan an utterance and print the action string.
    Plan {
        /// The utterance.
        utterance: String,
    },

    /// Interactive shell: type commands, watch the world change.
    Shell,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let world = load_world(&cli)?;
    let config = PlannerConfig {
        timeout: Duration::from_secs(cli.timeout),
    };

    match cli.command {
        Commands::Worlds => {
            for name in catalog::NAMES {
                println!("{name}");
            }
        }

        Commands::Parse { utterance } => {
            let commands = parse::parse(&utterance)?;
            for (i, command) in commands.iter().enumerate() {
                println!("{}. {command}", i + 1);
            }
        }

        Commands::Interpret { utterance } => {
            let commands = parse::parse(&utterance)?;
            let goals = interpret::interpret(&commands, &world)?;
            for goal in &goals {
                println!("{}", goal.formula);
            }
        }

        Commands::Plan { utterance } => {
            print_world(&world);
            let (_, planned) = plan_utterance(&utterance, &world, config)?;
            println!("plan: {} (cost {}, {} nodes)", planned.plan, planned.cost, planned.nodes_seen);
        }

        Commands::Shell => shell(world, config)?,
    }
    Ok(())
}

fn load_world(cli: &Cli) -> Result<WorldState> {
    let world = match &cli.world_file {
        Some(path) => {
            let content = std::fs::read_to_string(path).into_diagnostic()?;
            let world: WorldState = serde_json::from_str(&content).into_diagnostic()?;
            world.validate()?;
            world
        }
        None => catalog::by_name(&cli.world).ok_or(WorldError::UnknownWorld {
            name: cli.world.clone(),
        })?,
    };
    Ok(world)
}

fn plan_utterance(
    utterance: &str,
    world: &WorldState,
    config: PlannerConfig,
) -> Result<(interpret::Interpretation, plan::Planned)> {
    let commands = parse::parse(utterance)?;
    let goals = interpret::interpret(&commands, world)?;
    let mut planned = plan::plan(&goals, world, config)?;
    // Several readings may survive; prefer the cheapest plan.
    planned.sort_by_key(|p| p.planned.cost);
    let best = planned.remove(0);
    Ok((best.interpretation, best.planned))
}

fn print_world(world: &WorldState) {
    for (col, stack) in world.stacks.iter().enumerate() {
        let marker = if col == world.arm { "*" } else { " " };
        let contents = if stack.is_empty() {
            "-".to_string()
        } else {
            stack.join(" | ")
        };
        println!("{marker}{col}: {contents}");
    }
    match &world.holding {
        Some(id) => println!(" holding {id}"),
        None => println!(" holding nothing"),
    }
}

fn shell(mut world: WorldState, config: PlannerConfig) -> Result<()> {
    println!("shrdlite shell. Type a command, or \"quit\" to leave.");
    let stdin = std::io::stdin();
    loop {
        print_world(&world);
        print!("> ");
        std::io::stdout().flush().into_diagnostic()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).into_diagnostic()? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match plan_utterance(input, &world, config) {
            Ok((goal, planned)) => {
                println!("goal: {}", goal.formula);
                if planned.plan == ALREADY_TRUE {
                    println!("{ALREADY_TRUE}");
                    continue;
                }
                println!("plan: {} ({} actions)", planned.plan, planned.cost);
                match plan::execute(&world, &planned.plan) {
                    Some(next) => world = next,
                    None => println!("plan failed to execute; world unchanged"),
                }
            }
            Err(report) => eprintln!("{report:?}"),
        }
    }
    Ok(())
}
