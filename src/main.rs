use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::de::DeserializeOwned;
use serde::Serialize;

use minidux::config::Config;
use minidux::demo::counter::CounterReducer;
use minidux::demo::todos::TodoReducer;
use minidux::demo::DemoKind;
use minidux::logging::init_tracing;
use minidux::mvi::Reducer;
use minidux::script::{replay, Script};
use minidux::store::Store;

#[derive(Debug, Parser)]
#[command(name = "minidux", version, about = "Replay an intent script through a demo store")]
struct Cli {
    /// Intent script (TOML with [[intents]] tables)
    script: PathBuf,

    /// Demo reducer to drive (overrides config)
    #[arg(long, value_enum)]
    demo: Option<DemoKind>,

    /// Config file (default: ~/.config/minidux/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the final state
    #[arg(long)]
    final_only: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&config.logging.level);

    let demo = cli.demo.unwrap_or(config.defaults.demo);
    let print_every_state = config.defaults.print_every_state && !cli.final_only;
    tracing::info!(?demo, script = %cli.script.display(), "Replaying script");

    match demo {
        DemoKind::Counter => run_demo::<CounterReducer>(&cli.script, print_every_state),
        DemoKind::Todos => run_demo::<TodoReducer>(&cli.script, print_every_state),
    }
}

/// Replay `script_path` through a store driven by `R`.
///
/// With `print_every_state`, prints the initial state and then the state after
/// each dispatch, one JSON document per line. Otherwise prints the final state.
fn run_demo<R>(script_path: &Path, print_every_state: bool) -> Result<()>
where
    R: Reducer + 'static,
    R::State: Serialize,
    R::Intent: DeserializeOwned,
{
    let script = Script::<R::Intent>::load(script_path)?;
    let store = Store::<R::State, R::Intent>::from_reducer::<R>();

    let printer = if print_every_state {
        print_state(&store.get_state())?;
        let reader = store.clone();
        Some(store.subscribe(move || {
            if let Err(err) = print_state(&reader.get_state()) {
                tracing::error!(error = %err, "Failed to print state");
            }
        }))
    } else {
        None
    };

    let result = replay(&store, script);
    // The printer holds a store handle; release it either way.
    if let Some(subscription) = &printer {
        subscription.unsubscribe();
    }
    let applied =
        result.with_context(|| format!("Replay of '{}' stopped", script_path.display()))?;
    tracing::info!(applied, "Replay finished");

    if !print_every_state {
        print_state(&store.get_state())?;
    }
    Ok(())
}

fn print_state<S: Serialize>(state: &S) -> Result<()> {
    let line = serde_json::to_string(state).context("Failed to serialize state")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", line).context("Failed to write state")?;
    Ok(())
}
