mod fixture;
mod json;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chirp_core::{CallSite, Engine, EngineOptions, StaticHost, Value};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "chirp",
    version,
    about = "Call chirp builtin functions from the command line.",
    long_about = "Call a builtin function with the given arguments against a host \
                  described by a JSON fixture, and print the result."
)]
struct Cli {
    /// Builtin to call, without the leading `$`.
    #[arg(required_unless_present = "list")]
    function: Option<String>,

    /// Arguments passed to the builtin.
    #[arg(
        value_name = "ARG",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..
    )]
    args: Vec<String>,

    /// JSON file describing windows, consoles and application state.
    #[arg(long, value_name = "FILE")]
    host: Option<PathBuf>,

    /// Id of the window the call is made from.
    #[arg(long, value_name = "ID")]
    window: Option<u64>,

    /// Parse every argument as JSON instead of passing it as text.
    #[arg(long)]
    json_args: bool,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Remove a builtin from the registry (repeatable).
    #[arg(long = "disable", value_name = "NAME")]
    disabled: Vec<String>,

    /// Print every registered function with its parameters.
    #[arg(long)]
    list: bool,

    /// Log dispatch details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    install_tracing(cli.verbose);

    let engine = Engine::new(EngineOptions {
        disabled_functions: cli.disabled.clone(),
        ..EngineOptions::default()
    });

    if cli.list {
        for entry in engine.entries() {
            println!("${}{}", entry.name, entry.signature);
        }
        return Ok(());
    }

    let Some(function) = cli.function.as_deref() else {
        bail!("no function given");
    };

    let host = match &cli.host {
        Some(path) => fixture::load(path)?,
        None => StaticHost::new(),
    };
    let args = parse_args(&cli.args, cli.json_args)?;
    let site = match cli.window {
        Some(window) => CallSite::in_window(&host, window),
        None => CallSite::new(&host),
    };

    let outcome = engine.call(&site, function, args)?;
    if let Some(warning) = &outcome.warning {
        eprintln!("warning: {warning}");
    }
    if cli.json {
        let rendered = serde_json::to_string(&json::from_value(&outcome.value))
            .context("failed to render result as JSON")?;
        println!("{rendered}");
    } else {
        println!("{}", outcome.value);
    }
    Ok(())
}

fn parse_args(raw: &[String], as_json: bool) -> Result<Vec<Value>> {
    if !as_json {
        return Ok(raw.iter().map(|arg| Value::from(arg.as_str())).collect());
    }
    raw.iter()
        .enumerate()
        .map(|(index, arg)| {
            serde_json::from_str(arg)
                .map(json::to_value)
                .with_context(|| format!("argument {} is not valid JSON: {arg}", index + 1))
        })
        .collect()
}

fn install_tracing(verbose: bool) {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    if verbose {
        for directive in ["chirp_core=debug", "chirp=debug"] {
            if let Ok(directive) = directive.parse() {
                filter = filter.add_directive(directive);
            }
        }
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
