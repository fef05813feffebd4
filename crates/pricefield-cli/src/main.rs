use clap::{Parser, Subcommand};
use colored::Colorize;
use pricefield_core::{
    format, format_price_label, normalize, submit_value, FieldConfig, PriceFieldController,
    TextField,
};
use serde::Serialize;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing::{debug, info, warn};

mod logging;

/// pricefield — normalize and format admin price input
///
/// Values are taken from the command line, or one per line from stdin.
#[derive(Parser)]
#[command(name = "pricefield", version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print nothing on stdout; only the exit code reports the result
    #[arg(short, long, global = true)]
    quiet: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON field configuration (currency symbol and code, field name)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert typed prices to canonical dot-decimal values
    Normalize {
        /// Raw price text (`1.234,56`, `2.5k`, ...)
        values: Vec<String>,
    },

    /// Format canonical values for display (`1234.5` → `1.234,5`)
    Format {
        /// Canonical values
        values: Vec<String>,
    },

    /// Show the value a form submit would send
    Submit {
        /// Raw price text
        values: Vec<String>,
    },

    /// Run focus, blur and submit on a simulated field
    Field {
        /// Initial field text
        values: Vec<String>,
    },

    /// Render whole-amount labels (`1200000` → `$1.200.000 COP`)
    Label {
        /// Integer amounts
        values: Vec<String>,
    },

    /// Show version information
    Version,
}

/// Result for one input value
#[derive(Debug, Serialize)]
struct Outcome {
    input: String,
    output: Option<String>,
}

/// Field text after each lifecycle event
#[derive(Debug, Serialize)]
struct FieldTrace {
    input: String,
    focus: String,
    blur: String,
    submit: String,
}

struct Output {
    json: bool,
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_config =
        logging::LogConfig::from_verbosity(cli.verbose).with_ansi(io::stderr().is_terminal());
    if let Err(e) = logging::init_logging(&log_config) {
        eprintln!("{} could not initialize logging: {}", "warning:".yellow(), e);
    }

    let out = Output {
        json: cli.json,
        quiet: cli.quiet,
    };

    let exit_code = match run(cli.command, cli.config, &out) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            2
        }
    };

    process::exit(exit_code);
}

fn run(command: Commands, config: Option<PathBuf>, out: &Output) -> pricefield_core::Result<i32> {
    let config = match config {
        Some(path) => {
            info!(path = %path.display(), "loading field config");
            FieldConfig::load(path)?
        }
        None => FieldConfig::default(),
    };

    let code = match command {
        Commands::Normalize { values } => {
            let outcomes = map_values(read_values(values)?, |v| non_empty(normalize(v)));
            report(&outcomes, out)
        }
        Commands::Format { values } => {
            let outcomes = map_values(read_values(values)?, |v| non_empty(format(v)));
            report(&outcomes, out)
        }
        Commands::Submit { values } => {
            let outcomes = map_values(read_values(values)?, submit_value);
            report(&outcomes, out)
        }
        Commands::Label { values } => {
            let outcomes = map_values(read_values(values)?, |v| format_price_label(v, &config));
            report(&outcomes, out)
        }
        Commands::Field { values } => {
            let traces: Vec<FieldTrace> = read_values(values)?
                .into_iter()
                .map(run_field)
                .collect();
            report_fields(&traces, out)
        }
        Commands::Version => {
            if !out.quiet {
                println!(
                    "pricefield {} (pricefield-core {})",
                    env!("CARGO_PKG_VERSION"),
                    pricefield_core::VERSION
                );
            }
            0
        }
    };

    Ok(code)
}

/// Positional values, or stdin lines when none were given
fn read_values(values: Vec<String>) -> io::Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    debug!("reading values from stdin");
    io::stdin().lock().lines().collect()
}

fn map_values<F>(values: Vec<String>, f: F) -> Vec<Outcome>
where
    F: Fn(&str) -> Option<String>,
{
    info!(count = values.len(), "processing values");
    values
        .into_iter()
        .map(|input| {
            let output = f(&input);
            debug!(input = %input, output = ?output, "processed value");
            Outcome { input, output }
        })
        .collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn run_field(input: String) -> FieldTrace {
    let mut controller = PriceFieldController::new(TextField::new(input.as_str()));
    controller.on_focus();
    let focus = controller.field().as_str().to_string();
    controller.on_blur();
    let blur = controller.field().as_str().to_string();
    controller.on_submit();
    let submit = controller.into_inner().as_str().to_string();
    FieldTrace {
        input,
        focus,
        blur,
        submit,
    }
}

// ── Output ────────────────────────────────────────────────

fn report(outcomes: &[Outcome], out: &Output) -> i32 {
    let missing = outcomes.iter().filter(|o| o.output.is_none()).count();

    if !out.quiet {
        if out.json {
            print_json(outcomes);
        } else {
            for outcome in outcomes {
                match &outcome.output {
                    Some(value) => println!("{}", value),
                    None => {
                        println!();
                        eprintln!(
                            "{} no price in {:?}",
                            "warning:".yellow(),
                            outcome.input
                        );
                    }
                }
            }
        }
    }

    if missing > 0 {
        warn!(missing, "some values produced no result");
        1
    } else {
        0
    }
}

fn report_fields(traces: &[FieldTrace], out: &Output) -> i32 {
    if !out.quiet {
        if out.json {
            print_json(traces);
        } else {
            let arrow = "→".dimmed();
            for t in traces {
                println!(
                    "{:?} {} focus {:?} {} blur {:?} {} submit {:?}",
                    t.input, arrow, t.focus, arrow, t.blur, arrow, t.submit
                );
            }
        }
    }

    let untouched = traces
        .iter()
        .filter(|t| submit_value(&t.input).is_none())
        .count();
    if untouched > 0 {
        1
    } else {
        0
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("{} JSON serialization failed: {}", "error:".red().bold(), e),
    }
}
