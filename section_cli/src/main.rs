//! # Section Properties CLI
//!
//! Terminal front end for `section_core`: one-shot computations, shape and
//! equation listings, and an interactive session that can save results and
//! export them to CSV.
//!
//! ```text
//! section_cli shapes
//! section_cli compute solidRectangle b=50 h=100
//! section_cli compute circularHollow r_o=50 r_i=40 --json
//! section_cli equations iSection
//! section_cli --export-dir out session
//! ```

mod commands;
mod render;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};

use section_core::calculations::{compute, try_compute};
use section_core::equations::generate_equations_markdown;
use section_core::errors::CalcError;
use section_core::parameters::ParameterSet;
use section_core::session::{Session, SessionSettings};
use section_core::shapes::ShapeKind;

use commands::{CommandError, Outcome, SessionCommand};

#[derive(Parser)]
#[command(name = "section_cli")]
#[command(version, about = "Cross-section properties calculator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    global: GlobalOpts,
}

#[derive(Args, Clone, Debug)]
struct GlobalOpts {
    /// Directory CSV exports are written to
    #[arg(long, global = true, env = "SECTION_CALC_EXPORT_DIR", default_value = ".")]
    export_dir: PathBuf,

    /// Shape selected when a session starts
    #[arg(long, global = true, env = "SECTION_CALC_SHAPE")]
    shape: Option<ShapeKind>,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List shapes and their parameters
    Shapes,

    /// Compute the properties of one section
    Compute(ComputeArgs),

    /// Show governing equations
    Equations(EquationsArgs),

    /// Interactive session (default)
    Session,
}

#[derive(Args)]
struct ComputeArgs {
    /// Shape key, e.g. solidCircle
    shape: ShapeKind,

    /// Dimensions in mm, e.g. r=10
    #[arg(value_name = "SYM=VALUE")]
    params: Vec<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Explain why the result is zero
    #[arg(long)]
    explain: bool,
}

#[derive(Args)]
struct EquationsArgs {
    /// Shape key; all shapes when omitted
    shape: Option<ShapeKind>,

    /// Print the full markdown reference
    #[arg(long)]
    markdown: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let result = match cli.command.unwrap_or(Commands::Session) {
        Commands::Shapes => {
            print!("{}", render::shapes_listing());
            Ok(())
        }
        Commands::Compute(args) => run_compute(&args),
        Commands::Equations(args) => {
            run_equations(&args);
            Ok(())
        }
        Commands::Session => run_session(&cli.global),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, cli.global.verbose);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn report_error(err: &CommandError, verbose: u8) {
    for line in err.report_lines(verbose > 0) {
        eprintln!("{}", line);
    }
}

fn run_compute(args: &ComputeArgs) -> Result<(), CommandError> {
    let words: Vec<&str> = args.params.iter().map(String::as_str).collect();
    let pairs = if words.is_empty() {
        Vec::new()
    } else {
        commands::parse_assignments(&words)?
    };

    if let Some((symbol, _)) = pairs.iter().find(|(symbol, _)| args.shape.parameter(symbol).is_none()) {
        return Err(CalcError::unknown_parameter(args.shape.display_name(), symbol.as_str()).into());
    }

    let params = ParameterSet::from_inputs(
        args.shape,
        pairs.iter().map(|(symbol, text)| (symbol.as_str(), text.as_str())),
    );
    let result = compute(args.shape, &params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result).map_err(CalcError::from)?);
    } else {
        print!("{}", render::result_table(args.shape, &result));
    }

    if args.explain {
        if let Err(reason) = try_compute(args.shape, &params) {
            eprintln!("Result is zero: {}", reason);
        }
    }
    Ok(())
}

fn run_equations(args: &EquationsArgs) {
    if args.markdown {
        print!("{}", generate_equations_markdown());
        return;
    }

    match args.shape {
        Some(shape) => print!("{}", render::equations_listing(shape)),
        None => {
            for shape in ShapeKind::ALL {
                println!("{}", render::equations_listing(shape));
            }
        }
    }
}

fn run_session(global: &GlobalOpts) -> Result<(), CommandError> {
    let settings = SessionSettings {
        export_dir: global.export_dir.clone(),
        default_shape: global.shape.unwrap_or_default(),
        ..SessionSettings::default()
    };
    let mut session = Session::new(settings);
    log::info!("session started on {}", session.shape().key());

    println!("Section Properties Calculator");
    println!("Shape: {}. Type `help` for commands.", session.shape().display_name());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("section> ");
        io::stdout().flush().map_err(|e| CalcError::file_error("flush", "stdout", e.to_string()))?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.map_err(|e| CalcError::file_error("read", "stdin", e.to_string()))?;

        match line.parse::<SessionCommand>().and_then(|command| command.execute(&mut session)) {
            Ok(Outcome::Print(text)) => print!("{}", text),
            Ok(Outcome::Quit) => break,
            Err(e) => report_error(&e, global.verbose),
        }
    }

    log::info!("session ended with {} saved result(s)", session.saved().len());
    Ok(())
}
