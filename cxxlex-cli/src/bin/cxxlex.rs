use clap::{Parser, Subcommand};
use cxxlex::{
    analyze, config,
    report::{ReportConfig, ReportFormatter},
};
use cxxlex_cli::{
    error::{CliError, CliResult},
    vocab::{self, VocabCategory},
};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about = "Lexical analyzer for C++ source", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a C++ file and print the token report
    Analyze(AnalyzeArgs),

    /// List the keyword, operator and punctuation tables
    Vocab {
        /// Only list one table
        #[arg(short, long, value_enum)]
        category: Option<VocabCategory>,
    },
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Source file; `-` or nothing reads stdin
    file: Option<PathBuf>,

    /// Print tokens and counts as JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Where to save the report
    #[arg(short, long, default_value = "tokens.txt")]
    save: PathBuf,

    /// Do not save the report
    #[arg(long, conflicts_with = "save")]
    no_save: bool,

    /// Report layout config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn read_source(file: Option<&PathBuf>) -> CliResult<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run_analyze(args: &AnalyzeArgs) -> CliResult<()> {
    let report_config: ReportConfig = match &args.config {
        Some(path) => config::from_file(path)?,
        None => ReportConfig::default(),
    };

    let source = read_source(args.file.as_ref())?;
    let analysis = analyze(&source);
    debug!(tokens = analysis.tokens.len(), "Analyzed source");

    let report = ReportFormatter::new(report_config).format(&analysis)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", report);
    }

    if !args.no_save {
        fs::write(&args.save, &report)?;
        info!("Results saved to {}", args.save.display());
    }

    Ok(())
}

fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Vocab { category } => {
            let categories = match category {
                Some(category) => vec![*category],
                None => VocabCategory::ALL.to_vec(),
            };
            print!("{}", vocab::render(&categories));
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
