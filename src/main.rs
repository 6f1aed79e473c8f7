#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use vcsq::{
    Config, DefaultFsOps, DefaultGitRunner, Options, collect_report_data, load_config,
    output::{TabStyle, format_tab, to_json},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Tab,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Report git revision, dirty state and version tag distance.")]
struct Args {
    /// Working trees, or directories containing them (default: .)
    roots: Vec<PathBuf>,

    /// Directory depth to search (0 = only root itself, 1 = one level of children, etc.)
    #[arg(long)]
    depth: Option<usize>,

    /// TOML file with defaults for git-binary, tag-pattern, depth and roots
    #[arg(long)]
    config: Option<PathBuf>,

    /// git executable to run
    #[arg(long)]
    git: Option<PathBuf>,

    /// Glob selecting version tags
    #[arg(long)]
    tag_pattern: Option<String>,

    /// Also print <BASE>+dev.<head>[.dirty] for each repo
    #[arg(long)]
    base_version: Option<String>,

    /// Print debug info while scanning
    #[arg(long)]
    debug: bool,

    /// Output format: tab (default) or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Tab)]
    output: OutputFormat,

    /// Table style to use with --output tab
    #[arg(long, value_enum, default_value_t = TabStyle::Rounded)]
    tab_style: TabStyle,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(1);
            }
        },
        None => Config::default(),
    };

    let program = args
        .git
        .clone()
        .or(config.git_binary)
        .unwrap_or_else(|| PathBuf::from("git"));
    let opts = Options {
        roots: if args.roots.is_empty() {
            config.roots
        } else {
            args.roots.clone()
        },
        depth: args.depth.or(config.depth).unwrap_or(0),
        tag_pattern: args.tag_pattern.clone().or(config.tag_pattern),
        base_version: args.base_version.clone(),
    };

    let fs = DefaultFsOps;
    let git = DefaultGitRunner::new(&program);
    let data = collect_report_data(&opts, &fs, &git);
    if !data.tool_available {
        eprintln!(
            "error: git executable '{}' is not available",
            program.display()
        );
        return ExitCode::from(2);
    }

    let out = match args.output {
        OutputFormat::Tab => format_tab(&data, args.tab_style),
        OutputFormat::Json => match to_json(&data) {
            Ok(out) => out,
            Err(err) => {
                eprintln!("error: failed to render json: {err}");
                return ExitCode::from(1);
            }
        },
    };
    println!("{out}");
    ExitCode::SUCCESS
}
