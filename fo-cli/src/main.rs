// fo-cli: CLI entry point for the FOnline layout fixture (generate, check, list, clang-args).

mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use fo_codegen::config::FixtureConfig;
use fo_codegen::context::FixtureContext;
use fo_layout_facts::BuildTarget;

#[derive(Parser)]
#[command(name = "fo-layout", about = "FOnline engine layout fixture tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C++ assertion header, clang args and Rust assertions.
    Generate {
        /// Path to fo.layout.toml.
        #[arg(long, default_value = "fo.layout.toml")]
        config: PathBuf,
    },
    /// Compare layout facts against the compiled fo-ffi mirrors.
    Check {
        /// Build target: server or client.
        #[arg(long)]
        target: BuildTarget,
        /// Take the fact table from this config instead of the built-in r476 table.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the facts that apply to a target.
    List {
        #[arg(long)]
        target: BuildTarget,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print the clang arguments for running bindgen over the fixture.
    ClangArgs {
        #[arg(long)]
        target: BuildTarget,
        /// Take diagnostics settings from this config instead of the built-in r476 fixture.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let ok = match cli.command {
        Commands::Generate { config } => match fo_codegen::run_generate(&config) {
            Ok(summary) => {
                for file in &summary.files {
                    println!("{}", file.display());
                }
                true
            }
            Err(e) => fail(e),
        },
        Commands::Check { target, config, json } => run_check(target, config.as_deref(), json),
        Commands::List { target, config, json } => run_list(target, config.as_deref(), json),
        Commands::ClangArgs { target, config } => {
            match load_config(config.as_deref()).and_then(|cfg| {
                let ctx = FixtureContext::new(&cfg)?;
                Ok(fo_codegen::cpp_gen::clang_args(&ctx, target))
            }) {
                Ok(args) => {
                    println!("{}", args.join(" "));
                    true
                }
                Err(e) => fail(e),
            }
        }
    };
    if !ok {
        std::process::exit(1);
    }
}

fn fail(err: impl std::fmt::Display) -> bool {
    eprintln!("Error: {err}");
    false
}

/// Config from `--config`, or the built-in r476 fixture.
fn load_config(path: Option<&Path>) -> Result<FixtureConfig, fo_codegen::error::CodegenError> {
    match path {
        Some(path) => FixtureConfig::load(path),
        None => Ok(FixtureConfig::builtin()),
    }
}

fn run_check(target: BuildTarget, config: Option<&Path>, json: bool) -> bool {
    let cfg = match load_config(config) {
        Ok(cfg) => cfg,
        Err(e) => return fail(e),
    };
    let ctx = match FixtureContext::new(&cfg) {
        Ok(ctx) => ctx,
        Err(e) => return fail(e),
    };
    let facts = ctx.layout_facts();
    let measured = fo_ffi::measured_layouts(target);
    log::debug!("checking {} facts against {} mirrors", facts.len(), measured.len());

    let out = match report::check_layouts(&cfg.fixture.revision, &facts, &measured, target) {
        Ok(out) => out,
        Err(e) => return fail(e),
    };
    if json {
        match serde_json::to_string_pretty(&out) {
            Ok(text) => println!("{text}"),
            Err(e) => return fail(e),
        }
    } else {
        print!("{}", out.render());
    }
    out.ok
}

fn run_list(target: BuildTarget, config: Option<&Path>, json: bool) -> bool {
    let cfg = match load_config(config) {
        Ok(cfg) => cfg,
        Err(e) => return fail(e),
    };
    let ctx = match FixtureContext::new(&cfg) {
        Ok(ctx) => ctx,
        Err(e) => return fail(e),
    };
    let rows = report::fact_rows(&ctx, target);
    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(text) => println!("{text}"),
            Err(e) => return fail(e),
        }
    } else {
        for row in &rows {
            println!("{:<14} {:>6}  {}", row.type_name, row.size, row.applies);
        }
    }
    true
}
