// fo-codegen: reads fo.layout.toml, generates the C++ assertion header,
// per-target bindgen clang args and Rust const layout assertions.

pub mod error;
pub mod naming;
pub mod config;
pub mod context;
pub mod rust_gen;
pub mod cpp_gen;

use std::path::{Path, PathBuf};

use crate::config::FixtureConfig;
use crate::context::FixtureContext;
use crate::error::{CodegenError, CodegenResult};

/// What a generate run produced.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub revision: String,
    pub shared_facts: usize,
    pub target_facts: usize,
    /// Written files, C++ outputs first.
    pub files: Vec<PathBuf>,
}

/// Run the generate command. Main entry point for codegen.
pub fn run_generate(config_path: &Path) -> CodegenResult<GenerateSummary> {
    log::info!("fo-codegen: loading {}...", config_path.display());
    let config = FixtureConfig::load(config_path)?;

    // Resolve paths relative to config file directory
    let parent = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let config_dir = parent.canonicalize().map_err(|e| CodegenError::io(parent, e))?;

    generate_in(&config, &config_dir)
}

/// Generate every output for `config`, resolving its paths against `base_dir`.
pub fn generate_in(config: &FixtureConfig, base_dir: &Path) -> CodegenResult<GenerateSummary> {
    let ctx = FixtureContext::new(config)?;
    let shared_facts = ctx.shared().count();
    let target_facts = ctx.facts.len() - shared_facts;
    log::info!(
        "  revision {}: {} shared facts, {} target facts",
        config.fixture.revision,
        shared_facts,
        target_facts
    );

    let cpp_out = base_dir.join(&config.paths.cpp_out);
    let rust_out = base_dir.join(&config.paths.rust_out);

    log::info!("fo-codegen: generating C++ fixture...");
    let mut files = cpp_gen::generate(&ctx, &cpp_out)?;

    log::info!("fo-codegen: generating Rust assertions...");
    files.push(rust_gen::generate(&ctx, &rust_out)?);

    log::info!("fo-codegen: verifying output...");
    verify_output(&files)?;
    log::info!("  OK: {} files", files.len());

    log::info!("fo-codegen: done!");
    Ok(GenerateSummary {
        revision: config.fixture.revision.clone(),
        shared_facts,
        target_facts,
        files,
    })
}

pub(crate) fn write_file(path: &Path, contents: &str) -> CodegenResult<()> {
    std::fs::write(path, contents).map_err(|e| CodegenError::io(path, e))
}

/// Verify codegen output integrity: every file exists and is non-empty.
pub fn verify_output(paths: &[PathBuf]) -> CodegenResult<()> {
    let mut errors = Vec::new();
    for path in paths {
        match std::fs::metadata(path) {
            Ok(m) if m.len() == 0 => errors.push(format!("output empty: {}", path.display())),
            Err(_) => errors.push(format!("output missing: {}", path.display())),
            _ => {}
        }
    }
    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            log::warn!("    - {e}");
        }
        Err(CodegenError::Verify(errors))
    }
}
