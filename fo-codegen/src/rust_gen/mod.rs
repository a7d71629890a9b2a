// Rust side of the fixture: const assertions against the fo-ffi mirrors.

pub mod asserts;

use std::path::{Path, PathBuf};

pub use asserts::generate_asserts;

use crate::context::FixtureContext;
use crate::error::{CodegenError, CodegenResult};

pub const ASSERTS_FILE: &str = "layout_asserts.rs";

/// Write `layout_asserts.rs` into `out_dir`.
pub fn generate(ctx: &FixtureContext<'_>, out_dir: &Path) -> CodegenResult<PathBuf> {
    std::fs::create_dir_all(out_dir).map_err(|e| CodegenError::io(out_dir, e))?;
    let path = out_dir.join(ASSERTS_FILE);
    crate::write_file(&path, &generate_asserts(ctx))?;
    log::debug!("  wrote {}", path.display());
    Ok(path)
}
