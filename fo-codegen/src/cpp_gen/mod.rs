// C++ side of the fixture: the assertion header and per-target clang arguments.

pub mod fixture;
pub mod clang_args;

pub use clang_args::clang_args;
pub use fixture::generate_fixture;

use std::path::{Path, PathBuf};

use fo_layout_facts::BuildTarget;

use crate::context::FixtureContext;
use crate::error::{CodegenError, CodegenResult};

/// Write `<name>.h` and one `<name>.<target>.args` per target into `out_dir`.
/// Returns the written paths, header first.
pub fn generate(ctx: &FixtureContext<'_>, out_dir: &Path) -> CodegenResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|e| CodegenError::io(out_dir, e))?;
    let name = &ctx.config.fixture.name;
    let mut written = Vec::new();

    let header_path = out_dir.join(format!("{name}.h"));
    crate::write_file(&header_path, &generate_fixture(ctx))?;
    log::debug!("  wrote {}", header_path.display());
    written.push(header_path);

    for target in BuildTarget::ALL {
        let args_path = out_dir.join(format!("{name}.{target}.args"));
        let mut text = clang_args::clang_args(ctx, target).join("\n");
        text.push('\n');
        crate::write_file(&args_path, &text)?;
        log::debug!("  wrote {}", args_path.display());
        written.push(args_path);
    }

    Ok(written)
}
