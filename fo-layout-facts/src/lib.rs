// fo-layout-facts: layout facts for FOnline engine types.
//
// A fact is (type name, expected byte size, build targets it applies to).
// The r476 table mirrors the engine's 32-bit (i686) build.

pub mod target;
pub mod fact;
pub mod r476;
pub mod check;
pub mod error;

pub use target::*;
pub use fact::*;
pub use check::*;
pub use error::*;
