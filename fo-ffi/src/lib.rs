// fo-ffi: #[repr(C)] mirrors of FOnline r476 engine types.
// Host-independent 32-bit layouts; contract_tests pins every size at compile time.

pub mod ptr;
pub mod stl;
pub mod angelscript;
pub mod critter;
pub mod item;
pub mod game_options;
pub mod assert;
pub mod measured;
pub mod contract_tests;

pub use ptr::*;
pub use stl::*;
pub use angelscript::*;
pub use critter::*;
pub use item::{client, server, item_size, ItemHead, ItemVec};
pub use game_options::*;
pub use measured::*;
pub use fo_layout_facts::BuildTarget;
