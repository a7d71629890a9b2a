// AngelScript add-on objects exposed by the engine.

use std::ffi::c_void;

use crate::ptr::Ptr32;
use crate::stl::StdString;

/// Opaque `asIObjectType`.
#[repr(C)]
pub struct AsObjectType {
    _private: [u8; 0],
}

/// Script-side `string`: a ref-counted wrapper around `std::string`.
#[repr(C)]
pub struct ScriptString {
    pub vtable: Ptr32<c_void>,
    pub buffer: StdString,
    pub ref_count: i32,
}

impl ScriptString {
    /// Contents when short enough to be stored inline.
    pub fn inline_bytes(&self) -> Option<&[u8]> {
        self.buffer.inline_bytes()
    }
}

/// Storage block behind a `ScriptArray`. `data` is the first of
/// `num_elements * element_size` bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ArrayBuffer {
    pub num_elements: u32,
    pub data: [u8; 1],
}

/// Script-side `array<T>`.
#[repr(C)]
pub struct ScriptArray {
    pub vtable: Ptr32<c_void>,
    pub ref_count: i32,
    pub gc_flag: bool,
    pub obj_type: Ptr32<AsObjectType>,
    pub buffer: Ptr32<ArrayBuffer>,
    pub element_size: i32,
    pub sub_type_id: i32,
}
