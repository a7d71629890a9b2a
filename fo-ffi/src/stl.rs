// Standard library containers as laid out by the engine's r476 runtime.
//
// Every container starts with a debug-iterator proxy pointer, which is why
// they are one word larger than a release-mode STL would make them.

use std::ffi::c_void;
use std::marker::PhantomData;
use std::mem::size_of;

use crate::ptr::Ptr32;

/// `std::pair<A, B>`.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct StdPair<A, B> {
    pub first: A,
    pub second: B,
}

/// `std::vector<T>`: proxy plus begin/end/capacity-end pointers.
#[repr(C)]
pub struct StdVector<T> {
    pub proxy: Ptr32<c_void>,
    pub first: Ptr32<T>,
    pub last: Ptr32<T>,
    pub end: Ptr32<T>,
}

impl<T> StdVector<T> {
    pub const fn is_empty(&self) -> bool {
        self.first.is_null() || self.first.addr() == self.last.addr()
    }

    /// Element count. Only meaningful when `T` is itself a mirror whose
    /// host size matches the engine's.
    pub fn len(&self) -> usize {
        let elem = size_of::<T>();
        if elem == 0 || self.first.is_null() {
            return 0;
        }
        self.last.addr().wrapping_sub(self.first.addr()) as usize / elem
    }

    pub fn capacity(&self) -> usize {
        let elem = size_of::<T>();
        if elem == 0 || self.first.is_null() {
            return 0;
        }
        self.end.addr().wrapping_sub(self.first.addr()) as usize / elem
    }
}

/// Red-black tree shared by `std::set` and `std::map`.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StdTree {
    pub proxy: Ptr32<c_void>,
    pub head: Ptr32<c_void>,
    pub size: u32,
    _comparator: u32,
}

/// `std::set<T>`.
#[repr(C)]
pub struct StdSet<T> {
    pub tree: StdTree,
    _marker: PhantomData<T>,
}

impl<T> StdSet<T> {
    pub const fn len(&self) -> usize {
        self.tree.size as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.tree.size == 0
    }
}

/// `std::map<K, V>`.
#[repr(C)]
pub struct StdMap<K, V> {
    pub tree: StdTree,
    _marker: PhantomData<(K, V)>,
}

impl<K, V> StdMap<K, V> {
    pub const fn len(&self) -> usize {
        self.tree.size as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.tree.size == 0
    }
}

/// Small-string buffer: inline storage for up to 15 chars, else a heap pointer.
#[repr(C)]
#[derive(Clone, Copy)]
pub union StringBuf {
    pub inline: [u8; 16],
    pub heap: Ptr32<u8>,
}

/// `std::string`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct StdString {
    pub proxy: Ptr32<c_void>,
    pub buf: StringBuf,
    pub size: u32,
    pub capacity: u32,
}

impl StdString {
    pub const INLINE_CAPACITY: u32 = 15;

    pub const fn len(&self) -> usize {
        self.size as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether the characters live in `buf.inline` rather than on the heap.
    pub const fn is_inline(&self) -> bool {
        self.capacity <= Self::INLINE_CAPACITY
    }

    /// Contents when stored inline; `None` for heap-allocated strings.
    pub fn inline_bytes(&self) -> Option<&[u8]> {
        if !self.is_inline() {
            return None;
        }
        // SAFETY: `is_inline` means the engine wrote the characters into
        // the inline array; any bit pattern is a valid `[u8; 16]`.
        let bytes = unsafe { &self.buf.inline };
        bytes.get(..self.len())
    }
}

pub type UintPair = StdPair<u32, u32>;
pub type Uint16Pair = StdPair<u16, u16>;

pub type IntVec = StdVector<i32>;
pub type UintVec = StdVector<u32>;
pub type Uint16Vec = StdVector<u16>;
pub type UintPairVec = StdVector<UintPair>;
pub type Uint16PairVec = StdVector<Uint16Pair>;

pub type IntSet = StdSet<i32>;
pub type UintSet = StdSet<u32>;

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(first: u32, last: u32, end: u32) -> StdVector<u32> {
        StdVector {
            proxy: Ptr32::NULL,
            first: Ptr32::new(first),
            last: Ptr32::new(last),
            end: Ptr32::new(end),
        }
    }

    #[test]
    fn vector_len_and_capacity_from_addresses() {
        let v = vector(0x1000, 0x1010, 0x1020);
        assert_eq!(v.len(), 4);
        assert_eq!(v.capacity(), 8);
        assert!(!v.is_empty());
    }

    #[test]
    fn null_vector_is_empty() {
        let v = vector(0, 0, 0);
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
    }

    #[test]
    fn inline_string_exposes_bytes() {
        let mut inline = [0u8; 16];
        inline[..5].copy_from_slice(b"Klint");
        let s = StdString {
            proxy: Ptr32::NULL,
            buf: StringBuf { inline },
            size: 5,
            capacity: 15,
        };
        assert_eq!(s.inline_bytes(), Some(&b"Klint"[..]));
    }

    #[test]
    fn heap_string_has_no_inline_bytes() {
        let s = StdString {
            proxy: Ptr32::NULL,
            buf: StringBuf { heap: Ptr32::new(0x2000) },
            size: 40,
            capacity: 47,
        };
        assert!(!s.is_inline());
        assert_eq!(s.inline_bytes(), None);
    }
}
