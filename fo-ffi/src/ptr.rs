// 32-bit engine pointers.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Address inside the 32-bit engine process.
///
/// The engine is an i686 binary, so every pointer member is 4 bytes no
/// matter what the host is. Mirrors store addresses as plain `u32` to keep
/// their layout identical on every host; the host never dereferences them.
#[repr(transparent)]
pub struct Ptr32<T: ?Sized>(pub u32, PhantomData<*const T>);

impl<T: ?Sized> Ptr32<T> {
    pub const NULL: Self = Ptr32(0, PhantomData);

    pub const fn new(addr: u32) -> Self {
        Ptr32(addr, PhantomData)
    }

    pub const fn addr(self) -> u32 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Reinterpret the pointee type.
    pub const fn cast<U: ?Sized>(self) -> Ptr32<U> {
        Ptr32(self.0, PhantomData)
    }
}

// Manual impls: derives would demand the same bounds on `T`.
impl<T: ?Sized> Clone for Ptr32<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Ptr32<T> {}

impl<T: ?Sized> Default for Ptr32<T> {
    fn default() -> Self {
        Self::NULL
    }
}

impl<T: ?Sized> PartialEq for Ptr32<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: ?Sized> Eq for Ptr32<T> {}

impl<T: ?Sized> Hash for Ptr32<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for Ptr32<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ptr32({:#010x})", self.0)
    }
}

/// Function pointer inside the engine process. Null means "not set".
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct FnPtr32(pub u32);

impl FnPtr32 {
    pub const fn is_set(self) -> bool {
        self.0 != 0
    }
}

// Addresses are plain integers; they can cross threads freely.
unsafe impl<T: ?Sized> Send for Ptr32<T> {}
unsafe impl<T: ?Sized> Sync for Ptr32<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_default() {
        let p: Ptr32<u8> = Ptr32::default();
        assert!(p.is_null());
        assert_eq!(p, Ptr32::NULL);
    }

    #[test]
    fn cast_keeps_address() {
        let p: Ptr32<u16> = Ptr32::new(0x0040_1000);
        assert_eq!(p.cast::<u64>().addr(), 0x0040_1000);
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(format!("{:?}", Ptr32::<u8>::new(0x10)), "Ptr32(0x00000010)");
    }
}
