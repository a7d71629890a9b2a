// Compile-time layout assertion.

/// Fail compilation unless `size_of::<$ty>() == $size`.
///
/// The error names the type and the expected size, so a drifted mirror is
/// identified by the diagnostic alone:
///
/// ```
/// fo_ffi::assert_layout!(fo_ffi::UintPair, 8);
/// ```
///
/// ```compile_fail
/// fo_ffi::assert_layout!(fo_ffi::UintPair, 9);
/// ```
#[macro_export]
macro_rules! assert_layout {
    ($ty:ty, $size:expr) => {
        const _: () = assert!(
            ::core::mem::size_of::<$ty>() == $size,
            concat!(
                "layout mismatch: `",
                stringify!($ty),
                "` expected ",
                stringify!($size),
                " bytes"
            )
        );
    };
}
