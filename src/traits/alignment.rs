/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Selector types for the alignment assumption of memory accesses.
//!
//! [`Aligned`] dereferences the address directly and is undefined behavior
//! on a misaligned address; [`Unaligned`] moves the value with byte-copy
//! semantics and is valid at any address; [`MaybeAligned`] tests the address
//! with [`is_aligned`] and dispatches to one of the other two.
//!
//! As for [`Endianness`](crate::traits::Endianness), an inner private trait
//! `AlignmentCore` makes the set of selector types closed.

use self::private::AlignmentCore;
use crate::traits::Word;

/// Inner private trait used to remove the possibility that anyone could
/// implement [`Alignment`] on other structs.
pub(crate) mod private {
    use crate::traits::Word;

    pub trait AlignmentCore {
        /// Read a `W` at `p` in host order.
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of `W::BYTES` bytes and, for the
        /// [`Aligned`](super::Aligned) selector, aligned to `W::BYTES`.
        unsafe fn get<W: Word>(p: *const u8) -> W;

        /// Write a `W` at `p` in host order.
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of `W::BYTES` bytes and, for the
        /// [`Aligned`](super::Aligned) selector, aligned to `W::BYTES`.
        unsafe fn put<W: Word>(p: *mut u8, v: W);
    }
}

impl<T: private::AlignmentCore> Alignment for T {}

/// Marker trait for alignment selector types.
///
/// Its only implementations are [`Aligned`], [`Unaligned`], and
/// [`MaybeAligned`].
pub trait Alignment: private::AlignmentCore {}

/// Selector type for accesses whose address is already aligned to the
/// accessed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aligned;

/// Selector type for accesses at arbitrary addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unaligned;

/// Selector type for accesses whose address is tested for alignment at run
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaybeAligned;

/// Returns true if `p` is aligned on a `size`-byte boundary.
///
/// `size` must be a power of two (1, 2, 4, 8, …); the result is unspecified
/// otherwise. With the `checks` feature a non-power-of-two `size` panics.
#[inline(always)]
#[must_use]
pub fn is_aligned<T>(p: *const T, size: usize) -> bool {
    #[cfg(feature = "checks")]
    assert!(size.is_power_of_two());
    p.addr() & (size - 1) == 0
}

impl private::AlignmentCore for Aligned {
    #[inline(always)]
    unsafe fn get<W: Word>(p: *const u8) -> W {
        #[cfg(feature = "checks")]
        assert!(is_aligned(p, W::BYTES));
        unsafe { p.cast::<W>().read() }
    }

    #[inline(always)]
    unsafe fn put<W: Word>(p: *mut u8, v: W) {
        #[cfg(feature = "checks")]
        assert!(is_aligned(p, W::BYTES));
        unsafe { p.cast::<W>().write(v) }
    }
}

impl private::AlignmentCore for Unaligned {
    #[inline(always)]
    unsafe fn get<W: Word>(p: *const u8) -> W {
        unsafe { p.cast::<W>().read_unaligned() }
    }

    #[inline(always)]
    unsafe fn put<W: Word>(p: *mut u8, v: W) {
        unsafe { p.cast::<W>().write_unaligned(v) }
    }
}

impl private::AlignmentCore for MaybeAligned {
    #[inline(always)]
    unsafe fn get<W: Word>(p: *const u8) -> W {
        if is_aligned(p, W::BYTES) {
            unsafe { Aligned::get::<W>(p) }
        } else {
            unsafe { Unaligned::get::<W>(p) }
        }
    }

    #[inline(always)]
    unsafe fn put<W: Word>(p: *mut u8, v: W) {
        if is_aligned(p, W::BYTES) {
            unsafe { Aligned::put::<W>(p, v) }
        } else {
            unsafe { Unaligned::put::<W>(p, v) }
        }
    }
}

#[test]
fn test_is_aligned() {
    let x = 0u64;
    let p = core::ptr::from_ref(&x).cast::<u8>();
    for size in [1, 2, 4, 8] {
        assert!(is_aligned(p, size));
    }
    assert!(is_aligned(unsafe { p.add(4) }, 4));
    assert!(!is_aligned(unsafe { p.add(1) }, 2));
    assert!(!is_aligned(unsafe { p.add(2) }, 4));
    assert!(!is_aligned(unsafe { p.add(4) }, 8));
}
