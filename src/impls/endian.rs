/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Endianness-explicit access to fixed-width integers in raw memory.
//!
//! This layer composes the host-order accessors of
//! [`raw`](crate::impls::raw) with the byte reordering of an [`Endianness`]
//! selector: a get (or cursor read) converts the obtained value from the
//! selected order to host order, and a put (or cursor write) converts the
//! value from host order to the selected order before storing it. There is
//! no independent alignment or bounds logic here.
//!
//! The [`le`] and [`be`] modules provide the monomorphic per-width surface;
//! for [`u8`] the conversion is the identity, and those functions exist
//! purely for interface uniformity across widths.
//!
//! # Safety
//!
//! The preconditions are exactly those of the underlying
//! [`raw`](crate::impls::raw) access: no bounds checking, and aligned forms
//! require an aligned address.

use crate::impls::raw;
use crate::traits::endianness::private::EndiannessCore;
use crate::traits::{
    Aligned, Alignment, BigEndian, Endianness, LittleEndian, MaybeAligned, Unaligned, Word,
};

/// Reads a `W` stored at `p` in byte order `E`, with the alignment
/// assumption `A`, and returns it in host order.
///
/// # Safety
///
/// As for [`raw::get`].
#[inline(always)]
#[must_use]
pub unsafe fn get<E: Endianness, A: Alignment, W: Word>(p: *const u8) -> W {
    E::to_host(unsafe { raw::get::<A, W>(p) })
}

/// Writes the host-order value `v` at `p` in byte order `E`, with the
/// alignment assumption `A`.
///
/// # Safety
///
/// As for [`raw::put`].
#[inline(always)]
pub unsafe fn put<E: Endianness, A: Alignment, W: Word>(p: *mut u8, v: W) {
    unsafe { raw::put::<A, W>(p, E::from_host(v)) }
}

/// Reads a `W` stored at the cursor `p` in byte order `E`, with the
/// alignment assumption `A`, returns it in host order, and advances the
/// cursor by `W::BYTES` bytes.
///
/// The cursor advances as in [`raw::read`], whether or not a byte swap
/// happens.
///
/// # Safety
///
/// As for [`raw::read`].
#[inline(always)]
pub unsafe fn read<E: Endianness, A: Alignment, W: Word>(p: &mut *const u8) -> W {
    E::to_host(unsafe { raw::read::<A, W>(p) })
}

/// Writes the host-order value `v` at the cursor `p` in byte order `E`,
/// with the alignment assumption `A`, and advances the cursor by `W::BYTES`
/// bytes.
///
/// # Safety
///
/// As for [`raw::write`].
#[inline(always)]
pub unsafe fn write<E: Endianness, A: Alignment, W: Word>(p: &mut *mut u8, v: W) {
    unsafe { raw::write::<A, W>(p, E::from_host(v)) }
}

macro_rules! impl_order_width {
    ($E:ty, $W:ty, $DEF:ty,
     $get_aligned:ident, $get_unaligned:ident, $get_maybe_aligned:ident, $get:ident,
     $put_aligned:ident, $put_unaligned:ident, $put_maybe_aligned:ident, $put:ident,
     $read_aligned:ident, $read_unaligned:ident, $read_maybe_aligned:ident, $read:ident,
     $write_aligned:ident, $write_unaligned:ident, $write_maybe_aligned:ident, $write:ident) => {
        #[doc = concat!("Aligned read of a [`", stringify!($W), "`] stored at `p` in [`", stringify!($E), "`] order, returned in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of the width of the accessed type and
        /// aligned to it.
        #[inline(always)]
        #[must_use]
        pub unsafe fn $get_aligned(p: *const u8) -> $W {
            unsafe { get::<$E, Aligned, $W>(p) }
        }

        #[doc = concat!("Unaligned read of a [`", stringify!($W), "`] stored at `p` in [`", stringify!($E), "`] order, returned in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of the width of the accessed type.
        #[inline(always)]
        #[must_use]
        pub unsafe fn $get_unaligned(p: *const u8) -> $W {
            unsafe { get::<$E, Unaligned, $W>(p) }
        }

        #[doc = concat!("Read of a [`", stringify!($W), "`] stored at the, potentially unaligned, address `p` in [`", stringify!($E), "`] order, returned in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of the width of the accessed type.
        #[inline(always)]
        #[must_use]
        pub unsafe fn $get_maybe_aligned(p: *const u8) -> $W {
            unsafe { get::<$E, MaybeAligned, $W>(p) }
        }

        #[doc = concat!("Read of a [`", stringify!($W), "`] stored at `p` in [`", stringify!($E), "`] order, returned in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of the width of the accessed type.
        #[inline(always)]
        #[must_use]
        pub unsafe fn $get(p: *const u8) -> $W {
            unsafe { get::<$E, $DEF, $W>(p) }
        }

        #[doc = concat!("Aligned write of a host-order [`", stringify!($W), "`] at `p`, stored in [`", stringify!($E), "`] order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of the width of the accessed type and
        /// aligned to it.
        #[inline(always)]
        pub unsafe fn $put_aligned(p: *mut u8, v: $W) {
            unsafe { put::<$E, Aligned, $W>(p, v) }
        }

        #[doc = concat!("Unaligned write of a host-order [`", stringify!($W), "`] at `p`, stored in [`", stringify!($E), "`] order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of the width of the accessed type.
        #[inline(always)]
        pub unsafe fn $put_unaligned(p: *mut u8, v: $W) {
            unsafe { put::<$E, Unaligned, $W>(p, v) }
        }

        #[doc = concat!("Write of a host-order [`", stringify!($W), "`] at the, potentially unaligned, address `p`, stored in [`", stringify!($E), "`] order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of the width of the accessed type.
        #[inline(always)]
        pub unsafe fn $put_maybe_aligned(p: *mut u8, v: $W) {
            unsafe { put::<$E, MaybeAligned, $W>(p, v) }
        }

        #[doc = concat!("Write of a host-order [`", stringify!($W), "`] at `p`, stored in [`", stringify!($E), "`] order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of the width of the accessed type.
        #[inline(always)]
        pub unsafe fn $put(p: *mut u8, v: $W) {
            unsafe { put::<$E, $DEF, $W>(p, v) }
        }

        #[doc = concat!("Aligned read of a [`", stringify!($W), "`] stored at the cursor `p` in [`", stringify!($E), "`] order, returned in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for reads of the width of the accessed
        /// type and aligned to it.
        #[inline(always)]
        pub unsafe fn $read_aligned(p: &mut *const u8) -> $W {
            unsafe { read::<$E, Aligned, $W>(p) }
        }

        #[doc = concat!("Unaligned read of a [`", stringify!($W), "`] stored at the cursor `p` in [`", stringify!($E), "`] order, returned in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for reads of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $read_unaligned(p: &mut *const u8) -> $W {
            unsafe { read::<$E, Unaligned, $W>(p) }
        }

        #[doc = concat!("Read of a [`", stringify!($W), "`] stored at the, potentially unaligned, cursor `p` in [`", stringify!($E), "`] order, returned in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for reads of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $read_maybe_aligned(p: &mut *const u8) -> $W {
            unsafe { read::<$E, MaybeAligned, $W>(p) }
        }

        #[doc = concat!("Read of a [`", stringify!($W), "`] stored at the cursor `p` in [`", stringify!($E), "`] order, returned in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for reads of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $read(p: &mut *const u8) -> $W {
            unsafe { read::<$E, $DEF, $W>(p) }
        }

        #[doc = concat!("Aligned write of a host-order [`", stringify!($W), "`] at the cursor `p`, stored in [`", stringify!($E), "`] order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for writes of the width of the accessed
        /// type and aligned to it.
        #[inline(always)]
        pub unsafe fn $write_aligned(p: &mut *mut u8, v: $W) {
            unsafe { write::<$E, Aligned, $W>(p, v) }
        }

        #[doc = concat!("Unaligned write of a host-order [`", stringify!($W), "`] at the cursor `p`, stored in [`", stringify!($E), "`] order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for writes of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $write_unaligned(p: &mut *mut u8, v: $W) {
            unsafe { write::<$E, Unaligned, $W>(p, v) }
        }

        #[doc = concat!("Write of a host-order [`", stringify!($W), "`] at the, potentially unaligned, cursor `p`, stored in [`", stringify!($E), "`] order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for writes of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $write_maybe_aligned(p: &mut *mut u8, v: $W) {
            unsafe { write::<$E, MaybeAligned, $W>(p, v) }
        }

        #[doc = concat!("Write of a host-order [`", stringify!($W), "`] at the cursor `p`, stored in [`", stringify!($E), "`] order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for writes of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $write(p: &mut *mut u8, v: $W) {
            unsafe { write::<$E, $DEF, $W>(p, v) }
        }
    };
}

macro_rules! impl_order {
    ($E:ty) => {
        impl_order_width!(
            $E, u8, Aligned,
            get_aligned_u8, get_unaligned_u8, get_maybe_aligned_u8, get_u8,
            put_aligned_u8, put_unaligned_u8, put_maybe_aligned_u8, put_u8,
            read_aligned_u8, read_unaligned_u8, read_maybe_aligned_u8, read_u8,
            write_aligned_u8, write_unaligned_u8, write_maybe_aligned_u8, write_u8
        );
        impl_order_width!(
            $E, u16, MaybeAligned,
            get_aligned_u16, get_unaligned_u16, get_maybe_aligned_u16, get_u16,
            put_aligned_u16, put_unaligned_u16, put_maybe_aligned_u16, put_u16,
            read_aligned_u16, read_unaligned_u16, read_maybe_aligned_u16, read_u16,
            write_aligned_u16, write_unaligned_u16, write_maybe_aligned_u16, write_u16
        );
        impl_order_width!(
            $E, u32, MaybeAligned,
            get_aligned_u32, get_unaligned_u32, get_maybe_aligned_u32, get_u32,
            put_aligned_u32, put_unaligned_u32, put_maybe_aligned_u32, put_u32,
            read_aligned_u32, read_unaligned_u32, read_maybe_aligned_u32, read_u32,
            write_aligned_u32, write_unaligned_u32, write_maybe_aligned_u32, write_u32
        );
        impl_order_width!(
            $E, u64, MaybeAligned,
            get_aligned_u64, get_unaligned_u64, get_maybe_aligned_u64, get_u64,
            put_aligned_u64, put_unaligned_u64, put_maybe_aligned_u64, put_u64,
            read_aligned_u64, read_unaligned_u64, read_maybe_aligned_u64, read_u64,
            write_aligned_u64, write_unaligned_u64, write_maybe_aligned_u64, write_u64
        );
    };
}

/// Little-endian per-width accessors.
pub mod le {
    use super::*;

    impl_order!(LittleEndian);
}

/// Big-endian per-width accessors.
pub mod be {
    use super::*;

    impl_order!(BigEndian);
}
