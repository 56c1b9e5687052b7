/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Host-order access to fixed-width integers in raw memory.
//!
//! The four generic entry points [`get`], [`put`], [`read`], and [`write`]
//! take an [`Alignment`] selector and a [`Word`] width; the monomorphic
//! per-width functions (`get_aligned_u16`, `put_u32`, `read_unaligned_u64`,
//! …) are expanded from them and exist purely for call-site convenience.
//!
//! No byte reordering happens at this level: values are moved in host order.
//! The endianness-explicit layer is [`endian`](crate::impls::endian).
//!
//! The unqualified forms (`get_u16`, `put_u32`, …) select the safest
//! general-purpose behavior: the maybe-aligned access for multi-byte widths,
//! and the (always valid) aligned access for `u8`. They are the recommended
//! default for callers that do not track alignment themselves.
//!
//! # Safety
//!
//! None of these functions performs bounds checking: every address (and, for
//! cursor forms, every address the cursor passes through) must be valid for
//! accesses of the requested width, and addresses passed to the `aligned`
//! forms must satisfy the alignment of the width. Violating either
//! precondition is undefined behavior, exactly as for a raw load or store.

use crate::traits::alignment::private::AlignmentCore;
use crate::traits::{Aligned, Alignment, MaybeAligned, Unaligned, Word};

/// Reads a `W` at `p` in host order, with the alignment assumption `A`.
///
/// # Safety
///
/// `p` must be valid for reads of `W::BYTES` bytes and, for [`Aligned`],
/// aligned to `W::BYTES`.
#[inline(always)]
#[must_use]
pub unsafe fn get<A: Alignment, W: Word>(p: *const u8) -> W {
    unsafe { A::get::<W>(p) }
}

/// Writes a `W` at `p` in host order, with the alignment assumption `A`.
///
/// # Safety
///
/// `p` must be valid for writes of `W::BYTES` bytes and, for [`Aligned`],
/// aligned to `W::BYTES`.
#[inline(always)]
pub unsafe fn put<A: Alignment, W: Word>(p: *mut u8, v: W) {
    unsafe { A::put::<W>(p, v) }
}

/// Reads a `W` at the cursor `p` in host order, with the alignment
/// assumption `A`, and advances the cursor by `W::BYTES` bytes.
///
/// The advance is unconditional: it does not depend on the value read.
///
/// # Safety
///
/// As for [`get`], at the cursor's current address.
#[inline(always)]
pub unsafe fn read<A: Alignment, W: Word>(p: &mut *const u8) -> W {
    let v = unsafe { A::get::<W>(*p) };
    *p = unsafe { (*p).add(W::BYTES) };
    v
}

/// Writes a `W` at the cursor `p` in host order, with the alignment
/// assumption `A`, and advances the cursor by `W::BYTES` bytes.
///
/// # Safety
///
/// As for [`put`], at the cursor's current address.
#[inline(always)]
pub unsafe fn write<A: Alignment, W: Word>(p: &mut *mut u8, v: W) {
    unsafe { A::put::<W>(*p, v) };
    *p = unsafe { (*p).add(W::BYTES) };
}

macro_rules! impl_width {
    ($W:ty, $DEF:ty,
     $get_aligned:ident, $get_unaligned:ident, $get_maybe_aligned:ident, $get:ident,
     $put_aligned:ident, $put_unaligned:ident, $put_maybe_aligned:ident, $put:ident,
     $read_aligned:ident, $read_unaligned:ident, $read_maybe_aligned:ident, $read:ident,
     $write_aligned:ident, $write_unaligned:ident, $write_maybe_aligned:ident, $write:ident) => {
        #[doc = concat!("Aligned read of a [`", stringify!($W), "`] at `p`, in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of the width of the accessed type and
        /// aligned to it.
        #[inline(always)]
        #[must_use]
        pub unsafe fn $get_aligned(p: *const u8) -> $W {
            unsafe { get::<Aligned, $W>(p) }
        }

        #[doc = concat!("Unaligned read of a [`", stringify!($W), "`] at `p`, in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of the width of the accessed type.
        #[inline(always)]
        #[must_use]
        pub unsafe fn $get_unaligned(p: *const u8) -> $W {
            unsafe { get::<Unaligned, $W>(p) }
        }

        #[doc = concat!("Read of a [`", stringify!($W), "`] at the, potentially unaligned, address `p`, in host order.")]
        ///
        /// The address is tested with
        /// [`is_aligned`](crate::traits::is_aligned) and the access is
        /// dispatched to the aligned or unaligned form accordingly.
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of the width of the accessed type.
        #[inline(always)]
        #[must_use]
        pub unsafe fn $get_maybe_aligned(p: *const u8) -> $W {
            unsafe { get::<MaybeAligned, $W>(p) }
        }

        #[doc = concat!("Read of a [`", stringify!($W), "`] at `p`, in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for reads of the width of the accessed type.
        #[inline(always)]
        #[must_use]
        pub unsafe fn $get(p: *const u8) -> $W {
            unsafe { get::<$DEF, $W>(p) }
        }

        #[doc = concat!("Aligned write of a [`", stringify!($W), "`] at `p`, in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of the width of the accessed type and
        /// aligned to it.
        #[inline(always)]
        pub unsafe fn $put_aligned(p: *mut u8, v: $W) {
            unsafe { put::<Aligned, $W>(p, v) }
        }

        #[doc = concat!("Unaligned write of a [`", stringify!($W), "`] at `p`, in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of the width of the accessed type.
        #[inline(always)]
        pub unsafe fn $put_unaligned(p: *mut u8, v: $W) {
            unsafe { put::<Unaligned, $W>(p, v) }
        }

        #[doc = concat!("Write of a [`", stringify!($W), "`] at the, potentially unaligned, address `p`, in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of the width of the accessed type.
        #[inline(always)]
        pub unsafe fn $put_maybe_aligned(p: *mut u8, v: $W) {
            unsafe { put::<MaybeAligned, $W>(p, v) }
        }

        #[doc = concat!("Write of a [`", stringify!($W), "`] at `p`, in host order.")]
        ///
        /// # Safety
        ///
        /// `p` must be valid for writes of the width of the accessed type.
        #[inline(always)]
        pub unsafe fn $put(p: *mut u8, v: $W) {
            unsafe { put::<$DEF, $W>(p, v) }
        }

        #[doc = concat!("Aligned read of a [`", stringify!($W), "`] at the cursor `p`, in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for reads of the width of the accessed
        /// type and aligned to it.
        #[inline(always)]
        pub unsafe fn $read_aligned(p: &mut *const u8) -> $W {
            unsafe { read::<Aligned, $W>(p) }
        }

        #[doc = concat!("Unaligned read of a [`", stringify!($W), "`] at the cursor `p`, in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for reads of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $read_unaligned(p: &mut *const u8) -> $W {
            unsafe { read::<Unaligned, $W>(p) }
        }

        #[doc = concat!("Read of a [`", stringify!($W), "`] at the, potentially unaligned, cursor `p`, in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for reads of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $read_maybe_aligned(p: &mut *const u8) -> $W {
            unsafe { read::<MaybeAligned, $W>(p) }
        }

        #[doc = concat!("Read of a [`", stringify!($W), "`] at the cursor `p`, in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for reads of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $read(p: &mut *const u8) -> $W {
            unsafe { read::<$DEF, $W>(p) }
        }

        #[doc = concat!("Aligned write of a [`", stringify!($W), "`] at the cursor `p`, in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for writes of the width of the accessed
        /// type and aligned to it.
        #[inline(always)]
        pub unsafe fn $write_aligned(p: &mut *mut u8, v: $W) {
            unsafe { write::<Aligned, $W>(p, v) }
        }

        #[doc = concat!("Unaligned write of a [`", stringify!($W), "`] at the cursor `p`, in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for writes of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $write_unaligned(p: &mut *mut u8, v: $W) {
            unsafe { write::<Unaligned, $W>(p, v) }
        }

        #[doc = concat!("Write of a [`", stringify!($W), "`] at the, potentially unaligned, cursor `p`, in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for writes of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $write_maybe_aligned(p: &mut *mut u8, v: $W) {
            unsafe { write::<MaybeAligned, $W>(p, v) }
        }

        #[doc = concat!("Write of a [`", stringify!($W), "`] at the cursor `p`, in host order, advancing the cursor by the width of the accessed type.")]
        ///
        /// # Safety
        ///
        /// The cursor must be valid for writes of the width of the accessed
        /// type.
        #[inline(always)]
        pub unsafe fn $write(p: &mut *mut u8, v: $W) {
            unsafe { write::<$DEF, $W>(p, v) }
        }
    };
}

// For u8 every alignment assumption is observably identical, and the
// unqualified form is the aligned one; for wider types it is the
// maybe-aligned one.
impl_width!(
    u8, Aligned,
    get_aligned_u8, get_unaligned_u8, get_maybe_aligned_u8, get_u8,
    put_aligned_u8, put_unaligned_u8, put_maybe_aligned_u8, put_u8,
    read_aligned_u8, read_unaligned_u8, read_maybe_aligned_u8, read_u8,
    write_aligned_u8, write_unaligned_u8, write_maybe_aligned_u8, write_u8
);
impl_width!(
    u16, MaybeAligned,
    get_aligned_u16, get_unaligned_u16, get_maybe_aligned_u16, get_u16,
    put_aligned_u16, put_unaligned_u16, put_maybe_aligned_u16, put_u16,
    read_aligned_u16, read_unaligned_u16, read_maybe_aligned_u16, read_u16,
    write_aligned_u16, write_unaligned_u16, write_maybe_aligned_u16, write_u16
);
impl_width!(
    u32, MaybeAligned,
    get_aligned_u32, get_unaligned_u32, get_maybe_aligned_u32, get_u32,
    put_aligned_u32, put_unaligned_u32, put_maybe_aligned_u32, put_u32,
    read_aligned_u32, read_unaligned_u32, read_maybe_aligned_u32, read_u32,
    write_aligned_u32, write_unaligned_u32, write_maybe_aligned_u32, write_u32
);
impl_width!(
    u64, MaybeAligned,
    get_aligned_u64, get_unaligned_u64, get_maybe_aligned_u64, get_u64,
    put_aligned_u64, put_unaligned_u64, put_maybe_aligned_u64, put_u64,
    read_aligned_u64, read_unaligned_u64, read_maybe_aligned_u64, read_u64,
    write_aligned_u64, write_unaligned_u64, write_maybe_aligned_u64, write_u64
);
