/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Selector types for the byte order of memory accesses.
//!
//! Note that we use an inner private trait `EndiannessCore` so that an user
//! can use [`Endianness`] for its generics, but cannot implement it, so all
//! the types that will ever implement [`Endianness`] are defined in this
//! file.
//!
//! Apparently this pattern is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).

use crate::traits::Word;

/// Inner private trait used to remove the possibility that anyone could
/// implement [`Endianness`] on other structs.
pub(crate) mod private {
    use crate::traits::Word;

    pub trait EndiannessCore {
        /// Convert a value stored in this byte order to host order.
        fn to_host<W: Word>(v: W) -> W;
        /// Convert a value in host order to this byte order.
        fn from_host<W: Word>(v: W) -> W;
    }
}

impl<T: private::EndiannessCore> Endianness for T {}

/// Marker trait for endianness selector types.
///
/// Its only implementations are [`LittleEndian`], [`BigEndian`], and
/// [`NativeEndian`].
///
/// Note that in principle marker traits are not necessary to use
/// selector types, but they are useful to avoid that the user specifies
/// a nonsensical type, and to document the meaning of type parameters.
pub trait Endianness: private::EndiannessCore {}

/// Selector type for little-endian accesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LittleEndian;

/// Selector type for big-endian accesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigEndian;

/// Selector type for host-order accesses (no byte reordering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`NativeEndian`]
pub type NE = NativeEndian;

impl private::EndiannessCore for LittleEndian {
    #[inline(always)]
    fn to_host<W: Word>(v: W) -> W {
        W::from_le(v)
    }

    #[inline(always)]
    fn from_host<W: Word>(v: W) -> W {
        v.to_le()
    }
}

impl private::EndiannessCore for BigEndian {
    #[inline(always)]
    fn to_host<W: Word>(v: W) -> W {
        W::from_be(v)
    }

    #[inline(always)]
    fn from_host<W: Word>(v: W) -> W {
        v.to_be()
    }
}

impl private::EndiannessCore for NativeEndian {
    #[inline(always)]
    fn to_host<W: Word>(v: W) -> W {
        v
    }

    #[inline(always)]
    fn from_host<W: Word>(v: W) -> W {
        v
    }
}
