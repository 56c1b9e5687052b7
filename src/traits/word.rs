/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use num_traits::{PrimInt, Unsigned};

/// Inner private trait used to make implementing [`Word`]
/// impossible for other types.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Word {}
}

/// The unsigned integer widths that can be moved between values and raw
/// memory.
///
/// Its only implementations are [`u8`], [`u16`], [`u32`], and [`u64`]. The
/// supertraits from [`num_traits`] provide the byte permutations
/// ([`swap_bytes`](PrimInt::swap_bytes), [`to_le`](PrimInt::to_le),
/// [`to_be`](PrimInt::to_be), and their inverses) on which the
/// endianness-explicit accessors are built.
pub trait Word: private::Word + PrimInt + Unsigned + core::fmt::Debug {
    /// The width of this type in bytes, which is also the alignment its
    /// aligned accessors require and the amount by which cursor accessors
    /// advance.
    const BYTES: usize;

    /// Truncating cast from a [`u64`].
    fn truncate_from(v: u64) -> Self;

    /// Lossless cast to a [`u64`].
    fn upcast(self) -> u64;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl private::Word for $ty {}
        impl Word for $ty {
            const BYTES: usize = core::mem::size_of::<$ty>();

            #[inline(always)]
            fn truncate_from(v: u64) -> Self {
                v as $ty
            }

            #[inline(always)]
            fn upcast(self) -> u64 {
                self as u64
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64);
