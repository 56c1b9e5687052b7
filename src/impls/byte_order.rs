/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Host byte-order detection and value-level byte swapping.
//!
//! The host byte order is a compile-time constant: [`ByteOrder::NATIVE`] is
//! fixed by `cfg(target_endian)` and [`ByteOrder::current`] just returns it.
//! The conversion functions are identities when the source (or destination)
//! order coincides with the host order, and byte swaps otherwise.

use crate::traits::Word;

/// The byte order of a target system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ByteOrder {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl ByteOrder {
    /// The byte order of the host.
    #[cfg(target_endian = "little")]
    pub const NATIVE: ByteOrder = ByteOrder::Little;

    /// The byte order of the host.
    #[cfg(target_endian = "big")]
    pub const NATIVE: ByteOrder = ByteOrder::Big;

    /// Returns the byte order of the host.
    ///
    /// This is a query-style convenience equivalent to [`ByteOrder::NATIVE`]:
    /// byte order is fixed per target and cannot change during the lifetime
    /// of a process.
    #[inline(always)]
    #[must_use]
    pub const fn current() -> Self {
        Self::NATIVE
    }
}

/// Reverses the bytes of a 16-bit value.
#[inline(always)]
#[must_use]
pub const fn swap_bytes16(v: u16) -> u16 {
    v.swap_bytes()
}

/// Reverses the bytes of a 32-bit value.
#[inline(always)]
#[must_use]
pub const fn swap_bytes32(v: u32) -> u32 {
    v.swap_bytes()
}

/// Reverses the bytes of a 64-bit value.
#[inline(always)]
#[must_use]
pub const fn swap_bytes64(v: u64) -> u64 {
    v.swap_bytes()
}

/// Converts a little-endian value to host order.
#[inline(always)]
#[must_use]
pub fn swap_little_to_host<W: Word>(v: W) -> W {
    W::from_le(v)
}

/// Converts a host-order value to little-endian.
#[inline(always)]
#[must_use]
pub fn swap_host_to_little<W: Word>(v: W) -> W {
    v.to_le()
}

/// Converts a big-endian value to host order.
#[inline(always)]
#[must_use]
pub fn swap_big_to_host<W: Word>(v: W) -> W {
    W::from_be(v)
}

/// Converts a host-order value to big-endian.
#[inline(always)]
#[must_use]
pub fn swap_host_to_big<W: Word>(v: W) -> W {
    v.to_be()
}

/// Reverses the bytes of a value in place.
///
/// For [`u8`] this is the identity, as single bytes have no byte order.
#[inline(always)]
pub fn swap_bytes_in_place<W: Word>(v: &mut W) {
    *v = v.swap_bytes();
}

/// Converts a little-endian value to host order in place.
#[inline(always)]
pub fn swap_little_to_host_in_place<W: Word>(v: &mut W) {
    *v = W::from_le(*v);
}

/// Converts a host-order value to little-endian in place.
#[inline(always)]
pub fn swap_host_to_little_in_place<W: Word>(v: &mut W) {
    *v = v.to_le();
}

/// Converts a big-endian value to host order in place.
#[inline(always)]
pub fn swap_big_to_host_in_place<W: Word>(v: &mut W) {
    *v = W::from_be(*v);
}

/// Converts a host-order value to big-endian in place.
#[inline(always)]
pub fn swap_host_to_big_in_place<W: Word>(v: &mut W) {
    *v = v.to_be();
}

#[test]
fn test_native_agrees_with_conversions() {
    match ByteOrder::NATIVE {
        ByteOrder::Little => {
            assert_eq!(swap_little_to_host(0xABCDu16), 0xABCD);
            assert_eq!(swap_big_to_host(0xABCDu16), 0xCDAB);
        }
        ByteOrder::Big => {
            assert_eq!(swap_little_to_host(0xABCDu16), 0xCDAB);
            assert_eq!(swap_big_to_host(0xABCDu16), 0xABCD);
        }
    }
}
