/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Memory-access primitives and byte-order operations.

[`byte_order`] detects the host byte order and swaps values;
[`raw`] moves fixed-width integers between values and raw memory in host
order, with a statically selected alignment assumption; [`endian`] layers an
explicit byte order ([`le`], [`be`]) on top of [`raw`].

*/

pub mod byte_order;
pub mod endian;
pub mod raw;

pub use byte_order::*;
pub use endian::{be, le};
