/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits and selector types.

The axes of variation of a memory access are chosen at the type level:
[`Word`] selects the accessed width, [`Alignment`] the alignment assumption,
and [`Endianness`] the byte order. The selector types are zero-sized, so the
generic accessors in [`impls`](crate::impls) monomorphize to straight-line
code.

*/

pub(crate) mod alignment;
pub use alignment::*;

pub(crate) mod endianness;
pub use endianness::*;

mod word;
pub use word::*;
