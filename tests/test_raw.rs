/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use endian_io::prelude::*;
use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

const LEN: usize = 64;

/// A buffer whose base address satisfies the alignment of every accessed
/// width, so that offsets control alignment exactly.
#[repr(C, align(8))]
struct AlignedBuf([u8; LEN]);

impl AlignedBuf {
    fn new() -> Self {
        AlignedBuf([0; LEN])
    }
}

fn round_trip<A: Alignment, W: Word>(rng: &mut SmallRng, offset: usize) {
    let mut buf = AlignedBuf::new();
    let v = W::truncate_from(rng.random::<u64>());
    unsafe {
        raw::put::<A, W>(buf.0[offset..].as_mut_ptr(), v);
        assert_eq!(raw::get::<A, W>(buf.0[offset..].as_ptr()), v);
    }
}

fn round_trip_width<W: Word>(rng: &mut SmallRng) {
    for offset in (0..LEN - W::BYTES).step_by(W::BYTES) {
        round_trip::<Aligned, W>(rng, offset);
    }
    for offset in 0..=W::BYTES {
        round_trip::<Unaligned, W>(rng, offset);
        round_trip::<MaybeAligned, W>(rng, offset);
    }
}

#[test]
fn test_round_trip() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..100 {
        round_trip_width::<u8>(&mut rng);
        round_trip_width::<u16>(&mut rng);
        round_trip_width::<u32>(&mut rng);
        round_trip_width::<u64>(&mut rng);
    }
}

fn cursor_advance<A: Alignment, W: Word>(rng: &mut SmallRng, offset: usize) {
    let mut buf = AlignedBuf::new();
    let v = W::truncate_from(rng.random::<u64>());

    let mut cursor = buf.0[offset..].as_mut_ptr();
    let start = cursor;
    unsafe {
        raw::write::<A, W>(&mut cursor, v);
        assert_eq!(cursor, start.add(W::BYTES));
    }

    let mut cursor = buf.0[offset..].as_ptr();
    let start = cursor;
    unsafe {
        assert_eq!(raw::read::<A, W>(&mut cursor), v);
        assert_eq!(cursor, start.add(W::BYTES));
    }
}

fn cursor_advance_width<W: Word>(rng: &mut SmallRng) {
    cursor_advance::<Aligned, W>(rng, 0);
    for offset in 0..=W::BYTES {
        cursor_advance::<Unaligned, W>(rng, offset);
        cursor_advance::<MaybeAligned, W>(rng, offset);
    }
}

#[test]
fn test_cursor_advance() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..100 {
        cursor_advance_width::<u8>(&mut rng);
        cursor_advance_width::<u16>(&mut rng);
        cursor_advance_width::<u32>(&mut rng);
        cursor_advance_width::<u64>(&mut rng);
    }
}

fn maybe_aligned_equivalence<W: Word>(buf: &AlignedBuf) {
    for offset in 0..=LEN - W::BYTES {
        let p = buf.0[offset..].as_ptr();
        unsafe {
            let expected = if is_aligned(p, W::BYTES) {
                raw::get::<Aligned, W>(p)
            } else {
                raw::get::<Unaligned, W>(p)
            };
            assert_eq!(raw::get::<MaybeAligned, W>(p), expected);
        }
    }
}

#[test]
fn test_maybe_aligned_equivalence() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut buf = AlignedBuf::new();
    rng.fill(&mut buf.0[..]);
    maybe_aligned_equivalence::<u8>(&buf);
    maybe_aligned_equivalence::<u16>(&buf);
    maybe_aligned_equivalence::<u32>(&buf);
    maybe_aligned_equivalence::<u64>(&buf);
}

// Exhaustive byte-placement check of the unaligned accessors: at every
// misalignment the written bytes must land exactly at the written offset and
// leave every other byte untouched.
macro_rules! test_unaligned_all_offsets {
    ($test:ident, $ty:ty, $put:ident, $get_unaligned:ident, $get_maybe_aligned:ident) => {
        #[test]
        fn $test() {
            const BYTES: usize = core::mem::size_of::<$ty>();
            let mut rng = SmallRng::seed_from_u64(0);
            for offset in 0..BYTES {
                let v = rng.random::<u64>() as $ty;
                let mut buf = AlignedBuf::new();
                unsafe {
                    raw::$put(buf.0[offset..].as_mut_ptr(), v);
                    assert_eq!(raw::$get_unaligned(buf.0[offset..].as_ptr()), v);
                    assert_eq!(raw::$get_maybe_aligned(buf.0[offset..].as_ptr()), v);
                }
                assert_eq!(buf.0[offset..offset + BYTES], v.to_ne_bytes());
                assert!(buf.0[..offset].iter().all(|&b| b == 0));
                assert!(buf.0[offset + BYTES..].iter().all(|&b| b == 0));
            }
        }
    };
}

test_unaligned_all_offsets!(
    test_unaligned_all_offsets_u16,
    u16,
    put_unaligned_u16,
    get_unaligned_u16,
    get_maybe_aligned_u16
);
test_unaligned_all_offsets!(
    test_unaligned_all_offsets_u32,
    u32,
    put_unaligned_u32,
    get_unaligned_u32,
    get_maybe_aligned_u32
);
test_unaligned_all_offsets!(
    test_unaligned_all_offsets_u64,
    u64,
    put_unaligned_u64,
    get_unaligned_u64,
    get_maybe_aligned_u64
);

#[test]
fn test_u8_variants_identical() {
    let mut buf = AlignedBuf::new();
    for offset in 0..8 {
        let p = buf.0[offset..].as_mut_ptr();
        unsafe {
            raw::put_u8(p, offset as u8 + 1);
            assert_eq!(raw::get_aligned_u8(p), offset as u8 + 1);
            assert_eq!(raw::get_unaligned_u8(p), offset as u8 + 1);
            assert_eq!(raw::get_maybe_aligned_u8(p), offset as u8 + 1);
            assert_eq!(raw::get_u8(p), offset as u8 + 1);
        }
    }
}

// The unqualified forms must behave as the maybe-aligned ones at every
// offset (for u8, as the trivially aligned one).
#[test]
fn test_default_forms() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut buf = AlignedBuf::new();
    rng.fill(&mut buf.0[..]);
    for offset in 0..8 {
        let p = buf.0[offset..].as_ptr();
        unsafe {
            assert_eq!(raw::get_u8(p), raw::get_maybe_aligned_u8(p));
            assert_eq!(raw::get_u16(p), raw::get_maybe_aligned_u16(p));
            assert_eq!(raw::get_u32(p), raw::get_maybe_aligned_u32(p));
            assert_eq!(raw::get_u64(p), raw::get_maybe_aligned_u64(p));
        }
    }

    let mut buf = AlignedBuf::new();
    for offset in 0..8 {
        let v = rng.random::<u64>();
        unsafe {
            let mut cursor = buf.0[offset..].as_mut_ptr();
            raw::write_u16(&mut cursor, v as u16);
            raw::write_u32(&mut cursor, v as u32);
            raw::write_u64(&mut cursor, v);
            assert_eq!(cursor, buf.0[offset..].as_mut_ptr().add(14));

            let mut cursor = buf.0[offset..].as_ptr();
            assert_eq!(raw::read_u16(&mut cursor), v as u16);
            assert_eq!(raw::read_u32(&mut cursor), v as u32);
            assert_eq!(raw::read_u64(&mut cursor), v);
            assert_eq!(cursor, buf.0[offset..].as_ptr().add(14));
        }
    }
}
