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

#[test]
fn test_swap_patterns() {
    assert_eq!(swap_bytes16(0xABCD), 0xCDAB);
    assert_eq!(swap_bytes32(0x1234_5678), 0x7856_3412);
    assert_eq!(swap_bytes64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
}

#[test]
fn test_swap_involution() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..1000 {
        let v = rng.random::<u64>();
        assert_eq!(swap_bytes16(swap_bytes16(v as u16)), v as u16);
        assert_eq!(swap_bytes32(swap_bytes32(v as u32)), v as u32);
        assert_eq!(swap_bytes64(swap_bytes64(v)), v);
    }
    for v in [0, u64::MAX, 0x8000_0000_0000_0001] {
        assert_eq!(swap_bytes64(swap_bytes64(v)), v);
    }
}

fn order_symmetry<W: Word>(v: W) {
    assert_eq!(swap_host_to_little(swap_little_to_host(v)), v);
    assert_eq!(swap_little_to_host(swap_host_to_little(v)), v);
    assert_eq!(swap_host_to_big(swap_big_to_host(v)), v);
    assert_eq!(swap_big_to_host(swap_host_to_big(v)), v);
}

#[test]
fn test_order_symmetry() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..1000 {
        let v = rng.random::<u64>();
        order_symmetry(u8::truncate_from(v));
        order_symmetry(u16::truncate_from(v));
        order_symmetry(u32::truncate_from(v));
        order_symmetry(v);
    }
}

#[test]
fn test_current_is_native() {
    assert_eq!(ByteOrder::current(), ByteOrder::NATIVE);
    // Exactly one of the two conversions must be the identity.
    match ByteOrder::NATIVE {
        ByteOrder::Little => {
            assert_eq!(swap_host_to_little(0x1234u16), 0x1234);
            assert_eq!(swap_host_to_big(0x1234u16), 0x3412);
        }
        ByteOrder::Big => {
            assert_eq!(swap_host_to_little(0x1234u16), 0x3412);
            assert_eq!(swap_host_to_big(0x1234u16), 0x1234);
        }
    }
}

fn in_place_agrees<W: Word>(v: W) {
    let mut w = v;
    swap_bytes_in_place(&mut w);
    assert_eq!(w, v.swap_bytes());

    let mut w = v;
    swap_little_to_host_in_place(&mut w);
    assert_eq!(w, swap_little_to_host(v));

    let mut w = v;
    swap_host_to_little_in_place(&mut w);
    assert_eq!(w, swap_host_to_little(v));

    let mut w = v;
    swap_big_to_host_in_place(&mut w);
    assert_eq!(w, swap_big_to_host(v));

    let mut w = v;
    swap_host_to_big_in_place(&mut w);
    assert_eq!(w, swap_host_to_big(v));
}

#[test]
fn test_in_place() {
    let mut rng = SmallRng::seed_from_u64(0);
    for _ in 0..1000 {
        let v = rng.random::<u64>();
        in_place_agrees(u8::truncate_from(v));
        in_place_agrees(u16::truncate_from(v));
        in_place_agrees(u32::truncate_from(v));
        in_place_agrees(v);
    }
}

#[test]
fn test_u8_swap_is_identity() {
    for v in 0..=u8::MAX {
        let mut w = v;
        swap_bytes_in_place(&mut w);
        assert_eq!(w, v);
        assert_eq!(swap_little_to_host(v), v);
        assert_eq!(swap_big_to_host(v), v);
    }
}
