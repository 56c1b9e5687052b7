/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Harness checking every (width, order, alignment, pointer-mode)
//! combination against a byte-level model of the scratch buffer.

use crate::prelude::*;
use arbitrary::Arbitrary;

const LEN: usize = 64;

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
}

impl Width {
    fn bytes(self) -> usize {
        match self {
            Width::W8 => 1,
            Width::W16 => 2,
            Width::W32 => 4,
            Width::W64 => 8,
        }
    }
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Order {
    Native,
    Little,
    Big,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum Mode {
    Aligned,
    Unaligned,
    MaybeAligned,
}

#[derive(Arbitrary, Debug, Clone, Copy)]
pub enum RandomCommand {
    Put {
        order: Order,
        mode: Mode,
        width: Width,
        offset: u8,
        value: u64,
    },
    Get {
        order: Order,
        mode: Mode,
        width: Width,
        offset: u8,
    },
    Write {
        order: Order,
        mode: Mode,
        width: Width,
        offset: u8,
        value: u64,
    },
    Read {
        order: Order,
        mode: Mode,
        width: Width,
        offset: u8,
    },
}

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    init: Vec<u8>,
    commands: Vec<RandomCommand>,
}

#[repr(align(8))]
struct Buf([u8; LEN]);

fn mask(n: usize) -> u64 {
    if n == 8 { u64::MAX } else { (1u64 << (8 * n)) - 1 }
}

fn model_get(model: &[u8; LEN], offset: usize, n: usize, order: Order) -> u64 {
    match order {
        Order::Little => {
            let mut bytes = [0u8; 8];
            bytes[..n].copy_from_slice(&model[offset..offset + n]);
            u64::from_le_bytes(bytes)
        }
        Order::Big => {
            let mut bytes = [0u8; 8];
            bytes[8 - n..].copy_from_slice(&model[offset..offset + n]);
            u64::from_be_bytes(bytes)
        }
        Order::Native => {
            if cfg!(target_endian = "little") {
                model_get(model, offset, n, Order::Little)
            } else {
                model_get(model, offset, n, Order::Big)
            }
        }
    }
}

fn model_put(model: &mut [u8; LEN], offset: usize, n: usize, order: Order, value: u64) {
    let value = value & mask(n);
    match order {
        Order::Little => model[offset..offset + n].copy_from_slice(&value.to_le_bytes()[..n]),
        Order::Big => model[offset..offset + n].copy_from_slice(&value.to_be_bytes()[8 - n..]),
        Order::Native => {
            if cfg!(target_endian = "little") {
                model_put(model, offset, n, Order::Little, value);
            } else {
                model_put(model, offset, n, Order::Big, value);
            }
        }
    }
}

unsafe fn get_dispatch<W: Word>(order: Order, mode: Mode, p: *const u8) -> W {
    unsafe {
        match (order, mode) {
            (Order::Native, Mode::Aligned) => endian::get::<NE, Aligned, W>(p),
            (Order::Native, Mode::Unaligned) => endian::get::<NE, Unaligned, W>(p),
            (Order::Native, Mode::MaybeAligned) => endian::get::<NE, MaybeAligned, W>(p),
            (Order::Little, Mode::Aligned) => endian::get::<LE, Aligned, W>(p),
            (Order::Little, Mode::Unaligned) => endian::get::<LE, Unaligned, W>(p),
            (Order::Little, Mode::MaybeAligned) => endian::get::<LE, MaybeAligned, W>(p),
            (Order::Big, Mode::Aligned) => endian::get::<BE, Aligned, W>(p),
            (Order::Big, Mode::Unaligned) => endian::get::<BE, Unaligned, W>(p),
            (Order::Big, Mode::MaybeAligned) => endian::get::<BE, MaybeAligned, W>(p),
        }
    }
}

unsafe fn put_dispatch<W: Word>(order: Order, mode: Mode, p: *mut u8, v: W) {
    unsafe {
        match (order, mode) {
            (Order::Native, Mode::Aligned) => endian::put::<NE, Aligned, W>(p, v),
            (Order::Native, Mode::Unaligned) => endian::put::<NE, Unaligned, W>(p, v),
            (Order::Native, Mode::MaybeAligned) => endian::put::<NE, MaybeAligned, W>(p, v),
            (Order::Little, Mode::Aligned) => endian::put::<LE, Aligned, W>(p, v),
            (Order::Little, Mode::Unaligned) => endian::put::<LE, Unaligned, W>(p, v),
            (Order::Little, Mode::MaybeAligned) => endian::put::<LE, MaybeAligned, W>(p, v),
            (Order::Big, Mode::Aligned) => endian::put::<BE, Aligned, W>(p, v),
            (Order::Big, Mode::Unaligned) => endian::put::<BE, Unaligned, W>(p, v),
            (Order::Big, Mode::MaybeAligned) => endian::put::<BE, MaybeAligned, W>(p, v),
        }
    }
}

unsafe fn read_dispatch<W: Word>(order: Order, mode: Mode, p: &mut *const u8) -> W {
    unsafe {
        match (order, mode) {
            (Order::Native, Mode::Aligned) => endian::read::<NE, Aligned, W>(p),
            (Order::Native, Mode::Unaligned) => endian::read::<NE, Unaligned, W>(p),
            (Order::Native, Mode::MaybeAligned) => endian::read::<NE, MaybeAligned, W>(p),
            (Order::Little, Mode::Aligned) => endian::read::<LE, Aligned, W>(p),
            (Order::Little, Mode::Unaligned) => endian::read::<LE, Unaligned, W>(p),
            (Order::Little, Mode::MaybeAligned) => endian::read::<LE, MaybeAligned, W>(p),
            (Order::Big, Mode::Aligned) => endian::read::<BE, Aligned, W>(p),
            (Order::Big, Mode::Unaligned) => endian::read::<BE, Unaligned, W>(p),
            (Order::Big, Mode::MaybeAligned) => endian::read::<BE, MaybeAligned, W>(p),
        }
    }
}

unsafe fn write_dispatch<W: Word>(order: Order, mode: Mode, p: &mut *mut u8, v: W) {
    unsafe {
        match (order, mode) {
            (Order::Native, Mode::Aligned) => endian::write::<NE, Aligned, W>(p, v),
            (Order::Native, Mode::Unaligned) => endian::write::<NE, Unaligned, W>(p, v),
            (Order::Native, Mode::MaybeAligned) => endian::write::<NE, MaybeAligned, W>(p, v),
            (Order::Little, Mode::Aligned) => endian::write::<LE, Aligned, W>(p, v),
            (Order::Little, Mode::Unaligned) => endian::write::<LE, Unaligned, W>(p, v),
            (Order::Little, Mode::MaybeAligned) => endian::write::<LE, MaybeAligned, W>(p, v),
            (Order::Big, Mode::Aligned) => endian::write::<BE, Aligned, W>(p, v),
            (Order::Big, Mode::Unaligned) => endian::write::<BE, Unaligned, W>(p, v),
            (Order::Big, Mode::MaybeAligned) => endian::write::<BE, MaybeAligned, W>(p, v),
        }
    }
}

pub fn harness(data: FuzzCase) {
    let mut buf = Buf([0; LEN]);
    for (dst, src) in buf.0.iter_mut().zip(data.init.iter()) {
        *dst = *src;
    }
    let mut model = buf.0;

    for command in data.commands {
        let (order, mode, width, offset) = match command {
            RandomCommand::Put {
                order,
                mode,
                width,
                offset,
                ..
            }
            | RandomCommand::Get {
                order,
                mode,
                width,
                offset,
            }
            | RandomCommand::Write {
                order,
                mode,
                width,
                offset,
                ..
            }
            | RandomCommand::Read {
                order,
                mode,
                width,
                offset,
            } => (order, mode, width, offset),
        };
        let n = width.bytes();
        let offset = offset as usize % (LEN - n + 1);
        // Dispatching an aligned access at a misaligned offset would be
        // caller misuse, not a property of the primitives.
        let mode = if matches!(mode, Mode::Aligned) && !is_aligned(&buf.0[offset], n) {
            Mode::MaybeAligned
        } else {
            mode
        };

        match command {
            RandomCommand::Put { value, .. } => {
                let p = buf.0[offset..].as_mut_ptr();
                match width {
                    Width::W8 => unsafe {
                        put_dispatch::<u8>(order, mode, p, u8::truncate_from(value))
                    },
                    Width::W16 => unsafe {
                        put_dispatch::<u16>(order, mode, p, u16::truncate_from(value))
                    },
                    Width::W32 => unsafe {
                        put_dispatch::<u32>(order, mode, p, u32::truncate_from(value))
                    },
                    Width::W64 => unsafe { put_dispatch::<u64>(order, mode, p, value) },
                }
                model_put(&mut model, offset, n, order, value);
            }
            RandomCommand::Get { .. } => {
                let p = buf.0[offset..].as_ptr();
                let v = match width {
                    Width::W8 => unsafe { get_dispatch::<u8>(order, mode, p).upcast() },
                    Width::W16 => unsafe { get_dispatch::<u16>(order, mode, p).upcast() },
                    Width::W32 => unsafe { get_dispatch::<u32>(order, mode, p).upcast() },
                    Width::W64 => unsafe { get_dispatch::<u64>(order, mode, p) },
                };
                assert_eq!(v, model_get(&model, offset, n, order));
            }
            RandomCommand::Write { value, .. } => {
                let mut p = buf.0[offset..].as_mut_ptr();
                let start = p;
                match width {
                    Width::W8 => unsafe {
                        write_dispatch::<u8>(order, mode, &mut p, u8::truncate_from(value))
                    },
                    Width::W16 => unsafe {
                        write_dispatch::<u16>(order, mode, &mut p, u16::truncate_from(value))
                    },
                    Width::W32 => unsafe {
                        write_dispatch::<u32>(order, mode, &mut p, u32::truncate_from(value))
                    },
                    Width::W64 => unsafe { write_dispatch::<u64>(order, mode, &mut p, value) },
                }
                assert_eq!(p, unsafe { start.add(n) });
                model_put(&mut model, offset, n, order, value);
            }
            RandomCommand::Read { .. } => {
                let mut p = buf.0[offset..].as_ptr();
                let start = p;
                let v = match width {
                    Width::W8 => unsafe { read_dispatch::<u8>(order, mode, &mut p).upcast() },
                    Width::W16 => unsafe { read_dispatch::<u16>(order, mode, &mut p).upcast() },
                    Width::W32 => unsafe { read_dispatch::<u32>(order, mode, &mut p).upcast() },
                    Width::W64 => unsafe { read_dispatch::<u64>(order, mode, &mut p) },
                };
                assert_eq!(p, unsafe { start.add(n) });
                assert_eq!(v, model_get(&model, offset, n, order));
            }
        }

        assert_eq!(buf.0, model);
    }
}
