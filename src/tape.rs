//! # Bit Strings and the Cell Tape
//!
//! Every memory cell holds a variable-length string of bits with a movable
//! cursor.  The value a cell exposes to the conditional and I/O instructions
//! is the *selected bit*, the bit just past the cursor, which is a three
//! valued quantity: 0, 1, or null when the cursor sits at the end of the
//! string.  The cursor at position 0 is the "before first" (sentinel)
//! position, so a fresh cell selects null.
//!
//! Bits are stored in a `BitVec` and the cursor is an index, which keeps the
//! invariant `cursor <= len` trivially and makes the null bit exactly the
//! out-of-range read.  Null can only ever occur at the tail: the single
//! instruction that unsets a bit truncates everything at and beyond the
//! cursor.
//!
//! The cell tape is the per-function row of cells.  The first cell is
//! anchored; new cells appear lazily as the cell cursor walks off the end.

use bit_vec::BitVec;

/// A three-valued bit string with a movable cursor.
#[derive(Clone,PartialEq,Debug)]
pub struct BitString {
    bits: BitVec,
    cursor: usize
}

impl BitString {
    pub fn new() -> Self {
        Self { bits: BitVec::new(), cursor: 0 }
    }

    /// The selected bit, or None when the cursor is at the null tail.
    pub fn selected(&self) -> Option<bool> {
        return self.bits.get(self.cursor);
    }

    /// Advance the cursor, materializing a 0 bit if the selected bit is null.
    pub fn go_next(&mut self) {
        if self.cursor == self.bits.len() {
            self.bits.push(false);
        }
        self.cursor += 1;
    }

    /// Move the cursor back one bit; no-op at the sentinel.
    pub fn go_prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Put the cursor back at the before-first position.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Overwrite the selected bit, or append it without advancing when the
    /// selected bit is null.
    pub fn set(&mut self,value: bool) {
        if self.cursor == self.bits.len() {
            self.bits.push(value);
        } else {
            self.bits.set(self.cursor,value);
        }
    }

    /// Make the selected bit null.  Everything at and beyond the cursor is
    /// dropped, since bits cannot exist past a null.
    pub fn set_null(&mut self) {
        self.bits.truncate(self.cursor);
    }

    /// Null the whole string and rewind.  Idempotent.
    pub fn clear(&mut self) {
        self.cursor = 0;
        self.bits.truncate(0);
    }

    /// Accumulate the string into a byte, LSB first.  The walk visits up to
    /// 127 bit positions; positions 8 and up shift out of the accumulator
    /// and contribute nothing.
    pub fn read_byte(&self) -> u8 {
        let mut value: u8 = 0;
        for (i,bit) in self.bits.iter().take(127).enumerate() {
            if bit {
                value = value.wrapping_add(1u8.checked_shl(i as u32).unwrap_or(0));
            }
        }
        return value;
    }

    /// Replace the string with the bits of `value`, LSB first, leaving the
    /// cursor at the sentinel.  A zero byte still writes one 0 bit.
    pub fn write_byte(&mut self,value: u8) {
        self.clear();
        let mut n = value;
        loop {
            self.bits.push(n & 1 == 1);
            n >>= 1;
            if n == 0 {
                break;
            }
        }
    }

    /// Swap in a bit string taken from the global queue, rewinding.
    pub fn splice(&mut self,bits: BitVec) {
        self.bits = bits;
        self.cursor = 0;
    }

    pub fn bits(&self) -> &BitVec {
        &self.bits
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// The per-function row of cells.  Owns every cell; dropped wholesale when
/// the function frame unwinds.
pub struct Tape {
    cells: Vec<BitString>,
    cursor: usize
}

impl Tape {
    /// A fresh tape with its one anchored cell.
    pub fn new() -> Self {
        Self { cells: vec![BitString::new()], cursor: 0 }
    }

    /// Advance to the next cell, creating it if the tape ends here.
    pub fn go_next(&mut self) {
        if self.cursor + 1 == self.cells.len() {
            self.cells.push(BitString::new());
        }
        self.cursor += 1;
    }

    /// Move back one cell; no-op at the first cell.
    pub fn go_prev(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Go back to the first cell.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    pub fn current(&self) -> &BitString {
        &self.cells[self.cursor]
    }

    pub fn current_mut(&mut self) -> &mut BitString {
        &mut self.cells[self.cursor]
    }

    pub fn cells(&self) -> &[BitString] {
        &self.cells
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
