//! # `boolx` main library
//!
//! This library evaluates BoolX, an esoteric language whose memory is a
//! two-dimensional tape of variable-length, three-valued bit strings.
//!
//! ## Architecture
//!
//! The machine is built from a few small pieces:
//! * `tape` holds the bit strings and the per-function cell tape
//! * `queue` is the global FIFO shared by every function frame
//! * `labels` scans the source for `:` markers and navigates among them
//! * `branch` tracks nested if/else blocks and decides what executes
//! * `exec` reads the source one byte at a time and dispatches instructions
//!
//! All shared state (global queue, label table and cursor, comment depth,
//! I/O handles) lives in one `exec::Interp` value that is passed through the
//! executor; there are no process-scoped singletons.  Function calls recurse
//! on the executor itself: each frame owns a fresh cell tape and if/else
//! stack, saves the stream position before descending, and restores it on
//! the way back.
//!
//! ## Compaction
//!
//! The `compact` module is the filter behind the `compactorx` binary.  It
//! shares the instruction alphabet with the interpreter and strips
//! everything else, including nested comments.
//!
//! ## Errors
//!
//! Runtime failures are enumerated by `RuntimeError`.  They are fatal: every
//! frame unwinds, the error is reported once on stderr, and the process
//! exits with status 1.

pub mod tape;
pub mod queue;
pub mod labels;
pub mod branch;
pub mod exec;
pub mod debug;
pub mod compact;

#[cfg(test)]
mod branch_test;
#[cfg(test)]
mod compact_test;

use std::io::Read;

/// Enumerates the ways a running program can fail.  The `Display` trait
/// prints the message that follows the termination banner.
#[derive(thiserror::Error,Debug,Clone,Copy,PartialEq)]
pub enum RuntimeError {
    #[error("buffer overflow in some string")]
    StringTooLong,
    #[error("misplaced else statement")]
    MisplacedElse,
    #[error("unexpected end of IF condition or else statement")]
    EndIf,
    #[error("label pointer moved outside of bounds")]
    LabelCursorOutsideOfBounds,
    #[error("call or jump to a label, but there is no label at all")]
    JumpButNoLabel,
    #[error("can't read from the requested position after a jump or function call")]
    SeekProgramPosition,
    #[error("tried to pop from the global stack but it's empty")]
    EmptyGlobalStack,
    #[error("bad input")]
    UserInput,
}

/// Print the termination banner for a runtime error.  The caller is expected
/// to exit with status 1 afterwards; the banner is printed exactly once.
pub fn report_error(err: &RuntimeError) {
    eprintln!("\nThe program has been terminated due to an error:\n  {}.",err);
}

/// Read a single byte, treating any read failure as end of stream.
/// The source readers all consume their input through this.
fn read_one(src: &mut dyn Read) -> Option<u8> {
    let mut buf: [u8;1] = [0;1];
    match src.read_exact(&mut buf) {
        Ok(()) => Some(buf[0]),
        Err(_) => None
    }
}
