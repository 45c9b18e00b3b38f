//! # Function Executor
//!
//! The executor reads the source program one byte at a time and dispatches
//! each byte as an instruction.  A function frame is one activation of
//! `run_frame`: it owns a fresh cell tape and if/else stack, while the
//! global queue, the label table and cursor, and the comment depth are
//! shared machine state.  A call saves the stream position, recurses from
//! the current label's offset, and seeks back when the callee unwinds; this
//! is the whole call/return discipline, the OS stack being the call stack.
//!
//! Comment braces are counted before anything else and regardless of the
//! if/else state.  The executor's close-brace is deliberately unguarded, so
//! a stray `}` drives the depth negative and a later `{` merely restores it;
//! only the label scanner clamps at zero.
//!
//! Errors unwind through every open frame (frame locals drop on the way
//! out) and surface from `run` exactly once.

use std::io::{Read,Seek,SeekFrom,Write};
use log::{debug,trace};
use crate::tape::{BitString,Tape};
use crate::queue::GlobalQueue;
use crate::labels::{self,LabelTable};
use crate::branch::BranchStack;
use crate::debug::Debugger;
use crate::RuntimeError;

/// Why the outermost frame stopped.
#[derive(PartialEq,Debug,Clone,Copy)]
pub enum Halt {
    /// End of source, or a return in the outermost frame.
    Completed,
    /// The optional instruction budget ran dry.
    FuelExhausted
}

/// How one frame unwound.
enum Unwind {
    EndOfFile,
    Return,
    Fuel
}

/// The whole interpreter: machine state shared across function frames plus
/// the wiring to the outside world.
pub struct Interp<'a> {
    labels: LabelTable,
    queue: GlobalQueue,
    comment_depth: i64,
    input: &'a mut dyn Read,
    output: &'a mut dyn Write,
    tracer: Option<Debugger>,
    fuel: Option<u64>,
    steps: u64
}

impl<'a> Interp<'a> {
    /// A machine with no labels yet; call `scan_labels` before `run`.
    pub fn new(input: &'a mut dyn Read,output: &'a mut dyn Write) -> Self {
        Self {
            labels: LabelTable::new(),
            queue: GlobalQueue::new(),
            comment_depth: 0,
            input,
            output,
            tracer: None,
            fuel: None,
            steps: 0
        }
    }

    /// Step-by-step mode: trace every instruction and dump memory after the
    /// ones that change it.
    pub fn enable_debug(&mut self) {
        self.tracer = Some(Debugger::new());
    }

    /// Bound the number of dispatched instructions.  When the budget runs
    /// out the machine unwinds all frames and `run` returns
    /// `Halt::FuelExhausted`.  Meant for exercising looping programs.
    pub fn set_fuel(&mut self,limit: u64) {
        self.fuel = Some(limit);
    }

    /// First pass: build the label table and adopt whatever comment depth
    /// the source leaves open at end of file.
    pub fn scan_labels(&mut self,src: &mut dyn Read) {
        let (labels,depth) = labels::scan(src);
        self.labels = labels;
        self.comment_depth = depth;
    }

    /// Execute the program from offset 0.
    pub fn run<R: Read + Seek>(&mut self,src: &mut R) -> Result<Halt,RuntimeError> {
        if let Some(t) = self.tracer.as_ref() {
            t.print_labels(&self.labels);
        }
        match self.run_frame(src,0)? {
            Unwind::Fuel => {
                debug!("instruction budget exhausted after {} steps",self.steps);
                Ok(Halt::FuelExhausted)
            },
            _ => Ok(Halt::Completed)
        }
    }

    /// One function frame, entered at `from`.  Owns its tape and branch
    /// stack; everything else is machine state borrowed from `self`.
    fn run_frame<R: Read + Seek>(&mut self,src: &mut R,from: u64) -> Result<Unwind,RuntimeError> {
        let mut tape = Tape::new();
        let mut scopes = BranchStack::new();
        if src.seek(SeekFrom::Start(from)).is_err() {
            return Err(RuntimeError::SeekProgramPosition);
        }
        while let Some(byte) = crate::read_one(src) {
            if let Some(t) = self.tracer.as_mut() {
                t.before_instruction(byte,self.comment_depth,!scopes.active())?;
            }
            if byte == b'{' {
                self.comment_depth += 1;
                continue;
            } else if byte == b'}' {
                self.comment_depth -= 1;
                continue;
            }
            if self.comment_depth > 0 {
                continue;
            }

            // The conditional instructions always execute; they shape the
            // stack that the skip decision is then read from.
            match byte {
                b'?' => scopes.open(tape.current().selected() == Some(true)),
                b'"' => scopes.open(tape.current().selected().is_none()),
                b'!' => scopes.invert()?,
                b';' => scopes.close()?,
                _ => {}
            }

            if scopes.active() {
                match byte {
                    b'>' => tape.go_next(),
                    b'<' => tape.go_prev(),
                    b'+' => tape.current_mut().go_next(),
                    b'-' => tape.current_mut().go_prev(),
                    b'|' => tape.rewind(),
                    b'=' => tape.current_mut().rewind(),
                    b'_' => tape.current_mut().set(false),
                    b'^' => tape.current_mut().set(true),
                    b'*' => tape.current_mut().set_null(),
                    b'%' => tape.current_mut().clear(),
                    b']' => self.write_output(tape.current()),
                    b'[' => self.read_input(tape.current_mut())?,
                    b'#' => self.queue.enqueue(tape.current().bits()),
                    b'&' => {
                        let bits = self.queue.dequeue()?;
                        tape.current_mut().splice(bits);
                    },
                    b'\'' => {
                        let target = self.labels.current().ok_or(RuntimeError::JumpButNoLabel)?;
                        trace!("jump to offset {}",target);
                        if src.seek(SeekFrom::Start(target)).is_err() {
                            return Err(RuntimeError::SeekProgramPosition);
                        }
                        scopes.clear();
                    },
                    b'/' => self.labels.select_next()?,
                    b'\\' => self.labels.select_prev()?,
                    b'$' => self.labels.select_first()?,
                    b'@' => {
                        let target = self.labels.current().ok_or(RuntimeError::JumpButNoLabel)?;
                        let resume = match src.stream_position() {
                            Ok(pos) => pos,
                            Err(_) => return Err(RuntimeError::SeekProgramPosition)
                        };
                        trace!("call to offset {}, resume at {}",target,resume);
                        if let Unwind::Fuel = self.run_frame(src,target)? {
                            return Ok(Unwind::Fuel);
                        }
                        if src.seek(SeekFrom::Start(resume)).is_err() {
                            return Err(RuntimeError::SeekProgramPosition);
                        }
                    },
                    b'~' => return Ok(Unwind::Return),
                    _ => {}
                }
            }

            if let Some(t) = self.tracer.as_ref() {
                t.after_instruction(&tape,&self.queue);
            }
            if let Some(limit) = self.fuel {
                self.steps += 1;
                if self.steps >= limit {
                    return Ok(Unwind::Fuel);
                }
            }
        }
        Ok(Unwind::EndOfFile)
    }

    /// The `]` instruction: one byte out, flushed immediately.  Output
    /// failures are swallowed; there is no error kind for them.
    fn write_output(&mut self,cell: &BitString) {
        let value = cell.read_byte();
        if let Some(t) = self.tracer.as_ref() {
            t.note_output();
        }
        let _ = self.output.write_all(&[value]);
        let _ = self.output.flush();
        if let Some(t) = self.tracer.as_ref() {
            t.end_output();
        }
    }

    /// The `[` instruction: clear the cell, then one byte in, LSB first.
    /// The cell stays cleared when the read fails.
    fn read_input(&mut self,cell: &mut BitString) -> Result<(),RuntimeError> {
        cell.clear();
        if let Some(t) = self.tracer.as_ref() {
            t.note_input();
        }
        let byte = match crate::read_one(&mut *self.input) {
            Some(b) => b,
            None => return Err(RuntimeError::UserInput)
        };
        if let Some(t) = self.tracer.as_ref() {
            t.end_input();
        }
        cell.write_byte(byte);
        Ok(())
    }
}
