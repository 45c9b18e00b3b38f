//! # Step Tracer
//!
//! The `-d` flag runs the program one instruction at a time: every
//! executable instruction is announced and the interpreter waits for a
//! newline on standard input before carrying it out.  After an instruction
//! with an immediate effect on memory, the first few tape cells and global
//! queue records are dumped in human readable (MSB first) order, with the
//! selected bit bracketed.
//!
//! The tracer writes to the real standard streams; it is a front-panel for
//! a human at a console, not part of the language-visible surface.

use std::io::Write;
use crate::tape::Tape;
use crate::queue::GlobalQueue;
use crate::labels::LabelTable;
use crate::RuntimeError;
use bit_vec::BitVec;

const SKIP_COMMENTS: bool = true;
const SKIP_NON_EXECUTED_INSTRUCTIONS: bool = true;
const SKIP_EMPTY_CHARACTERS: bool = true;
const MARK_CURRENT_BITS: bool = true;
/// Cap on a rendered cell value; longer strings end in "...".
const VALUE_CHARS_MAX: usize = 255;
/// Cap on the annotation next to an instruction symbol.
const NOTE_CHARS_MAX: usize = 32;
const DUMPED_CELLS_MAX: usize = 10;

pub struct Debugger {
    memory_effect: bool
}

impl Debugger {
    pub fn new() -> Self {
        Self { memory_effect: false }
    }

    /// The label listing printed once, between the scan and execution.
    pub fn print_labels(&self,labels: &LabelTable) {
        println!("List of labels:");
        if labels.is_empty() {
            println!("\t(empty)");
        } else {
            for (i,pos) in labels.positions().iter().enumerate() {
                println!("\tLabel #{}: position: {}",i,pos);
            }
        }
        println!();
    }

    /// Announce the next instruction and wait for confirmation.  Comments,
    /// skipped instructions, and whitespace are classified but, with the
    /// skip constants on, not prompted.
    pub fn before_instruction(&mut self,byte: u8,comment_depth: i64,skipping: bool) -> Result<(),RuntimeError> {
        let mut note = String::new();
        let mut show_symbol = true;
        let mut is_comment = false;
        let mut is_empty_character = false;

        self.memory_effect = true;

        if comment_depth > 0 || byte == b'{' {
            copy_note(&mut note,"   (comment)")?;
            is_comment = true;
            self.memory_effect = false;
        } else if skipping {
            copy_note(&mut note,"   (skipping execution)")?;
            self.memory_effect = false;
        } else if byte == b'\r' {
            copy_note(&mut note,"(carriage return)")?;
            is_empty_character = true;
            self.memory_effect = false;
            show_symbol = false;
        } else if byte == b'\n' {
            copy_note(&mut note,"(new line)")?;
            is_empty_character = true;
            self.memory_effect = false;
            show_symbol = false;
        } else if byte == b'\t' {
            copy_note(&mut note,"(tab)")?;
            is_empty_character = true;
            self.memory_effect = false;
            show_symbol = false;
        } else if byte == b' ' {
            copy_note(&mut note,"(space)")?;
            is_empty_character = true;
            self.memory_effect = false;
            show_symbol = false;
        } else if matches!(byte,b'/' | b'\\' | b'$' | b']' | b'?' | b'"' | b'!' | b';' | b'\'') {
            // `@` and `:` are left out: the jump machinery shows the new
            // memory on their behalf.
            self.memory_effect = false;
        }

        if SKIP_COMMENTS && is_comment {
            return Ok(());
        } else if SKIP_NON_EXECUTED_INSTRUCTIONS && skipping {
            return Ok(());
        } else if SKIP_EMPTY_CHARACTERS && is_empty_character {
            return Ok(());
        }

        if show_symbol {
            print!("Next instruction: {}{}",byte as char,note);
        } else {
            print!("Next instruction: {}",note);
        }
        let _ = std::io::stdout().flush();
        wait_for_enter();
        Ok(())
    }

    /// Dump memory after an instruction that changed it.
    pub fn after_instruction(&self,tape: &Tape,queue: &GlobalQueue) {
        if !self.memory_effect {
            return;
        }
        println!();
        for (i,cell) in tape.cells().iter().take(DUMPED_CELLS_MAX).enumerate() {
            if i == tape.cursor() {
                print!("> ");
            } else {
                print!("  ");
            }
            print!("Cell #{}: ",i);
            println!("{}",render_value(cell.bits(),Some(cell.cursor())));
        }
        if queue.is_empty() {
            println!("(global stack empty)");
        } else {
            let n = queue.len();
            for (i,bits) in queue.iter().take(DUMPED_CELLS_MAX).enumerate() {
                if i == 0 && n > 1 {
                    print!("- Global #{} (front): ",i);
                } else if i > 0 && i == n - 1 {
                    print!("- Global #{} (back):  ",i);
                } else {
                    print!("- Global #{}:         ",i);
                }
                println!("{}",render_value(bits,None));
            }
        }
    }

    pub fn note_output(&self) {
        print!("OUTPUT: ");
        let _ = std::io::stdout().flush();
    }

    pub fn end_output(&self) {
        print!("\n\n");
    }

    pub fn note_input(&self) {
        print!("INPUT: ");
        let _ = std::io::stdout().flush();
    }

    /// Consume the line terminator that followed the typed input byte, so
    /// it does not immediately confirm the next instruction.
    pub fn end_input(&self) {
        wait_for_enter();
        println!();
    }
}

fn wait_for_enter() {
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
}

/// Bounded copy into the annotation buffer.
fn copy_note(buf: &mut String,s: &str) -> Result<(),RuntimeError> {
    if s.len() + 1 >= NOTE_CHARS_MAX {
        return Err(RuntimeError::StringTooLong);
    }
    buf.push_str(s);
    Ok(())
}

/// Render a bit string MSB first.  The `*` is the null terminator at the
/// far end of the string; brackets mark the selected bit, or the terminator
/// itself when the selected bit is null.  Queue records pass None and get
/// no marking.
fn render_value(bits: &BitVec,selected: Option<usize>) -> String {
    let mut ans = String::new();
    match selected {
        Some(c) if MARK_CURRENT_BITS && c == bits.len() => ans.push_str("[*]"),
        _ => ans.push('*')
    }
    for i in (0..bits.len()).rev() {
        let v = match bits.get(i) {
            Some(true) => '1',
            _ => '0'
        };
        if MARK_CURRENT_BITS && selected == Some(i) {
            ans.push('[');
            ans.push(v);
            ans.push(']');
        } else {
            ans.push(v);
        }
    }
    if ans.len() > VALUE_CHARS_MAX {
        ans.truncate(VALUE_CHARS_MAX - 3);
        ans.push_str("...");
    }
    return ans;
}
