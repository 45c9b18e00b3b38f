//! # If/Else Stack
//!
//! Conditional blocks nest, and whether an instruction runs depends only on
//! the innermost open block: it must be taken and not suppressed.  A block
//! opened inside a dead branch is suppressed at creation and stays that way
//! for its whole life, in particular across `!`, which only flips `taken`.
//! That asymmetry is what keeps a nested if/else quiet through both of its
//! arms while an enclosing branch is dead.
//!
//! Each function frame owns one of these stacks.  It is cleared on frame
//! return, on error, and on a successful jump.

use crate::RuntimeError;

#[derive(PartialEq,Clone,Copy)]
pub enum BranchKind {
    If,
    Else
}

/// One open conditional block.
pub struct Branch {
    kind: BranchKind,
    /// Result of the condition test, flipped by `!`.
    taken: bool,
    /// Fixed at creation: the enclosing block was not executing.
    suppressed: bool
}

pub struct BranchStack {
    frames: Vec<Branch>
}

impl BranchStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Open a new IF block with the given condition result.
    pub fn open(&mut self,condition: bool) {
        let suppressed = match self.frames.last() {
            Some(parent) => !(parent.taken && !parent.suppressed),
            None => false
        };
        self.frames.push(Branch { kind: BranchKind::If, taken: condition, suppressed });
    }

    /// The `!` instruction: re-type the innermost block as ELSE and flip its
    /// condition.  Fails on an empty stack or when the block already is an
    /// ELSE.
    pub fn invert(&mut self) -> Result<(),RuntimeError> {
        match self.frames.last_mut() {
            Some(top) if top.kind == BranchKind::If => {
                top.kind = BranchKind::Else;
                top.taken = !top.taken;
                Ok(())
            },
            _ => Err(RuntimeError::MisplacedElse)
        }
    }

    /// The `;` instruction: close the innermost block.
    pub fn close(&mut self) -> Result<(),RuntimeError> {
        match self.frames.pop() {
            Some(_) => Ok(()),
            None => Err(RuntimeError::EndIf)
        }
    }

    /// Whether a regular instruction should execute right now.
    pub fn active(&self) -> bool {
        match self.frames.last() {
            Some(top) => top.taken && !top.suppressed,
            None => true
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
