#[cfg(test)]
use crate::branch::BranchStack;
#[cfg(test)]
use crate::RuntimeError;

#[test]
fn empty_stack_executes() {
    let scopes = BranchStack::new();
    assert!(scopes.active());
}

#[test]
fn taken_branch_executes() {
    let mut scopes = BranchStack::new();
    scopes.open(true);
    assert!(scopes.active());
    scopes.open(true);
    assert!(scopes.active());
}

#[test]
fn untaken_branch_skips() {
    let mut scopes = BranchStack::new();
    scopes.open(false);
    assert!(!scopes.active());
}

#[test]
fn else_flips_the_condition() {
    let mut scopes = BranchStack::new();
    scopes.open(false);
    assert_eq!(scopes.invert(),Ok(()));
    assert!(scopes.active());
    assert_eq!(scopes.close(),Ok(()));
    assert_eq!(scopes.depth(),0);
}

#[test]
fn else_without_if_is_misplaced() {
    let mut scopes = BranchStack::new();
    assert_eq!(scopes.invert(),Err(RuntimeError::MisplacedElse));
}

#[test]
fn second_else_is_misplaced() {
    let mut scopes = BranchStack::new();
    scopes.open(true);
    assert_eq!(scopes.invert(),Ok(()));
    assert_eq!(scopes.invert(),Err(RuntimeError::MisplacedElse));
}

#[test]
fn close_without_open_errors() {
    let mut scopes = BranchStack::new();
    assert_eq!(scopes.close(),Err(RuntimeError::EndIf));
}

#[test]
fn child_of_dead_branch_is_suppressed() {
    let mut scopes = BranchStack::new();
    scopes.open(false);
    // the child's own condition holds, but it can never execute
    scopes.open(true);
    assert!(!scopes.active());
    // ...and the suppression survives its else
    assert_eq!(scopes.invert(),Ok(()));
    assert!(!scopes.active());
}

#[test]
fn child_of_else_arm_follows_the_flip() {
    let mut scopes = BranchStack::new();
    scopes.open(false);
    assert_eq!(scopes.invert(),Ok(()));
    // parent is now executing, so the child is not suppressed
    scopes.open(true);
    assert!(scopes.active());
}

#[test]
fn clear_empties_the_stack() {
    let mut scopes = BranchStack::new();
    scopes.open(true);
    scopes.open(false);
    scopes.clear();
    assert_eq!(scopes.depth(),0);
    assert!(scopes.active());
}
