#[cfg(test)]
use std::io::Cursor;
#[cfg(test)]
use crate::compact::{compact,is_instruction};

#[cfg(test)]
fn compact_str(source: &str,width: u64) -> String {
    let mut src = Cursor::new(source.as_bytes().to_vec());
    String::from_utf8(compact(&mut src,width)).expect("compactor emitted non-ascii")
}

#[test]
fn alphabet_is_complete() {
    for byte in "><|+-=_^*%][#&?\"!;:/\\$'@~".bytes() {
        assert!(is_instruction(byte),"{} should be an instruction",byte as char);
    }
    for byte in "{} \n\tab01".bytes() {
        assert!(!is_instruction(byte),"{} should not be an instruction",byte as char);
    }
}

#[test]
fn strips_prose_and_comments() {
    let source = "set the bit { a comment with ^ inside } then ^ print ]";
    assert_eq!(compact_str(source,36),"^]");
}

#[test]
fn nested_comments_are_tracked() {
    assert_eq!(compact_str("{ outer { inner ^ } still out ^ }]",36),"]");
}

#[test]
fn stray_close_brace_swallows_the_next_open() {
    // `}` is unguarded here, matching the interpreter
    assert_eq!(compact_str("}{^}",36),"^");
}

#[test]
fn wraps_after_width_characters() {
    let source = "^".repeat(80);
    let ans = compact_str(&source,36);
    let lines: Vec<&str> = ans.split('\n').collect();
    assert_eq!(lines.len(),3);
    assert_eq!(lines[0].len(),36);
    assert_eq!(lines[1].len(),36);
    assert_eq!(lines[2].len(),8);
}

#[test]
fn exact_multiple_ends_with_a_newline() {
    let ans = compact_str(&"^".repeat(8),4);
    assert_eq!(ans,"^^^^\n^^^^\n");
}
