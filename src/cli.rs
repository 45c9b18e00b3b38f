use clap::{arg, crate_version, Arg, ArgAction, Command, ValueHint};

pub fn build_cli() -> Command {
    let long_help = "BoolX official interpreter.
Memory starts as a single cell holding a null bit string; the program is
read one character at a time and anything that is not an instruction is
ignored.  Set RUST_LOG environment variable to control logging level.
  levels: trace,debug,info,warn,error

Examples:
---------
run a program:         `boolx myprog.bx`
step through it:       `boolx -d myprog.bx`";
    Command::new("boolx")
        .about("Runs programs written in the BoolX esoteric language.")
        .after_long_help(long_help)
        .version(crate_version!())
        .arg(arg!(-d --debug "run the interpreter in debug mode").action(ArgAction::SetTrue))
        .arg(
            Arg::new("source")
                .help("BoolX source program")
                .value_hint(ValueHint::FilePath)
                .num_args(0..),
        )
}
