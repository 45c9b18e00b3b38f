//! # Compactor Command Line Interface
//!
//! Remove comments and non-instruction characters from a BoolX source file
//! and save the rewrapped result, echoing it to the console on the way.

use clap::{arg, crate_version, Arg, ArgAction, Command, ValueHint};
use std::io::Write;
use boolx::compact;

fn build_cli() -> Command {
    let long_help = "A compactor for BoolX code.
Remove comments and other useless characters from <source_file>
and save the result to <output_file>, with the goal of creating an
artistic and esoteric source code.";
    Command::new("compactorx")
        .about("Compacts BoolX source code.")
        .after_long_help(long_help)
        .version(crate_version!())
        .arg(
            arg!(-l --lines_length <N> "set the max number of characters in each line (default is 36)")
                .required(false)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("files")
                .help("<source_file> <output_file>")
                .value_hint(ValueHint::FilePath)
                .num_args(0..),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();
    let width = match matches.get_one::<String>("lines_length") {
        Some(s) => match s.parse::<u64>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("Option '-l' has been given a bad value.");
                std::process::exit(1);
            }
        },
        None => compact::LINE_WIDTH_DEFAULT
    };
    let files: Vec<&String> = match matches.get_many::<String>("files") {
        Some(vals) => vals.collect(),
        None => Vec::new()
    };

    if files.is_empty() {
        build_cli().print_long_help().expect("could not print usage");
        std::process::exit(0);
    }
    if files.len() == 1 {
        eprintln!("Missing output file.");
        std::process::exit(1);
    }
    if files.len() > 2 {
        eprintln!("Too many arguments.");
        std::process::exit(1);
    }

    let mut src = match std::fs::File::open(files[0]) {
        Ok(f) => std::io::BufReader::new(f),
        Err(_) => {
            eprintln!("Can't open the source program file.");
            std::process::exit(1);
        }
    };
    let compacted = compact::compact(&mut src,width);
    if let Err(e) = std::fs::write(files[1],&compacted) {
        log::debug!("{}",e);
        eprintln!("Error while writing to the output file.");
        std::process::exit(1);
    }

    // Echo the result, as a preview of the saved file.
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(&compacted);
    println!("\nDone.");
}
