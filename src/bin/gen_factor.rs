//! Factoring driver - command line interface
//!
//! Reads a cover in the text format (one cube per line over `0`, `1`,
//! `-`), factors it and prints the resulting expression with a literal
//! count report.

use clap::Parser;
use sop_algebra::Cover;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "gen_factor")]
#[command(about = "Algebraic factoring of sum-of-products covers", long_about = None)]
struct Args {
    /// Input cover file (one cube per line over '0', '1', '-')
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Use quick factor (level-0 kernel divisor)
    #[arg(short = 'q', long = "quick", group = "mode")]
    quick: bool,

    /// Use good factor (best-kernel divisor; the default)
    #[arg(short = 'g', long = "good", group = "mode")]
    good: bool,

    /// Use bool factor (good factor plus Boolean simplification)
    #[arg(short = 'b', long = "bool", group = "mode")]
    bool_: bool,
}

fn main() {
    // usage problems exit with 1, unreadable input with 2
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            use clap::error::ErrorKind;
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                print!("{}", err);
                process::exit(0);
            }
            eprint!("{}", err);
            process::exit(1);
        }
    };

    let file = match File::open(&args.input) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{}: {}", args.input.display(), err);
            let code = if err.kind() == io::ErrorKind::NotFound {
                2
            } else {
                1
            };
            process::exit(code);
        }
    };

    let cover = match Cover::read(BufReader::new(file)) {
        Ok(cover) => cover,
        Err(err) => {
            eprintln!("{}: {}", args.input.display(), err);
            process::exit(1);
        }
    };

    println!(
        "Initial Cover: {:10} cubes, {:10} literals",
        cover.cube_num(),
        cover.literal_num()
    );

    let expr = if args.quick {
        cover.quick_factor()
    } else if args.bool_ {
        cover.bool_factor()
    } else {
        cover.good_factor()
    };

    println!(
        "Factored Form:                   {:10} literals",
        expr.literal_num()
    );
    println!("{}", expr);
}
