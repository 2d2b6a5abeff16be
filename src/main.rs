//! Command-line front end
//!
//! Reads the first comma-separated record from a file or standard input,
//! computes the summary statistics, and prints the report. Exit status is 0
//! on success, 1 on any parse or statistics error, 2 on a usage error.

use batchstats::input::parse_record;
use batchstats::Summary;

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::process;

const USAGE: &str = "\
Usage: batchstats [-f FILE]

Print the mean, median, mode, and range of a comma separated list of numbers.

Options:
  -f, --file FILE  Read the list from FILE instead of standard input
  -h, --help       Show this help and exit";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut file: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            "-f" | "--file" => {
                if i + 1 >= args.len() {
                    eprintln!("batchstats: option {} requires a path", args[i]);
                    eprintln!("{}", USAGE);
                    process::exit(2);
                }
                file = Some(args[i + 1].clone());
                i += 2;
            }
            other => {
                eprintln!("batchstats: unrecognized argument {:?}", other);
                eprintln!("{}", USAGE);
                process::exit(2);
            }
        }
    }

    process::exit(run(file.as_deref()));
}

fn run(path: Option<&str>) -> i32 {
    let record = match read_first_record(path) {
        Ok(record) => record,
        Err(err) => {
            match path {
                Some(path) => eprintln!("batchstats: {}: {}", path, err),
                None => eprintln!("batchstats: stdin: {}", err),
            }
            return 1;
        }
    };

    let sample = match parse_record(&record) {
        Ok(sample) => sample,
        Err(err) => {
            eprintln!("batchstats: {}", err);
            return 1;
        }
    };

    match Summary::compute(&sample) {
        Ok(summary) => {
            println!("{}", summary);
            0
        }
        Err(err) => {
            eprintln!("{}: {}", err.symbol(), err);
            1
        }
    }
}

/// Read the first line of the input. A stream with no first line yields an
/// empty record, which downstream treats as an empty sample.
fn read_first_record(path: Option<&str>) -> io::Result<String> {
    let mut record = String::new();
    match path {
        Some(path) => {
            let mut reader = BufReader::new(File::open(path)?);
            reader.read_line(&mut record)?;
        }
        None => {
            io::stdin().lock().read_line(&mut record)?;
        }
    }
    Ok(record)
}
