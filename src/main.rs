use std::env;
use std::fs;
use std::path::Path;
use std::process;

use rqoi::{decode_file, encode_file};

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  rqoi encode <input.png> <output.qoi>");
    eprintln!("  rqoi decode <input.qoi> <output.png>");
    eprintln!();
    eprintln!("encode accepts any input format the image crate can read;");
    eprintln!("decode writes the format implied by the output extension.");
}

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 4 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];
    let input_path = &args[2];
    let output_path = &args[3];

    // Create output directory if it doesn't exist
    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                eprintln!("Error creating output directory: {}", e);
                process::exit(1);
            });
        }
    }

    match command.as_str() {
        "encode" => {
            if let Err(e) = encode_file(input_path, output_path) {
                eprintln!("Error encoding file: {}", e);
                process::exit(1);
            }
        }
        "decode" => {
            if let Err(e) = decode_file(input_path, output_path) {
                eprintln!("Error decoding file: {}", e);
                process::exit(1);
            }
        }
        _ => {
            eprintln!("Invalid command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
