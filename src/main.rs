//! Shader Standard Manager
//!
//! Validates the GLSL sources in the shader directory against the
//! registered shader standard and optionally emits the generated C++ and
//! Python artifacts.
//!
//! Usage:
//!   cargo run                                  # Validate all catalogued shaders
//!   cargo run -- --verbose --summary           # Per-variable detail + report
//!   cargo run -- --gen-cpp                     # Emit shader_standard.hpp/.cpp
//!   cargo run -- --gen-py-shader-summary       # Emit shader_summary.py

use std::env;
use std::path::{Path, PathBuf};
use std::process;

use shader_standard::color::{colored_println, ANSI_RED};
use shader_standard::generate;
use shader_standard::validate::validate_all_shaders;

struct StandardConfig {
    verbose: bool,
    shader_directory: PathBuf,
    summary: bool,
    gen_cpp: bool,
    gen_py_summary: bool,
}

fn main() {
    env_logger::init();

    let config = parse_args();

    let shader_info =
        validate_all_shaders(&config.shader_directory, config.verbose, config.summary);

    // Generated artifacts land next to the tool, overwriting any previous run.
    if config.gen_cpp {
        if let Err(e) = generate::write_cpp(&shader_info, Path::new(".")) {
            colored_println(&format!("Error: {}", e), ANSI_RED);
            process::exit(1);
        }
    }

    if config.gen_py_summary {
        if let Err(e) = generate::write_py_summary(&shader_info, Path::new(".")) {
            colored_println(&format!("Error: {}", e), ANSI_RED);
            process::exit(1);
        }
    }
}

fn parse_args() -> StandardConfig {
    let args: Vec<String> = env::args().collect();

    let mut verbose = false;
    let mut shader_directory = PathBuf::from("../../assets/shaders/");
    let mut summary = false;
    let mut gen_cpp = false;
    let mut gen_py_summary = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--verbose" | "-v" => verbose = true,
            "--shader-directory" | "-sd" => {
                i += 1;
                if i < args.len() {
                    shader_directory = PathBuf::from(&args[i]);
                }
            }
            "--summary" | "-s" => summary = true,
            "--gen-cpp" | "-gc" => gen_cpp = true,
            "--gen-py-shader-summary" | "-gp" => gen_py_summary = true,
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    StandardConfig {
        verbose,
        shader_directory,
        summary,
        gen_cpp,
        gen_py_summary,
    }
}

fn print_usage() {
    println!("Usage: shader-standard [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --verbose, -v                 Enable verbose output for successful verifications");
    println!("  --shader-directory, -sd <path>");
    println!("                                Directory containing shader files (default: ../../assets/shaders/)");
    println!("  --summary, -s                 Output shader variable information for each shader");
    println!("  --gen-cpp, -gc                Generate shader_standard.hpp/.cpp for the shader cache");
    println!("  --gen-py-shader-summary, -gp  Generate the Python shader summary file");
    println!("  --help, -h                    Show this help");
    println!();
    println!("Examples:");
    println!("  cargo run -- --summary");
    println!("  cargo run -- -sd assets/shaders --gen-cpp");
}
