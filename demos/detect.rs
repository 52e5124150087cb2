//! Command-line interface for gr_detect
//!
//! Reads an image file and reports whether it came from a GR camera

use gr_detect::{detect_from_source, DetectionResult, DetectorConfig};
use std::{env, path::Path, process};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut strict = false;
    let mut no_fallback = false;
    let mut image_path_arg = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--strict" => strict = true,
            "--no-fallback" => no_fallback = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);
    let bytes = match std::fs::read(image_path) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("Error: Cannot read '{}': {}", image_path.display(), error);
            process::exit(1);
        }
    };

    let mut config = if strict {
        DetectorConfig::strict()
    } else {
        DetectorConfig::default()
    };
    if no_fallback {
        config = config.with_fallback(false);
    }
    let config = config.with_on_error(|error| {
        tracing::warn!(kind = error.kind(), "{}", error.user_message());
    });

    match detect_from_source(&bytes, Some(&image_path_str), config).await {
        Ok(result) => print_result(&result),
        Err(error) => {
            eprintln!("Detection failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Report whether an image was taken with a Ricoh GR camera.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict         Fail on unreadable metadata instead of reporting it");
    eprintln!("  --no-fallback    Do not consult the filename when metadata is unusable");
    eprintln!("  --help, -h       Show this help message");
}

fn print_result(result: &DetectionResult) {
    // JSON to stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    eprintln!();
    eprintln!("Detection Summary:");
    eprintln!("  Match: {}", result.is_match);
    eprintln!("  Method: {:?}", result.method);
    if let Some(model) = result.model {
        eprintln!("  Model: {}", model);
    }
    if result.used_fallback {
        eprintln!("  Warning: metadata was unusable; answer is from the filename only.");
    }
}
