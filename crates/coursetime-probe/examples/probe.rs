//! Example: Probe a video file and print its duration

use coursetime_probe::probe_file;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <video_file>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} \"01 - Intro/lecture.mp4\"", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];

    match probe_file(path) {
        Ok(info) => {
            let seconds = info.duration.as_secs();
            println!("File: {}", info.file_path.display());
            println!("Container: {}", info.container);
            println!(
                "Duration: {:02}:{:02}:{:02}",
                seconds / 3600,
                (seconds % 3600) / 60,
                seconds % 60
            );
            println!("Backend: {}", info.backend);
        }
        Err(e) => {
            eprintln!("Error probing {}: {}", path, e);
            std::process::exit(1);
        }
    }
}
