//! CLI for resniff: report the detected MIME type of files or directories.

#![cfg(feature = "cli")]

use clap::Parser;
use resniff::{detect_detailed, Detection, Origin};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use walkdir::WalkDir;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Parser)]
#[command(name = "resniff")]
#[command(about = "Detect MIME content types, tolerating junk leading bytes and mangled PDF headers", long_about = None)]
struct Args {
    /// Path to a file or directory to scan (use -d/--directory to scan a whole directory)
    path: Option<String>,

    /// Scan a whole directory (optionally with -r to recurse into subdirectories)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// When scanning a directory, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Caller-asserted content type (e.g. a declared upload MIME type)
    #[arg(long, value_name = "MIME")]
    hint: Option<String>,

    /// Bytes to read from the start of each file
    #[arg(long, default_value_t = 4096)]
    head_bytes: u64,

    /// Bytes to read from the end of each file (trailer search window)
    #[arg(long, default_value_t = 1024)]
    tail_bytes: u64,

    /// Output JSON per result (one line per file unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print files that needed the fallback machinery (no direct signature match)
    #[arg(short, long)]
    quiet: bool,
}

#[derive(serde::Serialize)]
struct Record<'a> {
    path: &'a str,
    sha256: String,
    size_bytes: u64,
    content_type: &'a str,
    origin: Origin,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let path_str = args
        .directory
        .as_ref()
        .or(args.path.as_ref())
        .ok_or("Missing path: give a file/directory as argument or use -d/--directory <DIR>")?;
    let path = Path::new(path_str.as_str());

    if !path.exists() {
        eprintln!("Not found: {}", path.display());
        std::process::exit(1);
    }

    if path.is_file() {
        if args.directory.is_some() {
            eprintln!("--directory expects a directory, not a file: {}", path.display());
            std::process::exit(1);
        }
        scan_file(path, &args)?;
        return Ok(());
    }

    if path.is_dir() {
        if !args.quiet {
            eprintln!(
                "Scanning directory: {} {}",
                path.display(),
                if args.recursive { "(recursive)" } else { "" }
            );
        }
        scan_dir(path, &args)?;
        return Ok(());
    }

    eprintln!("Not a file or directory: {}", path.display());
    std::process::exit(1);
}

/// Read a head fragment and a tail fragment without pulling the whole file in.
/// For files smaller than the head window the tail is the whole file.
fn read_fragments(path: &Path, head_bytes: u64, tail_bytes: u64) -> std::io::Result<(Vec<u8>, Vec<u8>, u64)> {
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();

    let mut head = vec![0u8; size.min(head_bytes) as usize];
    file.read_exact(&mut head)?;

    let tail = if size <= head_bytes {
        head.clone()
    } else {
        let tail_len = size.min(tail_bytes);
        let mut tail = vec![0u8; tail_len as usize];
        file.seek(SeekFrom::End(-(tail_len as i64)))?;
        file.read_exact(&mut tail)?;
        tail
    };

    Ok((head, tail, size))
}

fn scan_file(path: &Path, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (head, tail, size) = read_fragments(path, args.head_bytes, args.tail_bytes)?;
    let detection = detect_detailed(args.hint.as_deref(), &head, Some(&tail));
    print_result(&path.display().to_string(), &detection, args, &head, size)?;
    Ok(())
}

fn scan_dir(dir: &Path, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let walker = if args.recursive {
        WalkDir::new(dir).into_iter()
    } else {
        WalkDir::new(dir).max_depth(1).into_iter()
    };

    let mut total = 0u64;
    let mut recovered = 0u64;
    let mut unresolved = 0u64;

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        total += 1;
        let (head, tail, size) = match read_fragments(path, args.head_bytes, args.tail_bytes) {
            Ok(f) => f,
            Err(_) => continue,
        };
        let detection = detect_detailed(args.hint.as_deref(), &head, Some(&tail));
        match detection.origin {
            Origin::Hint | Origin::OffsetRetry { .. } | Origin::Trailer => recovered += 1,
            Origin::Fallback => unresolved += 1,
            Origin::Signature => {}
        }
        print_result(&path.display().to_string(), &detection, args, &head, size)?;
    }

    if !args.quiet {
        eprintln!(
            "Scanned {} files, {} recovered by fallback, {} unresolved",
            total, recovered, unresolved
        );
    }
    Ok(())
}

fn print_result(
    path: &str,
    detection: &Detection,
    args: &Args,
    head: &[u8],
    size: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.quiet && detection.origin == Origin::Signature {
        return Ok(());
    }
    if args.json {
        let record = Record {
            path,
            sha256: sha256_hex(head),
            size_bytes: size,
            content_type: &detection.content_type,
            origin: detection.origin,
        };
        let json_str = if args.pretty {
            serde_json::to_string_pretty(&record)?
        } else {
            serde_json::to_string(&record)?
        };
        println!("{}", json_str);
        return Ok(());
    }
    match detection.origin {
        Origin::OffsetRetry { offset } => {
            println!("{}: {} [offset-retry@{}]", path, detection.content_type, offset)
        }
        origin => println!("{}: {} [{}]", path, detection.content_type, origin.label()),
    }
    Ok(())
}
