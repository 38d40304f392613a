// src/cli.rs
use std::{env, path::PathBuf};

use crate::{
    config::consts::VERSION_FAMILIES,
    config::options::{AppOptions, ExportFormat},
    core::net::Client,
    data,
    file,
    progress::Progress,
    scrape,
};

struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl ConsoleProgress {
    fn new() -> Self {
        Self { done: 0, failed: 0, total: 0 }
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, mod_id: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done + self.failed, self.total, mod_id);
    }
    fn item_failed(&mut self, mod_id: &str) {
        self.failed += 1;
        eprintln!("[{}/{}] {} (skipped)", self.done + self.failed, self.total, mod_id);
    }
    fn finish(&mut self) {
        eprintln!("Done: {} fetched, {} failed", self.done, self.failed);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut options = AppOptions::default();
    let mut out: Option<PathBuf> = None;
    parse_cli(&mut options, &mut out)?;

    let client = Client::default();
    let mut prog = ConsoleProgress::new();
    let records = scrape::run(&client, &options.scrape, Some(&mut prog))?;

    let ds = data::to_dataset(&records, &options.scrape.fields);
    match out {
        Some(path) => {
            options.export.set_path(&path.to_string_lossy());
            let written = file::write_export_single(&options.export, &ds.headers, &ds.rows)?;
            eprintln!("Wrote {}", written.display());
        }
        None => {
            let text = crate::csv::to_export_string(
                &ds.headers,
                &ds.rows,
                options.export.include_headers,
                options.export.format.delim(),
            );
            print!("{text}");
        }
    }
    Ok(())
}

fn parse_cli(
    options: &mut AppOptions,
    out: &mut Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => {
                options.scrape.url = args.next().ok_or("Missing value for --url")?;
            }
            "--families" => {
                let v = args.next().ok_or("Missing value for --families")?;
                options.scrape.fields.families = parse_families(&v)?;
            }
            "--no-fabric" => options.scrape.fields.include_fabric = false,
            "--no-forge" => options.scrape.fields.include_forge = false,
            "--delay-ms" => {
                options.scrape.pause_ms = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
            }
            "-o" | "--out" => {
                *out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => options.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Parse `--families 1.19,1.20` into the selection mask over the known
/// family prefixes. Unknown prefixes are an error rather than silence.
fn parse_families(s: &str) -> Result<Vec<bool>, Box<dyn std::error::Error>> {
    let mut mask = vec![false; VERSION_FAMILIES.len()];
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match VERSION_FAMILIES.iter().position(|p| *p == part) {
            Some(ix) => mask[ix] = true,
            None => {
                return Err(format!(
                    "Unknown version family: {} (known: {})",
                    part,
                    VERSION_FAMILIES.join(", ")
                )
                .into());
            }
        }
    }
    Ok(mask)
}
