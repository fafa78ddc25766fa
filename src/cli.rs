// src/cli.rs
use std::{env, path::PathBuf};

use crate::catalog::HttpCatalog;
use crate::categories;
use crate::config::consts::{CONFIG_FILE, STATE_FILE};
use crate::config::mail::MailConfig;
use crate::error::{Error, Result};
use crate::mail::{Notifier, SmtpNotifier};
use crate::progress::Progress;
use crate::runner;

pub struct Params {
    pub config: PathBuf,
    pub state: PathBuf,
    pub categories: Option<Vec<u32>>,
    pub list_categories: bool,
    pub dry_run: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            config: PathBuf::from(CONFIG_FILE),
            state: PathBuf::from(STATE_FILE),
            categories: None,
            list_categories: false,
            dry_run: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-category status lines on stderr as the run goes.
struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("[watch] {msg}");
    }
}

/// Prints the digest instead of mailing it (--dry-run).
struct StdoutNotifier;
impl Notifier for StdoutNotifier {
    fn send(&self, subject: &str, body: &str) -> Result<()> {
        println!("Subject: {subject}\n\n{body}");
        Ok(())
    }
}

pub fn run() -> Result<()> {
    let params = parse_cli()?;

    if params.list_categories {
        for (id, label) in categories::CATEGORIES {
            println!("{id},{label}");
        }
        return Ok(());
    }

    let ids = params.categories.clone().unwrap_or_else(categories::all_ids);
    let source = HttpCatalog::new();
    let mut progress = ConsoleProgress;

    let outcome = if params.dry_run {
        runner::run(&source, &StdoutNotifier, &params.state, &ids, &mut progress)?
    } else {
        // Config problems abort here, before any network traffic.
        let mail = MailConfig::load(&params.config)?;
        let notifier = SmtpNotifier::new(mail);
        runner::run(&source, &notifier, &params.state, &ids, &mut progress)?
    };

    println!("{}", outcome.summary());
    Ok(())
}

fn parse_cli() -> Result<Params> {
    let mut params = Params::new();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--config" => params.config = PathBuf::from(next_value(&mut args, "--config")?),
            "--state" => params.state = PathBuf::from(next_value(&mut args, "--state")?),
            "--categories" => {
                let v = next_value(&mut args, "--categories")?;
                params.categories = Some(parse_ids_list(&v)?);
            }
            "--list-categories" => params.list_categories = true,
            "--dry-run" => params.dry_run = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            other => return Err(Error::Config(format!("Unknown arg: {other}"))),
        }
    }
    Ok(params)
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::Config(format!("Missing value for {flag}")))
}

fn parse_ids_list(s: &str) -> Result<Vec<u32>> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some(dash) = part.find('-') {
            let a: u32 = parse_id(part[..dash].trim())?;
            let b: u32 = parse_id(part[dash + 1..].trim())?;
            if a > b {
                return Err(Error::Config(format!("Invalid range: {part}")));
            }
            for id in a..=b {
                if !out.contains(&id) {
                    out.push(id);
                }
            }
        } else {
            let id = parse_id(part)?;
            if !out.contains(&id) {
                out.push(id);
            }
        }
    }
    if out.is_empty() {
        return Err(Error::Config(s!("No category ids given")));
    }
    Ok(out)
}

fn parse_id(s: &str) -> Result<u32> {
    s.parse()
        .map_err(|_| Error::Config(format!("Invalid category id: {s}")))
}
