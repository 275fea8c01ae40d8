//! Inspect, validate, and convert HyperCat catalogue documents.
//!
//! Usage:
//!   hypercat validate catalogue.json
//!   hypercat --revision 2.0 fmt --to 3.0 --pretty < legacy.json
//!   hypercat list catalogue.json
//!   hypercat new "Sensors" --item /sensor1="Sensor 1" --rel urn:X-hypercat:rels:supportsSearch=urn:X-hypercat:search:simple

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use hypercat::{Catalogue, Codec, Item, Revision};
use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hypercat")]
#[command(version, about = "Inspect, validate, and convert HyperCat catalogues")]
struct Cli {
    /// Format revision of the input document.
    #[arg(long, global = true, default_value = "3.0", value_parser = parse_revision)]
    revision: Revision,
    /// Log codec activity to stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a catalogue and report whether it is valid.
    Validate {
        /// Input file; reads stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Re-encode a catalogue, optionally in another revision.
    Fmt {
        file: Option<PathBuf>,
        /// Output revision; defaults to the input revision.
        #[arg(long, value_parser = parse_revision)]
        to: Option<Revision>,
        #[arg(long)]
        pretty: bool,
    },
    /// Print one line per item: href, description, and a catalogue marker.
    List { file: Option<PathBuf> },
    /// Build a catalogue from flags and print it.
    New {
        description: String,
        /// Item as HREF=DESCRIPTION; repeatable.
        #[arg(long = "item", value_parser = parse_pair)]
        items: Vec<(String, String)>,
        /// Catalogue relation as REL=VAL; repeatable.
        #[arg(long = "rel", value_parser = parse_pair)]
        rels: Vec<(String, String)>,
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "hypercat=debug" } else { "hypercat=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let codec = Codec::for_revision(cli.revision);
    match cli.command {
        Command::Validate { file } => {
            let catalogue = read_catalogue(&codec, file)?;
            println!("ok: {} items", catalogue.len());
        }
        Command::Fmt { file, to, pretty } => {
            let catalogue = read_catalogue(&codec, file)?;
            let target = Codec::for_revision(to.unwrap_or(cli.revision));
            debug!(from = %cli.revision, to = %target.format().revision, "re-encoding");
            write_catalogue(&target, &catalogue, pretty)?;
        }
        Command::List { file } => {
            let catalogue = read_catalogue(&codec, file)?;
            let mut out = stdout().lock();
            for item in catalogue.items() {
                if item.is_catalogue() {
                    writeln!(out, "{}\t{}\tcatalogue", item.href, item.description)?;
                } else {
                    writeln!(out, "{}\t{}", item.href, item.description)?;
                }
            }
        }
        Command::New {
            description,
            items,
            rels,
            pretty,
        } => {
            let mut catalogue = Catalogue::new(description);
            for (rel, val) in rels {
                catalogue.add_rel(rel, val);
            }
            for (href, item_description) in items {
                catalogue
                    .add_item(Item::new(href, item_description))
                    .context("adding item")?;
            }
            write_catalogue(&codec, &catalogue, pretty)?;
        }
    }
    Ok(())
}

fn read_catalogue(codec: &Codec, file: Option<PathBuf>) -> Result<Catalogue> {
    let mut buf = Vec::new();
    let source = match file {
        Some(path) => {
            File::open(&path)
                .with_context(|| format!("opening input file {}", path.display()))?
                .read_to_end(&mut buf)
                .with_context(|| format!("reading input file {}", path.display()))?;
            path.display().to_string()
        }
        None => {
            stdin()
                .read_to_end(&mut buf)
                .context("reading stdin for catalogue JSON")?;
            "stdin".to_string()
        }
    };
    codec
        .from_slice(&buf)
        .with_context(|| format!("decoding {} as HyperCat {}", source, codec.format().revision))
}

fn write_catalogue(codec: &Codec, catalogue: &Catalogue, pretty: bool) -> Result<()> {
    let bytes = if pretty {
        codec.to_vec_pretty(catalogue)?
    } else {
        codec.to_vec(catalogue)?
    };
    let mut out = stdout().lock();
    out.write_all(&bytes)?;
    writeln!(out)?;
    Ok(())
}

fn parse_revision(raw: &str) -> Result<Revision, String> {
    Revision::try_from(raw).map_err(|err| err.to_string())
}

fn parse_pair(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(anyhow!("empty key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
