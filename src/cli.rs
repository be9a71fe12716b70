// src/cli.rs
use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use crate::config::{ConvertOptions, OutputStyle, TimesPolicy, consts::STDIO_PATH};
use crate::runner;

/// Convert an Apache mod_status page (ExtendedStatus On) into JSON.
///
/// Example:
///   curl -s localhost/server-status | mod_status_json | jq '.workers[].vhost'
#[derive(Debug, Parser)]
#[command(name = "mod_status_json", author, version, about, long_about = None)]
pub struct Args {
    /// Read the status page from FILE ("-" for standard input)
    #[arg(short, long, value_name = "FILE", default_value = STDIO_PATH)]
    pub input: PathBuf,

    /// Write JSON to FILE ("-" for standard output)
    #[arg(short, long, value_name = "FILE", default_value = STDIO_PATH)]
    pub output: PathBuf,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// Accept pages without the CPU column (httpd built without HAVE_TIMES); `cpu` is then omitted
    #[arg(long)]
    pub allow_missing_times: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            times: if self.allow_missing_times { TimesPolicy::Optional } else { TimesPolicy::Require },
            output: if self.compact { OutputStyle::Compact } else { OutputStyle::Pretty },
        }
    }
}

/// Convert into memory first; the destination is only touched once the page has parsed.
pub fn run(args: &Args) -> Result<()> {
    let opts = args.options();

    let input = open_input(&args.input)?;
    let mut json = Vec::new();
    let summary = runner::run(input, &mut json, &opts)
        .wrap_err_with(|| format!("cannot convert {}", describe(&args.input, "standard input")))?;
    write_output(&args.output, &json)?;

    info!(workers = summary.workers, bytes = summary.bytes_written, "done");
    Ok(())
}

fn is_stdio(p: &Path) -> bool {
    p.as_os_str() == STDIO_PATH
}

fn describe(p: &Path, stdio: &str) -> String {
    if is_stdio(p) { stdio.to_string() } else { p.display().to_string() }
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if is_stdio(path) {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).wrap_err_with(|| format!("cannot read {}", path.display()))?;
    Ok(Box::new(file))
}

fn write_output(path: &Path, json: &[u8]) -> Result<()> {
    if is_stdio(path) {
        let mut out = io::stdout().lock();
        out.write_all(json)
            .and_then(|_| out.flush())
            .wrap_err("cannot write standard output")?;
    } else {
        fs::write(path, json).wrap_err_with(|| format!("cannot write {}", path.display()))?;
    }
    Ok(())
}
