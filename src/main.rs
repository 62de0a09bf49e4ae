//! md2steam CLI - Markdown to Steam BBCode converter

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
use cli::Cli;

fn read_all(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: Option<&PathBuf>) -> io::Result<PathBuf> {
    match input_path.and_then(|p| p.parent()) {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        Some(_) => Ok(PathBuf::from(".")),
        None => std::env::current_dir(),
    }
}

fn write_output(path: Option<&Path>, bbcode: &str) -> Result<()> {
    match path {
        Some(p) => {
            let mut file =
                fs::File::create(p).with_context(|| format!("failed to create {}", p.display()))?;
            write_bbcode(&mut file, bbcode)
                .with_context(|| format!("failed to write {}", p.display()))
        }
        None => {
            let stdout = io::stdout();
            write_bbcode(&mut stdout.lock(), bbcode).context("failed to write stdout")
        }
    }
}

/// Write the output followed by a final newline, unless it is empty.
fn write_bbcode(out: &mut impl Write, bbcode: &str) -> io::Result<()> {
    if bbcode.is_empty() {
        return Ok(());
    }
    out.write_all(bbcode.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input_file = cli.input_file();

    let start_dir = start_dir_for(input_file).context("failed to resolve working directory")?;
    let (mut options, cfg_path) = md2steam::config::load(cli.config.as_deref(), &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    cli.apply_overrides(&mut options);
    log::debug!("Options: {options:?}");

    let input = read_all(input_file)?;
    let bbcode = if cli.inline {
        // The final newline is added back on output.
        let text = input
            .strip_suffix("\r\n")
            .or_else(|| input.strip_suffix('\n'))
            .unwrap_or(&input);
        md2steam::convert_inline_with_options(text, &options)
    } else {
        md2steam::to_bbcode_with_options(&input, &options)
    };

    write_output(cli.output.as_deref(), &bbcode)
}
