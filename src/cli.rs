use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "md2steam")]
#[command(author, version)]
#[command(about = "Convert Markdown to Steam BBCode")]
#[command(
    long_about = "md2steam converts Markdown (headings, lists, blockquotes, code fences, \
    emphasis, links and images) into the BBCode markup accepted by Steam store pages, \
    guides, workshop items and announcements."
)]
#[command(after_help = "\
EXAMPLES:

    # Convert a file to stdout
    md2steam CHANGELOG.md

    # Convert from stdin
    cat notes.md | md2steam

    # Write to a file
    md2steam notes.md -o notes.bbcode

    # Convert a one-line fragment without block handling
    echo '**new** in this build' | md2steam --inline

CONFIGURATION:

md2steam looks for configuration files in this order:
  1. Explicit --config path
  2. md2steam.toml or .md2steam.toml in the input's directory and its parents
  3. ~/.config/md2steam/config.toml (XDG)
  4. Built-in defaults

Example .md2steam.toml:

    max-heading-level = 3
    tab-width = 4
    strikethrough = true

Command-line flags override values from the config file.")]
pub struct Cli {
    /// Markdown file to convert (stdin if absent or `-`)
    pub input: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only convert inline spans; lines are not treated as blocks
    #[arg(long)]
    pub inline: bool,

    /// Path to config file
    #[arg(long, value_name = "PATH")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, md2steam will \
        search for .md2steam.toml or md2steam.toml next to the input and in its parents, \
        then fall back to ~/.config/md2steam/config.toml."
    )]
    pub config: Option<PathBuf>,

    /// Deepest heading level to emit (deeper headings are clamped)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=6))]
    pub max_heading_level: Option<u8>,

    /// Tab stop width used for list indentation
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub tab_width: Option<u64>,

    /// Leave `~~text~~` unconverted
    #[arg(long)]
    pub no_strikethrough: bool,
}

impl Cli {
    /// Input path, with `-` meaning stdin.
    pub fn input_file(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Apply command-line overrides on top of loaded options.
    pub fn apply_overrides(&self, options: &mut md2steam::Options) {
        if let Some(level) = self.max_heading_level {
            options.max_heading_level = level;
        }
        if let Some(width) = self.tab_width {
            options.tab_width = usize::try_from(width).unwrap_or(usize::MAX);
        }
        if self.no_strikethrough {
            options.strikethrough = false;
        }
    }
}
