//! Command-line interface: argument parsing and the commands themselves.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use ruled::{BorderStyle, Padding, StyleConfig, Table, TableStyle, TableStyleBuilder};

/// Render delimited text as a table.
#[derive(Parser, Debug)]
#[command(name = "ruled", version, about)]
pub struct Cli {
    /// Log style and measurement details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render CSV (or other delimited) input as a table.
    Render(RenderArgs),
    /// Show every built-in border style with an example table.
    Styles {
        /// Alignment descriptor for the examples, e.g. "l*,r*".
        #[arg(long)]
        align: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input file; standard input when omitted.
    pub file: Option<PathBuf>,

    /// Field delimiter (a single ASCII character).
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Tab-separated input.
    #[arg(long, conflicts_with = "delimiter")]
    pub tsv: bool,

    /// Built-in border style (see `ruled styles`).
    #[arg(short, long)]
    pub border: Option<String>,

    /// File holding a 7×7 template.
    #[arg(short, long)]
    pub template_file: Option<PathBuf>,

    /// YAML or JSON style configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Alignment descriptor: "both" or "header,body".
    #[arg(short, long)]
    pub align: Option<String>,

    /// Cell padding: N or N,M.
    #[arg(long)]
    pub cell_pad: Option<String>,

    /// Character filling alignment slack.
    #[arg(long)]
    pub pad_char: Option<char>,

    /// Prefix for every output line.
    #[arg(long)]
    pub indent: Option<String>,

    /// Keep trailing whitespace on output lines.
    #[arg(long)]
    pub keep_trailing: bool,
}

/// Execute the parsed command and return what should be printed.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Commands::Render(args) => {
            let rows = match &args.file {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("cannot open {}", path.display()))?;
                    read_rows(file, args.field_delimiter()?)?
                }
                None => read_rows(io::stdin().lock(), args.field_delimiter()?)?,
            };
            render(args, rows)
        }
        Commands::Styles { align } => styles(align.as_deref()),
    }
}

impl RenderArgs {
    fn field_delimiter(&self) -> anyhow::Result<u8> {
        if self.tsv {
            return Ok(b'\t');
        }
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be an ASCII character, not {:?}", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }

    /// Configuration file first, then command-line options on top.
    fn style(&self) -> anyhow::Result<TableStyle> {
        let mut builder = match &self.config {
            Some(path) => load_config(path)?.into_builder()?,
            None => TableStyleBuilder::default(),
        };
        if let Some(name) = &self.border {
            builder = builder.border_style(name.parse::<BorderStyle>()?);
        }
        if let Some(path) = &self.template_file {
            let template = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read template {}", path.display()))?;
            builder = builder.template(template);
        }
        if let Some(align) = &self.align {
            builder = builder.align(align.as_str());
        }
        if let Some(cell_pad) = &self.cell_pad {
            builder = builder.cell_pad(parse_cell_pad(cell_pad)?);
        }
        if let Some(c) = self.pad_char {
            builder = builder.pad_char(c);
        }
        if let Some(indent) = &self.indent {
            builder = builder.indent(indent.as_str());
        }
        if self.keep_trailing {
            builder = builder.strip_trailing(false);
        }
        Ok(builder.build()?)
    }
}

fn load_config(path: &Path) -> anyhow::Result<StyleConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config {}", path.display()))?;
    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => StyleConfig::from_json(&text),
        _ => StyleConfig::from_yaml(&text),
    };
    config.with_context(|| format!("invalid config {}", path.display()))
}

fn parse_cell_pad(value: &str) -> anyhow::Result<Padding> {
    let sides = value
        .split(',')
        .map(|n| n.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("cell padding must be N or N,M, not {:?}", value))?;
    Ok(Padding::from(sides))
}

/// Read delimited records; rows may differ in length.
pub fn read_rows<R: Read>(input: R, delimiter: u8) -> anyhow::Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("malformed input")?;
        rows.push(record.iter().map(String::from).collect());
    }
    tracing::debug!(rows = rows.len(), "read input records");
    Ok(rows)
}

/// Render already-read rows with the style the options describe.
pub fn render(args: &RenderArgs, rows: Vec<Vec<String>>) -> anyhow::Result<String> {
    let style = args.style()?;
    Ok(Table::new(style).with_data(rows).format()?)
}

/// List every built-in style with an example table.
pub fn styles(align: Option<&str>) -> anyhow::Result<String> {
    let mut sections = Vec::with_capacity(BorderStyle::ALL.len());
    for style in BorderStyle::ALL {
        sections.push(format!("{}:\n{}", style, style.example(align)?));
    }
    Ok(sections.join("\n\n"))
}
