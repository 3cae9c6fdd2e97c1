//! Command-line front end: build palettes, color residues from a metadata
//! table, and print the options schema.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use resicolor::color::GradientPalette;
use resicolor::options::Options;
use resicolor::score::ScoreKind;
use resicolor::store::{ScoreStore, StructureId};
use resicolor::table::{self, MetadataBlock};
use resicolor::theme::ColorMode;
use resicolor::viewer::ViewerDisplay;

#[derive(Parser)]
#[command(name = "resicolor")]
#[command(about = "Per-residue score coloring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a gradient palette, one `r,g,b` per line
    Palette {
        /// Anchor color, low end first (repeatable)
        #[arg(long = "anchor", required = true, num_args = 1..)]
        anchors: Vec<String>,
        /// Number of palette colors
        #[arg(long, default_value_t = 100)]
        steps: usize,
    },
    /// Color residues from a JSON metadata block
    Color {
        /// Score kind to color by
        #[arg(long, value_enum)]
        kind: KindArg,
        /// JSON file holding the `seq_label` category
        #[arg(short, long)]
        input: PathBuf,
        /// Coloring mode
        #[arg(long, value_enum, default_value_t = ModeArg::Score)]
        mode: ModeArg,
        /// Category shown in category mode (defaults to the first seen)
        #[arg(long)]
        category: Option<String>,
        /// Options TOML file
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Print the representation a display name selects
    Style {
        /// Display name, e.g. `confidence`
        name: String,
    },
    /// Print the options JSON Schema
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Confidence,
    Interaction,
    Physicochemical,
}

impl From<KindArg> for ScoreKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Confidence => Self::Confidence,
            KindArg::Interaction => Self::Interaction,
            KindArg::Physicochemical => Self::Physicochemical,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Score,
    Category,
}

fn print_palette(
    out: &mut impl Write,
    anchors: &[String],
    steps: usize,
) -> Result<()> {
    let palette = GradientPalette::generate(anchors, steps)?;
    for color in palette.colors() {
        writeln!(out, "{color}")?;
    }
    Ok(())
}

fn load_options(path: Option<&Path>) -> Result<Options> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    Options::load(path)
        .with_context(|| format!("loading options from {}", path.display()))
}

fn print_colors(
    out: &mut impl Write,
    kind: ScoreKind,
    input: &Path,
    mode: ModeArg,
    category: Option<String>,
    options: &Options,
) -> Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let block = MetadataBlock::from_json(&json)
        .with_context(|| format!("parsing {}", input.display()))?;
    let residues = table::residue_map(&block);

    let id = StructureId(0);
    let mut store = ScoreStore::from_options(options);
    let _ = store.attach(id, &block, &residues);
    if !store.get(id).is_some_and(|s| s.is_applicable(kind)) {
        log::warn!("{} has no {kind} scores", input.display());
    }

    let mode = match mode {
        ModeArg::Score => ColorMode::Score,
        ModeArg::Category => {
            let Some(label) = category
                .or_else(|| store.theme_params(id, kind).default_category)
            else {
                bail!("no {kind} categories to choose from");
            };
            ColorMode::Category { kind: label }
        }
    };

    let theme = store.theme(id, kind, mode, &options.colors);
    for (index, chain, seq) in residues.iter() {
        writeln!(out, "{chain} {seq} {}", theme.color(index))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Palette { anchors, steps } => {
            print_palette(&mut out, &anchors, steps)?;
        }
        Command::Color {
            kind,
            input,
            mode,
            category,
            options,
        } => {
            let options = load_options(options.as_deref())?;
            print_colors(
                &mut out,
                kind.into(),
                &input,
                mode,
                category,
                &options,
            )?;
        }
        Command::Style { name } => {
            let display = ViewerDisplay::from_name(&name);
            writeln!(out, "{}", display.style())?;
        }
        Command::Schema => {
            let schema =
                serde_json::to_string_pretty(&Options::json_schema())?;
            writeln!(out, "{schema}")?;
        }
    }
    Ok(())
}
