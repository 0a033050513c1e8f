//! Command-line interface: argument parsing and the end-to-end render run

use crate::io::configuration::{
    DEFAULT_OUTPUT_EXTENSION, DEFAULT_QUALITY, DEFAULT_SEED, OUTPUT_SUFFIX, default_cell_size,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{has_colour, open_image, scale_and_save};
use crate::io::progress::ProgressManager;
use crate::io::search::SearchPaths;
use crate::patterns::{Pattern, PatternFlags};
use crate::render::channels::{ColourPlan, Execution, render_image};
use crate::render::patterner::{Patterner, RenderObserver, Silent};
use crate::spatial::grid::EdgePolicy;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// What to do with a colour source image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColourChoice {
    /// Convert to black and white before rendering
    #[default]
    Grayscale,
    /// Keep colour, rendering each channel with its own pattern
    PerChannel,
}

fn parse_pattern(value: &str) -> std::result::Result<Pattern, String> {
    value.parse().map_err(|e: crate::PatternError| e.to_string())
}

fn parse_edge_policy(value: &str) -> std::result::Result<EdgePolicy, String> {
    value.parse().map_err(|e: crate::PatternError| e.to_string())
}

#[derive(Parser)]
#[command(name = "halftile")]
#[command(
    author,
    version,
    about = "Render an image as a grid of brightness-scaled geometric tiles"
)]
/// Command-line arguments for the pattern renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source image, looked up in the search directories
    #[arg(value_name = "IMAGE", required_unless_present = "list_patterns")]
    pub target: Option<PathBuf>,

    /// Pattern name or menu number (see --list-patterns)
    #[arg(short, long, default_value = "Rings", value_parser = parse_pattern)]
    pub pattern: Pattern,

    /// Colour handling for colour sources
    #[arg(short, long, value_enum, default_value_t = ColourChoice::Grayscale)]
    pub colour: ColourChoice,

    /// Pattern for the red channel in per-channel mode (defaults to --pattern)
    #[arg(long, value_parser = parse_pattern)]
    pub red: Option<Pattern>,

    /// Pattern for the green channel in per-channel mode (defaults to --pattern)
    #[arg(long, value_parser = parse_pattern)]
    pub green: Option<Pattern>,

    /// Pattern for the blue channel in per-channel mode (defaults to --pattern)
    #[arg(long, value_parser = parse_pattern)]
    pub blue: Option<Pattern>,

    /// Cell size in source pixels (higher = more stylised); derived from the image when omitted
    #[arg(short = 's', long)]
    pub cell_size: Option<usize>,

    /// Supersampling factor used while drawing
    #[arg(short = 'Q', long, default_value_t = DEFAULT_QUALITY)]
    pub quality: usize,

    /// Treatment of partial cells at the right and bottom edges
    #[arg(short, long, default_value = "crop", value_parser = parse_edge_policy)]
    pub edge: EdgePolicy,

    /// Disable the perceptual correction of rings and crosshatch
    #[arg(long)]
    pub no_adjust: bool,

    /// Use intensity-dependent crosshatch spacing
    #[arg(long)]
    pub chaotic: bool,

    /// Random seed for stippling
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output file; the extension selects the format
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extra directory to search for the source image (repeatable)
    #[arg(short = 'd', long = "search-dir", value_name = "DIR")]
    pub search_dirs: Vec<PathBuf>,

    /// Print the numbered pattern menu and exit
    #[arg(short, long)]
    pub list_patterns: bool,

    /// Render colour channels one after another instead of concurrently
    #[arg(long)]
    pub sequential: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pattern flags selected on the command line
    pub const fn flags(&self) -> PatternFlags {
        PatternFlags {
            adjusted: !self.no_adjust,
            chaotic: self.chaotic,
        }
    }

    /// Channel execution strategy
    pub const fn execution(&self) -> Execution {
        if self.sequential {
            Execution::Sequential
        } else {
            Execution::Parallel
        }
    }

    /// Colour plan for a source that does or does not carry colour
    pub fn colour_plan(&self, source_has_colour: bool) -> ColourPlan {
        match (self.colour, source_has_colour) {
            (ColourChoice::PerChannel, true) => ColourPlan::PerChannel([
                self.red.unwrap_or(self.pattern),
                self.green.unwrap_or(self.pattern),
                self.blue.unwrap_or(self.pattern),
            ]),
            _ => ColourPlan::Grayscale(self.pattern),
        }
    }

    /// Output path: `--output` or `<stem>_pattern.<ext>` beside the source
    pub fn output_path(&self, source: &Path) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let stem = source.file_stem().unwrap_or_default();
        let extension = source
            .extension()
            .map_or_else(|| DEFAULT_OUTPUT_EXTENSION.into(), |ext| ext.to_string_lossy());
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = source.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Numbered pattern menu, one entry per line
pub fn pattern_menu() -> String {
    Pattern::menu()
        .map(|(number, pattern)| format!("{number}) {pattern}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Runs one render from parsed command-line arguments
pub struct PatternRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PatternRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Locate, render and save the requested image
    ///
    /// Returns the path written, or `None` when only the menu was printed.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be found or decoded, the settings
    /// are invalid, or the result cannot be saved
    // Allow print for the pattern menu and the final notice
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn run(&mut self) -> Result<Option<PathBuf>> {
        if self.cli.list_patterns {
            println!("{}", pattern_menu());
            return Ok(None);
        }

        let target = self
            .cli
            .target
            .clone()
            .ok_or_else(|| invalid_parameter("target", &"", &"no source image given"))?;
        let search = SearchPaths::discover(&self.cli.search_dirs)?;
        let source = search.resolve(&target)?;
        let image = open_image(&source)?;
        let (width, height) = (image.width(), image.height());

        let cell_size = self
            .cli
            .cell_size
            .unwrap_or_else(|| default_cell_size(width, height));
        let patterner = Patterner::new(cell_size)?
            .with_quality(self.cli.quality)?
            .with_edge_policy(self.cli.edge)
            .with_flags(self.cli.flags())
            .with_seed(self.cli.seed);

        let (canvas_width, canvas_height) = patterner.canvas_size(width as usize, height as usize)?;
        if canvas_width == 0 || canvas_height == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("larger than the {width}x{height} image"),
            ));
        }

        let plan = self.cli.colour_plan(has_colour(&image));
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(plan.channel_labels());
        }

        let observer: &dyn RenderObserver = match &self.progress_manager {
            Some(pm) => pm,
            None => &Silent,
        };
        let result = render_image(&image, plan, &patterner, self.cli.execution(), observer)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let output_path = self.cli.output_path(&source);
        scale_and_save(&result, (width, height), &output_path)?;

        if !self.cli.quiet {
            eprintln!("Saved {}", output_path.display());
        }

        Ok(Some(output_path))
    }
}
