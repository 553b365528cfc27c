//! CLI argument definitions for the pixelforge command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use pixelforge_cli::chat::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use pixelforge_spec::{
    DEFAULT_INSPECT_FRAME_COUNT, DEFAULT_INSPECT_GRID, DEFAULT_REPLICA_COUNT,
    DEFAULT_REPLICA_PREFIX,
};

/// pixelforge - 2D sprite asset pipeline
#[derive(Parser)]
#[command(name = "pixelforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Draw the procedural sprite and animation pack
    Generate {
        /// Output root (static sprites go to sprites/, sheets to anim/)
        #[arg(long, default_value = "assets")]
        out_root: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Slice a sprite sheet into named PNG cells
    Split {
        /// Sprite sheet to slice (PNG or JPEG)
        #[arg(short, long)]
        input: String,

        /// Directory receiving <name>.png files
        #[arg(short, long)]
        output_dir: String,

        /// Number of columns
        #[arg(long)]
        cols: u32,

        /// Number of rows
        #[arg(long)]
        rows: u32,

        /// Comma-separated row-major cell names; "skip" discards a cell
        #[arg(long, value_delimiter = ',', required = true)]
        names: Vec<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Replace a white/gray background with transparency
    Clean {
        /// Image to analyze
        #[arg(short, long)]
        input: String,

        /// Cleaned file path (default: <stem>_clean.png beside the input)
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print image dimensions and animation frame layout
    Inspect {
        /// Image to inspect
        #[arg(short, long)]
        input: String,

        /// Number of columns
        #[arg(long, default_value_t = DEFAULT_INSPECT_GRID.cols)]
        cols: u32,

        /// Number of rows
        #[arg(long, default_value_t = DEFAULT_INSPECT_GRID.rows)]
        rows: u32,

        /// Number of frames actually used
        #[arg(long, default_value_t = DEFAULT_INSPECT_FRAME_COUNT)]
        frames: u32,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write rotated and mirrored variants of tiles
    Replicate {
        /// Source tile (repeatable, processed in order)
        #[arg(short, long = "source", required = true)]
        sources: Vec<String>,

        /// Directory receiving <prefix>_<NN>.png files
        #[arg(short, long)]
        output_dir: String,

        /// Variants per source
        #[arg(long, default_value_t = DEFAULT_REPLICA_COUNT)]
        count: u32,

        /// Output file name prefix
        #[arg(long, default_value = DEFAULT_REPLICA_PREFIX)]
        prefix: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Re-encode an image as an RGBA PNG
    Convert {
        /// Image to convert (PNG or JPEG)
        #[arg(short, long)]
        input: String,

        /// Output PNG path
        #[arg(short, long)]
        output: String,
    },

    /// Run every job of a pipeline config in order
    Run {
        /// Path to the pipeline config (JSON)
        #[arg(short, long)]
        config: String,

        /// Validate and print the plan without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a pipeline config
    Validate {
        /// Path to the pipeline config (JSON)
        #[arg(short, long)]
        config: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Interactive chat with a remote text model
    Chat {
        /// Model name
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// API base URL
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_split_names() {
        let cli = Cli::try_parse_from([
            "pixelforge",
            "split",
            "--input",
            "assets/effects-1.jpg",
            "--output-dir",
            "assets/sprites/effects",
            "--cols",
            "2",
            "--rows",
            "3",
            "--names",
            "laser_beam,explosion_burst,skip",
        ])
        .unwrap();
        match cli.command {
            Commands::Split {
                cols,
                rows,
                names,
                json,
                ..
            } => {
                assert_eq!((cols, rows), (2, 3));
                assert_eq!(names, vec!["laser_beam", "explosion_burst", "skip"]);
                assert!(!json);
            }
            _ => panic!("expected split command"),
        }
    }

    #[test]
    fn test_cli_split_requires_names() {
        let err = Cli::try_parse_from([
            "pixelforge",
            "split",
            "-i",
            "a.png",
            "-o",
            "out",
            "--cols",
            "1",
            "--rows",
            "1",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("--names"));
    }

    #[test]
    fn test_cli_inspect_defaults() {
        let cli = Cli::try_parse_from(["pixelforge", "inspect", "-i", "sheet.png"]).unwrap();
        match cli.command {
            Commands::Inspect {
                cols, rows, frames, ..
            } => {
                assert_eq!((cols, rows, frames), (4, 2, 6));
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_replicate_repeated_sources() {
        let cli = Cli::try_parse_from([
            "pixelforge",
            "replicate",
            "--source",
            "a.png",
            "--source",
            "b.png",
            "-o",
            "tiles",
        ])
        .unwrap();
        match cli.command {
            Commands::Replicate {
                sources,
                count,
                prefix,
                ..
            } => {
                assert_eq!(sources, vec!["a.png", "b.png"]);
                assert_eq!(count, 16);
                assert_eq!(prefix, "danger_tile");
            }
            _ => panic!("expected replicate command"),
        }
    }

    #[test]
    fn test_cli_run_dry_run() {
        let cli =
            Cli::try_parse_from(["pixelforge", "run", "-c", "pipeline.json", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Run { config, dry_run } => {
                assert_eq!(config, "pipeline.json");
                assert!(dry_run);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_cli_chat_defaults() {
        let cli = Cli::try_parse_from(["pixelforge", "chat"]).unwrap();
        match cli.command {
            Commands::Chat { model, endpoint } => {
                assert_eq!(model, "gemini-pro");
                assert_eq!(endpoint, DEFAULT_ENDPOINT);
            }
            _ => panic!("expected chat command"),
        }
    }

    #[test]
    fn test_cli_generate_default_out_root() {
        let cli = Cli::try_parse_from(["pixelforge", "generate", "--json"]).unwrap();
        match cli.command {
            Commands::Generate { out_root, json } => {
                assert_eq!(out_root, "assets");
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }
}
