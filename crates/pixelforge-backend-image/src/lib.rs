//! pixelforge Imaging Backend
//!
//! This crate implements every pixelforge asset operation on top of
//! 8-bit RGBA buffers. Operations are synchronous and stateless: load a
//! file, work on its pixels, write PNGs, return a serializable report.
//! Nothing here prints; reporting is the caller's job.
//!
//! # Operations
//!
//! - **Generate**: procedural player, drone, boss, tile and item sprites and
//!   their animated strips ([`generate_asset_pack`])
//! - **Split**: cut a sheet into named grid cells ([`split_sprite_sheet`])
//! - **Clean**: strip white/gray backgrounds to alpha ([`clean_transparency`])
//! - **Inspect**: report size and frame layout ([`inspect_image`])
//! - **Replicate**: rotated/mirrored tile variants ([`replicate_tiles`])
//! - **Convert**: re-encode rasters as RGBA PNG ([`convert_to_png`], [`copy_aliases`])
//!
//! # Example
//!
//! ```no_run
//! use pixelforge_backend_image::split_sprite_sheet;
//! use pixelforge_spec::Grid;
//! use std::path::Path;
//!
//! let names: Vec<String> = ["laser_beam", "explosion_burst", "skip", "portal_ring"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let report = split_sprite_sheet(
//!     Path::new("assets/effects-1.jpg"),
//!     Path::new("assets/sprites/effects"),
//!     Grid::new(2, 2),
//!     &names,
//! )
//! .unwrap();
//! println!("{} cells written", report.emitted.len());
//! ```
//!
//! # Determinism
//!
//! - PNG encoding uses fixed compression and filter settings
//! - Texture noise comes from a seeded PCG32 RNG
//! - Every written file's BLAKE3 hash is returned in its report

pub mod clean;
pub mod color;
pub mod compose;
pub mod convert;
pub mod draw;
pub mod font;
pub mod generate;
pub mod inspect;
pub mod io;
pub mod png;
pub mod replicate;
pub mod rng;
pub mod split;

pub use clean::{clean_transparency, CleanError, CleanReport, PixelStats};
pub use color::{palette, Color};
pub use convert::{convert_to_png, copy_aliases, AliasReport, ConvertError, ConvertReport};
pub use generate::{generate_asset_pack, GenerateError, GeneratedAsset, GenerationReport};
pub use inspect::{inspect_image, InspectReport};
pub use io::{load_rgba, LoadError, LoadedImage};
pub use png::{save_png, PngConfig, PngError, SavedFile};
pub use replicate::{replicate_tiles, ReplicateError, ReplicateReport, TileTransform};
pub use rng::DeterministicRng;
pub use split::{split_sprite_sheet, SplitError, SplitReport};
