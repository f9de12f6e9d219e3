//! Command-line interface for batch mosaic generation over image files

use crate::grid::Image;
use crate::io::configuration::{
    DEFAULT_FRAMES, DEFAULT_GRID_ORDER, DEFAULT_ITERATIONS, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{load_image, save_image};
use crate::io::progress::ProgressManager;
use crate::mosaic::engine;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mosaictile")]
#[command(
    author,
    version,
    about = "Shuffle images into randomized tile mosaics"
)]
/// Command-line arguments for the mosaic generation tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid order n; each image splits into n x n cells
    #[arg(short, long, default_value_t = DEFAULT_GRID_ORDER)]
    pub grid: usize,

    /// Number of shuffle passes per generated mosaic
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Image files or directories contributing tiles to a shared pool
    #[arg(short, long)]
    pub pool: Vec<PathBuf>,

    /// Number of independently regenerated mosaics per input
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Random seed for reproducible generation (fresh entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Directory for generated mosaics (defaults beside each input)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch mosaic generation with progress tracking
///
/// Per-image load and save failures are logged and skipped; only target
/// validation aborts a run. The final report carries aggregate counts.
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    rng: StdRng,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let rng = cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            cli,
            progress_manager,
            rng,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the grid order is zero or the target is neither
    /// a supported image file nor a directory.
    // Allow print for the aggregate user-facing report
    #[allow(clippy::print_stderr)]
    pub fn process(&mut self) -> Result<()> {
        if self.cli.grid < 1 {
            return Err(invalid_parameter(
                "grid",
                &self.cli.grid,
                &"grid order must be at least 1",
            ));
        }

        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(());
        }

        let pool_images = self.load_pool_images();

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut saved = 0usize;
        let mut failed = 0usize;
        for (index, file) in files.iter().enumerate() {
            let (file_saved, file_failed) = self.process_file(file, index, &pool_images);
            saved += file_saved;
            failed += file_failed;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if !self.cli.quiet {
            eprintln!("Saved {saved} mosaics ({failed} failed)");
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a supported image format",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).map_err(|e| {
                crate::io::error::MosaicError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                }
            })? {
                let Ok(entry) = entry else { continue };
                let path = entry.path();
                if is_supported_image(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be an image file or directory",
            ))
        }
    }

    // Allow print for user feedback on skipped files
    #[allow(clippy::print_stderr)]
    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path, 1);
        if output_path.exists() {
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    /// Load every pool image, skipping unreadable or undecodable entries
    // Allow print for user feedback on skipped pool images
    #[allow(clippy::print_stderr)]
    fn load_pool_images(&self) -> Vec<Image> {
        let mut paths = Vec::new();
        for entry in &self.cli.pool {
            if entry.is_dir() {
                if let Ok(dir) = std::fs::read_dir(entry) {
                    let mut found: Vec<PathBuf> = dir
                        .flatten()
                        .map(|e| e.path())
                        .filter(|p| is_supported_image(p) && !is_generated_output(p))
                        .collect();
                    found.sort();
                    paths.extend(found);
                }
            } else {
                paths.push(entry.clone());
            }
        }

        let mut images = Vec::new();
        for path in paths {
            match load_image(&path) {
                Ok(image) => images.push(image),
                Err(error) => {
                    if !self.cli.quiet {
                        eprintln!("Skipping pool image: {error}");
                    }
                }
            }
        }
        images
    }

    /// Generate and save every frame for one input image
    ///
    /// Returns `(saved, failed)` frame counts; a load failure costs one
    /// failure and skips the file without touching the rest of the batch.
    // Allow print for user feedback on per-file failures
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input: &Path, index: usize, pool_images: &[Image]) -> (usize, usize) {
        let frames = self.cli.frames.max(1);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input, frames);
        }

        let target = match load_image(input) {
            Ok(image) => image,
            Err(error) => {
                if !self.cli.quiet {
                    eprintln!("Skipping input: {error}");
                }
                if let Some(ref mut pm) = self.progress_manager {
                    pm.complete_file(index);
                }
                return (0, 1);
            }
        };

        let pool = (!pool_images.is_empty()).then_some(pool_images);

        let mut saved = 0usize;
        let mut failed = 0usize;
        for frame in 1..=frames {
            let mosaic = engine::generate(
                &target,
                self.cli.grid,
                self.cli.iterations,
                pool,
                &mut self.rng,
            );

            let output_path = self.output_path(input, frame);
            match save_image(&output_path, &mosaic) {
                Ok(()) => saved += 1,
                Err(error) => {
                    if !self.cli.quiet {
                        eprintln!("Failed to save frame: {error}");
                    }
                    failed += 1;
                }
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.update_frame(index, frame);
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        (saved, failed)
    }

    /// Output path for one frame of one input image
    ///
    /// Single-frame runs write `<stem>_mosaic.png`; multi-frame runs number
    /// the stills so repeated regenerations land side by side.
    fn output_path(&self, input: &Path, frame: usize) -> PathBuf {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let name = if self.cli.frames > 1 {
            format!("{stem}{OUTPUT_SUFFIX}_{frame:03}.png")
        } else {
            format!("{stem}{OUTPUT_SUFFIX}.png")
        };

        match (&self.cli.output_dir, input.parent()) {
            (Some(dir), _) => dir.join(name),
            (None, Some(parent)) if !parent.as_os_str().is_empty() => parent.join(name),
            (None, _) => PathBuf::from(name),
        }
    }
}

/// Check whether a path carries a supported raster image extension
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
        })
}

/// Check whether a path looks like a mosaic this tool already produced
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.contains(OUTPUT_SUFFIX))
}
