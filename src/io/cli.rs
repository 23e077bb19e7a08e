//! Command-line interface for solving and drawing board files

use crate::io::configuration::{BOARD_EXTENSION, IMAGE_EXTENSION, SOLUTION_SUFFIX};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::format::{load_board, load_solution, save_solution};
use crate::io::image::export_board_as_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "pipeflow")]
#[command(
    author,
    version,
    about = "Rotate pipes so gas flows from the tanks to the houses"
)]
/// Command-line arguments for the board solver
pub struct Cli {
    /// Board file or directory of board files to solve
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Draw the board in this saved state instead of solving it
    #[arg(short, long, value_name = "STATE")]
    pub state: Option<PathBuf>,

    /// Image path for a single board (implies --render)
    #[arg(short, long, value_name = "IMAGE")]
    pub output: Option<PathBuf>,

    /// Render each solved board as a PNG next to its solution
    #[arg(short, long)]
    pub render: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Solve boards even if a solution file exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing solution files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if boards should be rendered after solving
    pub const fn should_render(&self) -> bool {
        self.render || self.output.is_some()
    }
}

/// Orchestrates solving a batch of board files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, loading, solving output or
    /// rendering fails for any board
    pub fn process(&mut self) -> Result<()> {
        if (self.cli.state.is_some() || self.cli.output.is_some()) && !self.cli.target.is_file() {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"--state and --output need a single board file",
            ));
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
            info!(boards = pm.completed(), "batch finished");
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !Self::is_board_file(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"Target file must be a .txt board",
                ));
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if Self::is_board_file(&path)
                    && !Self::is_solution_file(&path)
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
                &target.display(),
                &"Target must be a board file or directory",
            ))
        }
    }

    fn is_board_file(path: &Path) -> bool {
        path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(BOARD_EXTENSION)
    }

    fn is_solution_file(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(SOLUTION_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if self.cli.state.is_some() || !self.cli.skip_existing() {
            return true;
        }

        let solution_path = Self::get_solution_path(input_path);
        if solution_path.exists() {
            warn!(board = %input_path.display(), "skipping, solution exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let mut board = load_board(input_path)?;

        if let Some(ref state_path) = self.cli.state {
            load_solution(&mut board, state_path)?;
            let image_path = self.get_image_path(input_path);
            export_board_as_png(&board, &image_path)?;
            info!(
                board = %input_path.display(),
                image = %image_path.display(),
                "rendered saved state"
            );
        } else {
            let summary = board.solve();
            let solution_path = Self::get_solution_path(input_path);
            save_solution(&board, &solution_path)?;
            info!(
                board = %input_path.display(),
                tanks = summary.tanks,
                layers = summary.layers,
                visited = summary.visited,
                houses = summary.houses,
                houses_connected = summary.houses_connected,
                all_houses_connected = summary.all_houses_connected(),
                elapsed_ms = start_time.elapsed().as_millis(),
                "solved board"
            );

            if self.cli.should_render() {
                export_board_as_png(&board, &self.get_image_path(input_path))?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    /// Path of the solution written for a board file
    pub fn get_solution_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let solution_name = format!(
            "{}{SOLUTION_SUFFIX}.{BOARD_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(solution_name)
        } else {
            PathBuf::from(solution_name)
        }
    }

    fn get_image_path(&self, input_path: &Path) -> PathBuf {
        if let Some(ref output) = self.cli.output {
            return output.clone();
        }

        let stem = input_path.file_stem().unwrap_or_default();
        let image_name = format!("{}.{IMAGE_EXTENSION}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(image_name)
        } else {
            PathBuf::from(image_name)
        }
    }
}
