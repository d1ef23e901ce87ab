pub mod plan;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::Path as FsPath,
};

use mazecore::{dims::Dims, Maze, MazeError, Path};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

pub use plan::{BookPlan, MazeEntry, PageMetadata};

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Failed to read or write book files: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse book config: {0}")]
    Config(#[from] ron::error::SpannedError),
    #[error("Invalid book config: {0}")]
    Settings(String),
    #[error("Failed to serialize book: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
    #[error("Maze {id} failed verification: {reason}")]
    Verification { id: String, reason: String },
}

/// A maze page together with its answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolvedMaze {
    pub id: String,
    pub stage: usize,
    pub maze: Maze,
    pub solution: Path,
}

/// Everything the renderer needs to draw the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub page_count: usize,
    pub intro_pages: usize,
    pub metadata: Vec<PageMetadata>,
    pub key_pages: Vec<Vec<String>>,
    pub mazes: Vec<SolvedMaze>,
}

/// Generates and solves every maze of the plan in parallel, then verifies the results.
pub fn generate_book(plan: &BookPlan) -> Result<Book, BookError> {
    let mazes = plan
        .mazes
        .par_iter()
        .map(solve_entry)
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "Generated and verified {} mazes across {} stages",
        mazes.len(),
        plan.mazes.last().map_or(0, |entry| entry.stage)
    );

    Ok(Book {
        page_count: plan.page_count(),
        intro_pages: plan.intro_pages,
        metadata: plan.metadata(),
        key_pages: plan.key_pages.clone(),
        mazes,
    })
}

fn solve_entry(entry: &MazeEntry) -> Result<SolvedMaze, BookError> {
    let maze = Maze::generate(Dims(entry.size, entry.size), Some(entry.seed))?;
    let solution = maze.solve_default();
    log::debug!(
        "{}: {}x{} maze, solution of {} steps",
        entry.id,
        entry.size,
        entry.size,
        solution.edge_count()
    );

    verify(&entry.id, &maze, &solution)?;

    Ok(SolvedMaze {
        id: entry.id.clone(),
        stage: entry.stage,
        maze,
        solution,
    })
}

/// Checks that the maze is perfect and the solution leads from the entrance to the exit.
pub fn verify(id: &str, maze: &Maze, solution: &Path) -> Result<(), BookError> {
    let fail = |reason: String| {
        Err(BookError::Verification {
            id: id.to_string(),
            reason,
        })
    };

    if !maze.grid().is_perfect() {
        return fail(format!(
            "{} open edges for {} cells, or not connected",
            maze.grid().open_edge_count(),
            maze.grid().cell_count()
        ));
    }

    if solution.start() != Some(maze.start()) || solution.goal() != Some(maze.goal()) {
        return fail(format!(
            "solution runs from {:?} to {:?}, not from {} to {}",
            solution.start(),
            solution.goal(),
            maze.start(),
            maze.goal()
        ));
    }

    if !solution.is_valid_in(maze.grid()) {
        return fail("solution crosses a wall".to_string());
    }

    Ok(())
}

/// Writes the book as pretty JSON, creating missing parent directories.
pub fn write_book(book: &Book, path: &FsPath) -> Result<(), BookError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, book)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    log::info!("Wrote {} pages of book data to {:?}", book.page_count, path);
    Ok(())
}
