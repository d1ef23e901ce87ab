use serde::Serialize;

use crate::settings::BookSettings;

/// Grid printed on the "design your own maze" pages.
pub const DIY_GRID_SIZE: i32 = 10;

/// Page counts of the classic 100 page book.
pub const CLASSIC_MAZE_COUNT: usize = 72;
pub const CLASSIC_KEY_PAGE_COUNT: usize = 18;
pub const CLASSIC_PAGE_COUNT: usize = 100;

/// A generated maze page, its answer key goes to one of the key pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeEntry {
    pub id: String,
    pub stage: usize,
    pub size: i32,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiyEntry {
    pub id: String,
    pub stage: usize,
}

/// One page of the book as listed in the metadata handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub id: String,
    pub stage: usize,
    pub grid: String,
    pub has_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPlan {
    pub intro_pages: usize,
    pub mazes: Vec<MazeEntry>,
    pub diy: Vec<DiyEntry>,
    /// Maze ids of every answer key page, in book order.
    pub key_pages: Vec<Vec<String>>,
}

impl BookPlan {
    /// Lays out the book. Expects validated settings.
    pub fn new(settings: &BookSettings) -> Self {
        let mazes: Vec<_> = settings
            .stages
            .iter()
            .enumerate()
            .flat_map(|(i, stage)| (0..stage.count).map(move |_| (i + 1, stage.size)))
            .enumerate()
            .map(|(i, (stage, size))| {
                let number = i as u64 + 1;
                MazeEntry {
                    id: format!("M{:03}", number),
                    stage,
                    size,
                    seed: settings.seed.wrapping_add(number),
                }
            })
            .collect();

        let diy_stage = settings.stages.len() + 1;
        let diy = (1..=settings.diy_pages)
            .map(|i| DiyEntry {
                id: format!("D{:02}", i),
                stage: diy_stage,
            })
            .collect();

        let key_pages = mazes
            .chunks(settings.keys_per_page.max(1))
            .map(|chunk| chunk.iter().map(|entry| entry.id.clone()).collect())
            .collect();

        BookPlan {
            intro_pages: settings.intro_pages,
            mazes,
            diy,
            key_pages,
        }
    }

    pub fn page_count(&self) -> usize {
        self.intro_pages + self.mazes.len() + self.diy.len() + self.key_pages.len()
    }

    /// Whether the plan has the page counts of the classic book.
    pub fn is_classic_layout(&self) -> bool {
        self.mazes.len() == CLASSIC_MAZE_COUNT
            && self.key_pages.len() == CLASSIC_KEY_PAGE_COUNT
            && self.page_count() == CLASSIC_PAGE_COUNT
    }

    /// Maze pages first, then the DIY pages.
    pub fn metadata(&self) -> Vec<PageMetadata> {
        let mazes = self.mazes.iter().map(|entry| PageMetadata {
            id: entry.id.clone(),
            stage: entry.stage,
            grid: format!("{0}x{0}", entry.size),
            has_key: true,
            seed: Some(entry.seed),
        });

        let diy = self.diy.iter().map(|entry| PageMetadata {
            id: entry.id.clone(),
            stage: entry.stage,
            grid: format!("{0}x{0}", DIY_GRID_SIZE),
            has_key: false,
            seed: None,
        });

        mazes.chain(diy).collect()
    }
}
