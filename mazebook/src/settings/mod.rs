use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::book::BookError;

pub const DEFAULT_BOOK: &str = include_str!("./default_book.ron");

/// One stage of generated mazes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagePreset {
    pub count: usize,
    pub size: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSettings {
    pub seed: u64,
    pub stages: Vec<StagePreset>,
    #[serde(default = "default_diy_pages")]
    pub diy_pages: usize,
    #[serde(default = "default_intro_pages")]
    pub intro_pages: usize,
    #[serde(default = "default_keys_per_page")]
    pub keys_per_page: usize,
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_diy_pages() -> usize {
    8
}

fn default_intro_pages() -> usize {
    2
}

fn default_keys_per_page() -> usize {
    4
}

impl Default for BookSettings {
    fn default() -> Self {
        BookSettings {
            seed: 42,
            stages: vec![
                StagePreset { count: 8, size: 5 },
                StagePreset { count: 12, size: 7 },
                StagePreset { count: 24, size: 10 },
                StagePreset { count: 28, size: 15 },
            ],
            diy_pages: default_diy_pages(),
            intro_pages: default_intro_pages(),
            keys_per_page: default_keys_per_page(),
            log_level: Some("info".to_string()),
        }
    }
}

impl BookSettings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mazebook").join("book.ron"))
    }

    pub fn from_ron(text: &str) -> Result<Self, BookError> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        let settings: BookSettings = options.from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, BookError> {
        log::debug!("Loading book config from {:?}", path);
        Self::from_ron(&fs::read_to_string(path)?)
    }

    /// Loads the file at `path`, or the built-in layout when there is no such file.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, BookError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        match Self::load(path) {
            Err(BookError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No book config at {:?}, using the default one", path);
                Ok(Self::default())
            }
            res => res,
        }
    }

    pub fn log_level(&self) -> Option<log::Level> {
        let level = self.log_level.as_deref()?;
        match level.parse() {
            Ok(level) => Some(level),
            Err(_) => {
                log::warn!("Invalid log level '{}' in book config, ignoring it", level);
                None
            }
        }
    }

    pub fn validate(&self) -> Result<(), BookError> {
        if self.keys_per_page == 0 {
            return Err(BookError::Settings("keys_per_page must be positive".into()));
        }

        if let Some(stage) = self.stages.iter().find(|stage| stage.size <= 0) {
            return Err(BookError::Settings(format!(
                "stage size must be positive, got {}",
                stage.size
            )));
        }

        Ok(())
    }
}
