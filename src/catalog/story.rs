//! Interactive story catalog.
//!
//! Characters each carry a keyed set of scenes; every scene offers options with
//! feedback for the learner. Served read-only by the story endpoint.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::CatalogError;

/// One selectable answer inside a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneOption {
    pub text: String,
    pub feedback: String,
    pub emotion: String,
    pub correct: bool,
}

/// A scene a character presents, keyed by `scene_key` within its character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub scene_key: String,
    pub question: String,
    pub options: Vec<SceneOption>,
}

/// A story character and its scenes as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryCharacter {
    pub id: i64,
    pub name: String,
    pub age: String,
    pub location: String,
    pub scenes: Vec<Scene>,
}

/// Character fields exposed by the story endpoint (the id stays request-side).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterProfile {
    pub name: String,
    pub age: String,
    pub location: String,
}

/// A scene as nested in the story response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneData {
    pub question: String,
    pub options: Vec<SceneOption>,
}

/// Full story payload for one character: profile plus scenes keyed by scene_key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryData {
    pub character: CharacterProfile,
    pub scenes: BTreeMap<String, SceneData>,
}

/// JSON seed stories compiled into the binary, served when no
/// `NESTRANK_STORIES_PATH` is configured.
const SEED_STORIES: &str = include_str!("seed_stories.json");

/// In-memory story catalog, immutable after construction.
#[derive(Debug, Clone)]
pub struct StoryCatalog {
    characters: Vec<StoryCharacter>,
}

impl StoryCatalog {
    /// Creates a catalog over the given characters, rejecting duplicate ids.
    pub fn new(characters: Vec<StoryCharacter>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for character in &characters {
            if !seen.insert(character.id) {
                return Err(CatalogError::InvalidData {
                    reason: format!("duplicate character id {}", character.id),
                });
            }
        }
        Ok(Self { characters })
    }

    /// Loads a JSON array of characters from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let characters: Vec<StoryCharacter> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::FileParse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(characters = characters.len(), path = %path.display(), "Loaded story catalog");
        Self::new(characters)
    }

    /// Builds the compiled-in seed stories.
    pub fn seeded() -> Result<Self, CatalogError> {
        let characters: Vec<StoryCharacter> =
            serde_json::from_str(SEED_STORIES).map_err(|source| CatalogError::InvalidData {
                reason: format!("seed stories are not valid JSON: {source}"),
            })?;
        Self::new(characters)
    }

    /// Number of characters in the catalog.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Returns `true` if the catalog holds no characters.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Assembles the story payload for a character, or `None` if the id is unknown.
    pub fn story_for(&self, character_id: i64) -> Option<StoryData> {
        let character = self.characters.iter().find(|c| c.id == character_id)?;

        let scenes = character
            .scenes
            .iter()
            .map(|scene| {
                (
                    scene.scene_key.clone(),
                    SceneData {
                        question: scene.question.clone(),
                        options: scene.options.clone(),
                    },
                )
            })
            .collect();

        Some(StoryData {
            character: CharacterProfile {
                name: character.name.clone(),
                age: character.age.clone(),
                location: character.location.clone(),
            },
            scenes,
        })
    }
}
