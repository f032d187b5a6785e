//! Problem catalog
//!
//! An ordered list of problems, one per day. The built-in catalog is embedded
//! from `assets/problems.yaml`; a YAML file with the same shape can replace it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::syntax::Language;

const BUILTIN_PROBLEMS: &str = include_str!("../assets/problems.yaml");

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("catalog has no problems")]
    Empty,

    #[error("problem {id} has no starter code for {language}")]
    MissingStarter { id: u32, language: Language },

    #[error("duplicate problem id {id}")]
    DuplicateId { id: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

/// A sample test case shown with the problem and sent for evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: u32,
    pub title: String,
    pub difficulty: Difficulty,
    pub description: String,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub examples: Vec<TestCase>,
    pub starter_code: BTreeMap<Language, String>,
}

impl Problem {
    /// Starter code for `language`, empty when the problem has none
    pub fn starter(&self, language: Language) -> &str {
        self.starter_code
            .get(&language)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Ordered problem list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    problems: Vec<Problem>,
}

impl Catalog {
    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_PROBLEMS)
    }

    /// Load a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!(
            "Loaded {} problems from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse and validate a YAML problem list
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let problems: Vec<Problem> = serde_yaml::from_str(yaml)?;
        Self::new(problems)
    }

    /// Validate a problem list: non-empty, unique ids, starter code for every language
    pub fn new(problems: Vec<Problem>) -> Result<Self> {
        if problems.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, problem) in problems.iter().enumerate() {
            if problems[..i].iter().any(|p| p.id == problem.id) {
                return Err(CatalogError::DuplicateId { id: problem.id });
            }
            if let Some(language) = Language::ALL
                .into_iter()
                .find(|l| !problem.starter_code.contains_key(l))
            {
                return Err(CatalogError::MissingStarter {
                    id: problem.id,
                    language,
                });
            }
        }
        Ok(Self { problems })
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    pub fn first(&self) -> &Problem {
        &self.problems[0]
    }

    /// The problem with `id`, or the first problem when there is none
    pub fn find_or_first(&self, id: u32) -> &Problem {
        self.get(id).unwrap_or_else(|| self.first())
    }

    /// Position of problem `id` in catalog order
    pub fn position(&self, id: u32) -> Option<usize> {
        self.problems.iter().position(|p| p.id == id)
    }

    /// Id of the problem before `id`, if any
    pub fn previous_id(&self, id: u32) -> Option<u32> {
        let pos = self.position(id)?;
        pos.checked_sub(1).map(|p| self.problems[p].id)
    }

    /// Id of the problem after `id`, if any
    pub fn next_id(&self, id: u32) -> Option<u32> {
        let pos = self.position(id)?;
        self.problems.get(pos + 1).map(|p| p.id)
    }
}
