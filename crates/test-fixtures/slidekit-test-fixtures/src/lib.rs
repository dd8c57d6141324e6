//! Shared JSON fixtures for slidekit tests, indexed by `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    decks: HashMap<String, String>,
    pages: HashMap<String, String>,
}

#[derive(Copy, Clone, Debug)]
enum Kind {
    Deck,
    Page,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Deck => "deck",
            Kind::Page => "page",
        }
    }

    fn entries(self) -> &'static HashMap<String, String> {
        match self {
            Kind::Deck => &MANIFEST.decks,
            Kind::Page => &MANIFEST.pages,
        }
    }

    fn names(self) -> Vec<String> {
        let mut names: Vec<String> = self.entries().keys().cloned().collect();
        names.sort();
        names
    }

    fn locate(self, name: &str) -> Result<PathBuf> {
        let rel = self
            .entries()
            .get(name)
            .ok_or_else(|| anyhow!("unknown {} fixture '{name}'", self.label()))?;
        Ok(Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(rel))
    }

    fn load<T: DeserializeOwned>(self, name: &str) -> Result<T> {
        let path = self.locate(name)?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read fixture at {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {} fixture {name}", self.label()))
    }
}

/// Carousel scenarios: slide count, config, geometry, and a scripted run.
pub mod decks {
    use super::*;

    /// Deck names in sorted order.
    pub fn keys() -> Vec<String> {
        Kind::Deck.names()
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        Kind::Deck.load(name)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Kind::Deck.locate(name)
    }
}

/// Page layouts and typewriter phrase sets.
pub mod pages {
    use super::*;

    pub fn keys() -> Vec<String> {
        Kind::Page.names()
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        Kind::Page.load(name)
    }
}
