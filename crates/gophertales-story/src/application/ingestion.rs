//! Building an engine from raw story bytes.
//!
//! Two layouts are accepted. The gopher layout is a map from gopher name to
//! a map of arcs; the classic layout is a single map of arcs. The gopher
//! layout is tried first and only wins if at least one top-level key is a
//! recognised gopher.

use std::collections::BTreeMap;

use gophertales_core::error::StoryError;
use gophertales_core::gopher::Gopher;
use sha2::{Digest, Sha256};
use tracing::{info, instrument, warn};

use super::engine::StoryEngine;
use super::source::StorySource;
use crate::domain::graph::{INTRO, StoryGraph};
use crate::domain::image::{classic_image, gopher_image};

/// Shape of a successfully parsed source.
#[derive(Debug)]
pub(crate) enum StoryLayout {
    Classic(StoryGraph),
    Gophers(BTreeMap<Gopher, StoryGraph>),
}

/// Parses `bytes` into one of the two layouts.
///
/// # Errors
///
/// Returns `StoryError::Format` if the bytes parse as neither layout.
pub(crate) fn detect_layout(bytes: &[u8]) -> Result<StoryLayout, StoryError> {
    if let Ok(candidate) = serde_json::from_slice::<BTreeMap<String, StoryGraph>>(bytes) {
        if candidate.keys().any(|key| key.parse::<Gopher>().is_ok()) {
            let mut gophers = BTreeMap::new();
            for (key, graph) in candidate {
                match key.parse::<Gopher>() {
                    Ok(gopher) => {
                        gophers.insert(gopher, graph);
                    }
                    Err(_) => warn!(key = %key, "skipping unrecognised gopher storyline"),
                }
            }
            return Ok(StoryLayout::Gophers(gophers));
        }
    }

    let classic = serde_json::from_slice::<StoryGraph>(bytes)?;
    Ok(StoryLayout::Classic(classic))
}

fn version_hash(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

impl StoryEngine {
    /// Builds an engine from raw story bytes.
    ///
    /// Every arc's image is computed here; any image in the source is ignored.
    /// In gopher mode a classic view holding only the intro of the first
    /// gopher (canonical order) that has one is derived as well.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Format` if the bytes parse as neither layout.
    #[instrument(skip(bytes), fields(len = bytes.len()))]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoryError> {
        let mut engine = Self {
            version_hash: version_hash(bytes),
            ..Self::default()
        };

        match detect_layout(bytes)? {
            StoryLayout::Classic(mut classic) => {
                classic.attach_images(classic_image);
                engine.classic = classic;
            }
            StoryLayout::Gophers(mut gophers) => {
                for (gopher, graph) in &mut gophers {
                    let gopher = *gopher;
                    graph.attach_images(|name| gopher_image(gopher, name));
                }
                engine.gophers = gophers;
                if let Some(source) = engine.classic_intro_source() {
                    engine.classic = derive_classic_intro(&engine.gophers[&source]);
                }
            }
        }

        info!(
            mode = ?engine.mode(),
            gophers = engine.gophers.len(),
            classic_arcs = engine.classic.len(),
            version_hash = %engine.version_hash,
            "story loaded"
        );
        Ok(engine)
    }

    /// Reads `source` and builds an engine from it.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Io` if the source cannot be read and
    /// `StoryError::Format` if its contents parse as neither layout.
    #[instrument(skip(source), fields(source = %source.describe()))]
    pub fn from_source(source: &dyn StorySource) -> Result<Self, StoryError> {
        let bytes = source.read()?;
        Self::from_bytes(&bytes)
    }
}

fn derive_classic_intro(graph: &StoryGraph) -> StoryGraph {
    let mut classic = StoryGraph::from_arcs(
        graph
            .get(INTRO)
            .map(|intro| (INTRO.to_owned(), intro.clone())),
    );
    classic.attach_images(classic_image);
    classic
}
