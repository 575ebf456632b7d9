use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::{LoadError, LoadResult};
use crate::scene::{Scene, SceneId};

/// Every scene of a story, keyed by id. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct SceneStore {
    scenes: HashMap<SceneId, Scene>,
    // Load order, for listings and reachability reports.
    order: Vec<SceneId>,
}

impl SceneStore {
    /// Build a store from scene records.
    ///
    /// Fails on the first id that appears twice instead of letting the later
    /// record overwrite the earlier one.
    pub fn load(records: impl IntoIterator<Item = Scene>) -> LoadResult<Self> {
        let mut scenes = HashMap::new();
        let mut order = Vec::new();

        for scene in records {
            if scenes.contains_key(&scene.id) {
                warn!(scene = %scene.id, "duplicate scene id");
                return Err(LoadError::DuplicateSceneId(scene.id));
            }
            order.push(scene.id.clone());
            scenes.insert(scene.id.clone(), scene);
        }

        info!(count = order.len(), scenes = ?order, "scene store loaded");
        Ok(Self { scenes, order })
    }

    /// Look up a scene by id.
    pub fn get(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// Whether a scene with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the store holds no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scene ids in load order.
    pub fn ids(&self) -> &[SceneId] {
        &self.order
    }

    /// Scenes in load order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.order.iter().filter_map(|id| self.scenes.get(id))
    }
}
