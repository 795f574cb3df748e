//! Scene catalog
//!
//! Maps scene ids to constructors. Resolution never fails: an unknown, empty or
//! platform-mangled id yields a fresh default scene and the user restarts there.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::scenes::{ids, Goodbye, Help, Scene, Welcome, WelcomeDefault};

/// Builds a fresh scene instance for one request
pub type SceneConstructor = Arc<dyn Fn() -> Box<dyn Scene> + Send + Sync>;

/// Registry of every scene the skill can be in
#[derive(Clone)]
pub struct SceneCatalog {
    constructors: HashMap<String, SceneConstructor>,
    default: SceneConstructor,
}

impl SceneCatalog {
    /// Catalog without registered scenes, resolving everything to `Welcome`
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
            default: Arc::new(|| -> Box<dyn Scene> { Box::new(Welcome) }),
        }
    }

    /// Register a scene constructor, replacing any previous entry for `id`
    pub fn register<F>(&mut self, id: impl Into<String>, constructor: F)
    where
        F: Fn() -> Box<dyn Scene> + Send + Sync + 'static,
    {
        self.constructors.insert(id.into(), Arc::new(constructor));
    }

    /// Builder-style `register`
    pub fn with_scene<F>(mut self, id: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Box<dyn Scene> + Send + Sync + 'static,
    {
        self.register(id, constructor);
        self
    }

    /// Override the scene unknown ids resolve to
    pub fn with_default<F>(mut self, constructor: F) -> Self
    where
        F: Fn() -> Box<dyn Scene> + Send + Sync + 'static,
    {
        self.default = Arc::new(constructor);
        self
    }

    /// Construct the scene registered under `id`, or the default scene
    pub fn resolve(&self, id: &str) -> Box<dyn Scene> {
        match self.constructors.get(id) {
            Some(constructor) => constructor(),
            None => {
                debug!(scene_id = id, "Unknown scene id, resolving to default scene");
                self.default_scene()
            }
        }
    }

    pub fn default_scene(&self) -> Box<dyn Scene> {
        (self.default)()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(id)
    }

    /// Registered ids in sorted order
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self::empty()
            .with_scene(ids::WELCOME, || Box::new(Welcome))
            .with_scene(ids::WELCOME_DEFAULT, || Box::new(WelcomeDefault))
            .with_scene(ids::HELP, || Box::new(Help))
            .with_scene(ids::GOODBYE, || Box::new(Goodbye))
    }
}

impl fmt::Debug for SceneCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneCatalog")
            .field("scenes", &self.ids())
            .field("default", &self.default_scene().id().to_string())
            .finish()
    }
}
