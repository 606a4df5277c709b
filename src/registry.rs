//! Lookups the transformation consults but does not own: resolved
//! component definitions, and the nested entities that population
//! instances may be redirected into.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::MorphovizError;
use crate::model::{Component, ModelDocument};
use crate::scene::VisualizationTree;

// ---------------------------------------------------------------------------
// ComponentRegistry
// ---------------------------------------------------------------------------

/// Component id → resolved definition.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    components: FxHashMap<String, Component>,
}

impl ComponentRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every cell of `document` as a component.
    #[must_use]
    pub fn from_document(document: &ModelDocument) -> Self {
        let mut registry = Self::new();
        for cell in &document.cells {
            registry.register(Component::Cell(cell.clone()));
        }
        registry
    }

    /// Register (or replace) a component under its own id.
    pub fn register(&mut self, component: Component) {
        let _ = self.components.insert(component.id().to_owned(), component);
    }

    /// Definition registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Definition registered under `id`; an unknown id is an error.
    pub fn resolve(&self, id: &str) -> Result<&Component, MorphovizError> {
        self.get(id)
            .ok_or_else(|| MorphovizError::UnknownComponent(id.to_owned()))
    }

    /// Number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FromIterator<Component> for ComponentRegistry {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        let mut registry = Self::new();
        for component in iter {
            registry.register(component);
        }
        registry
    }
}

// ---------------------------------------------------------------------------
// Nested entities
// ---------------------------------------------------------------------------

/// One aspect of a nested entity, owning an optional visualization subtree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AspectNode {
    /// Aspect identifier, matched against the owning aspect of the
    /// transformation.
    pub id: String,
    /// Visualization subtree, created on first use.
    #[serde(default)]
    pub visualization: Option<VisualizationTree>,
}

impl AspectNode {
    /// Aspect without a visualization subtree.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visualization: None,
        }
    }

    /// The aspect's visualization subtree, created empty if absent.
    pub fn visualization_tree_mut(&mut self) -> &mut VisualizationTree {
        self.visualization
            .get_or_insert_with(|| VisualizationTree::new(self.id.clone()))
    }
}

/// A separately tracked sub-entity with its own aspects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EntityNode {
    /// Entity identifier.
    pub id: String,
    /// Aspects in declaration order.
    #[serde(default)]
    pub aspects: Vec<AspectNode>,
}

impl EntityNode {
    /// Entity with one aspect per id.
    #[must_use]
    pub fn with_aspects<S: AsRef<str>>(id: &str, aspect_ids: &[S]) -> Self {
        Self {
            id: id.to_owned(),
            aspects: aspect_ids
                .iter()
                .map(|a| AspectNode::new(a.as_ref()))
                .collect(),
        }
    }

    /// First aspect with the given id.
    #[must_use]
    pub fn aspect(&self, aspect_id: &str) -> Option<&AspectNode> {
        self.aspects.iter().find(|a| a.id == aspect_id)
    }

    /// First aspect with the given id, mutably.
    pub fn aspect_mut(&mut self, aspect_id: &str) -> Option<&mut AspectNode> {
        self.aspects.iter_mut().find(|a| a.id == aspect_id)
    }
}

/// Fully qualified instance name (e.g. `pop[0]`) → nested entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRegistry {
    entities: FxHashMap<String, EntityNode>,
}

impl EntityRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `instance_name` to `entity`, replacing any previous mapping.
    pub fn insert(&mut self, instance_name: impl Into<String>, entity: EntityNode) {
        let _ = self.entities.insert(instance_name.into(), entity);
    }

    /// Entity mapped to `instance_name`.
    #[must_use]
    pub fn get(&self, instance_name: &str) -> Option<&EntityNode> {
        self.entities.get(instance_name)
    }

    /// Entity mapped to `instance_name`, mutably.
    pub fn get_mut(&mut self, instance_name: &str) -> Option<&mut EntityNode> {
        self.entities.get_mut(instance_name)
    }

    /// Whether `instance_name` is mapped.
    #[must_use]
    pub fn contains(&self, instance_name: &str) -> bool {
        self.entities.contains_key(instance_name)
    }

    /// Number of mapped instance names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether nothing is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
