//! The result of assembling one stream

use std::collections::BTreeMap;
use std::path::Path;

use crate::entities::Entity;
use crate::error::Result;
use crate::io::dxf::DxfReader;
use crate::notification::NotificationCollection;

/// Finished entities in completion order, plus the diagnostics collected
/// while assembling them
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    entities: Vec<Entity>,
    notifications: NotificationCollection,
}

impl Drawing {
    pub fn new(entities: Vec<Entity>, notifications: NotificationCollection) -> Self {
        Drawing {
            entities,
            notifications,
        }
    }

    /// Read and assemble a DXF file with the default configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DxfReader::from_file(path)?.read()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    pub fn entities_on_layer<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a Entity> {
        self.entities.iter().filter(move |e| e.layer() == layer)
    }

    /// Number of entities per kind name
    pub fn count_by_kind(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for entity in &self.entities {
            *counts.entry(entity.kind_name()).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_entities(self) -> Vec<Entity> {
        self.entities
    }
}

impl<'a> IntoIterator for &'a Drawing {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
