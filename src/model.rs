//! Parsed service-endpoint model.
//!
//! A host materializes this model from its own service description (parsing
//! one is out of scope here) and hands it to the policy configurator, which
//! attaches features to ports. Services and ports keep their document order.

use indexmap::IndexMap;

/// A service description: named services, each with named ports.
#[derive(Debug, Clone, Default)]
pub struct Model {
    pub services: IndexMap<String, Service>,
}

impl Model {
    pub fn new() -> Self {
        Model::default()
    }

    pub fn add_service(&mut self, service: Service) {
        self.services.insert(service.name.clone(), service);
    }

    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.get(name)
    }

    /// Looks up one port of one service.
    pub fn port(&self, service: &str, port: &str) -> Option<&Port> {
        self.services.get(service)?.ports.get(port)
    }
}

#[derive(Debug, Clone)]
pub struct Service {
    pub name: String,
    pub ports: IndexMap<String, Port>,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Service {
            name: name.into(),
            ports: IndexMap::new(),
        }
    }

    pub fn add_port(&mut self, port: Port) {
        self.ports.insert(port.name.clone(), port);
    }
}

/// A service endpoint. Features are attached here by the configurator.
#[derive(Debug, Clone)]
pub struct Port {
    pub name: String,
    pub features: FeatureList,
}

impl Port {
    pub fn new(name: impl Into<String>) -> Self {
        Port {
            name: name.into(),
            features: FeatureList::default(),
        }
    }
}

/// A boolean-configured capability attached to a port, consumed by the
/// transport/serialization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Optimized binary serialization of messages on this endpoint.
    FastInfoset { enabled: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    FastInfoset,
}

impl Feature {
    pub fn id(&self) -> FeatureId {
        match self {
            Feature::FastInfoset { .. } => FeatureId::FastInfoset,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            Feature::FastInfoset { enabled } => *enabled,
        }
    }
}

/// Features of a port, at most one per [`FeatureId`].
#[derive(Debug, Clone, Default)]
pub struct FeatureList {
    features: Vec<Feature>,
}

impl FeatureList {
    pub fn new() -> Self {
        FeatureList::default()
    }

    /// Adds `feature`, replacing any existing feature of the same id.
    pub fn add(&mut self, feature: Feature) {
        match self.features.iter_mut().find(|f| f.id() == feature.id()) {
            Some(existing) => *existing = feature,
            None => self.features.push(feature),
        }
    }

    pub fn get(&self, id: FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| f.id() == id)
    }

    pub fn contains(&self, id: FeatureId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
