//! Already-parsed policy metadata attached to service endpoints.
//!
//! A policy is a set of alternatives, each an ordered list of assertions with
//! string attributes. Policies are scoped to endpoints through a
//! [`PolicyMap`] keyed by (service, port). Evaluating policy grammar is out
//! of scope; these types hold the materialized result for the configurator
//! in [`configure`] to walk.

use indexmap::IndexMap;
use serde::Deserialize;

mod configure;

pub use configure::{configure, OPTIMIZED_FI_SERIALIZATION_ASSERTION};

/// One declarative requirement inside a policy alternative.
#[derive(Debug, Clone, Deserialize)]
pub struct Assertion {
    pub name: String,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
}

impl Assertion {
    pub fn new(name: impl Into<String>) -> Self {
        Assertion {
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// One policy alternative: the assertions that hold together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssertionSet {
    #[serde(default)]
    pub assertions: Vec<Assertion>,
}

impl AssertionSet {
    pub fn new(assertions: Vec<Assertion>) -> Self {
        AssertionSet { assertions }
    }
}

/// The effective policy of an endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub alternatives: Vec<AssertionSet>,
}

impl Policy {
    pub fn new(alternatives: Vec<AssertionSet>) -> Self {
        Policy { alternatives }
    }

    /// Whether any alternative carries an assertion with this name.
    pub fn contains(&self, assertion_name: &str) -> bool {
        self.alternatives
            .iter()
            .flat_map(|set| &set.assertions)
            .any(|assertion| assertion.name == assertion_name)
    }
}

/// Scope key of an endpoint policy: the owning service and port names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct EndpointKey {
    pub service: String,
    pub port: String,
}

impl EndpointKey {
    pub fn new(service: impl Into<String>, port: impl Into<String>) -> Self {
        EndpointKey {
            service: service.into(),
            port: port.into(),
        }
    }
}

/// Effective policies keyed by endpoint, in attachment order.
#[derive(Debug, Clone, Default)]
pub struct PolicyMap {
    endpoints: IndexMap<EndpointKey, Policy>,
}

impl PolicyMap {
    pub fn new() -> Self {
        PolicyMap::default()
    }

    pub fn insert(&mut self, key: EndpointKey, policy: Policy) {
        self.endpoints.insert(key, policy);
    }

    pub fn endpoint_policy(&self, key: &EndpointKey) -> Option<&Policy> {
        self.endpoints.get(key)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl FromIterator<(EndpointKey, Policy)> for PolicyMap {
    fn from_iter<I: IntoIterator<Item = (EndpointKey, Policy)>>(iter: I) -> Self {
        PolicyMap {
            endpoints: iter.into_iter().collect(),
        }
    }
}
