//! Ordered, case-configurable containers for protocol headers, plus
//! policy-driven feature configuration for parsed service-endpoint models.
//!
//! The core type is [`Headers`], a multi-valued map from header name to an
//! ordered value sequence, iterated in comparator order over names. A
//! transport feeds it from wire lines and serializes it back (see
//! [`headers`]). The [`policy`] module walks an endpoint [`Model`] and its
//! effective policies, toggling serialization features per port.

pub mod headers;
pub mod model;
pub mod policy;

pub use headers::Headers;
pub use model::{Feature, FeatureId, FeatureList, Model, Port, Service};
pub use policy::{
    configure, Assertion, AssertionSet, EndpointKey, Policy, PolicyMap,
    OPTIMIZED_FI_SERIALIZATION_ASSERTION,
};
