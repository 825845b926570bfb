//! Policy-driven feature configuration for service endpoints.

use log::debug;

use crate::model::{Feature, Model};

use super::{EndpointKey, PolicyMap};

/// Name of the assertion that toggles optimized binary serialization.
pub const OPTIMIZED_FI_SERIALIZATION_ASSERTION: &str = "OptimizedFastInfosetSerialization";

const ENABLED_ATTRIBUTE: &str = "enabled";

/// Scans endpoint policies and attaches serialization features to ports.
///
/// For every port of every service, the endpoint's effective policy is looked
/// up; when it carries an [`OPTIMIZED_FI_SERIALIZATION_ASSERTION`] assertion,
/// every alternative is walked and each matching assertion with an `enabled`
/// attribute attaches [`Feature::FastInfoset`] to the port. A missing policy,
/// assertion or attribute is a no-op. When several assertions match, the last
/// one wins, since a port holds at most one feature per id.
pub fn configure(model: &mut Model, policies: &PolicyMap) {
    for service in model.services.values_mut() {
        let service_name = &service.name;
        for port in service.ports.values_mut() {
            let key = EndpointKey::new(service_name.as_str(), port.name.as_str());
            let Some(policy) = policies.endpoint_policy(&key) else {
                continue;
            };
            if !policy.contains(OPTIMIZED_FI_SERIALIZATION_ASSERTION) {
                continue;
            }

            for alternative in &policy.alternatives {
                for assertion in &alternative.assertions {
                    if assertion.name != OPTIMIZED_FI_SERIALIZATION_ASSERTION {
                        continue;
                    }
                    let Some(value) = assertion.attribute(ENABLED_ATTRIBUTE) else {
                        continue;
                    };
                    let enabled = parse_enabled(value);
                    debug!(
                        "attaching fast infoset feature to {}/{} (enabled={})",
                        service_name, port.name, enabled
                    );
                    port.features.add(Feature::FastInfoset { enabled });
                }
            }
        }
    }
}

// Locale-independent: trimmed, ASCII case-insensitive "true" is true,
// anything else (including malformed text) is false.
fn parse_enabled(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
