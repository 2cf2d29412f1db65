//! Structural validation of a parsed relation list.
//!
//! All-or-nothing: one bad element rejects the whole list.

use causenet_core::constants::IMPACT_KEY;
use causenet_core::errors::ValidationError;
use causenet_core::models::normalize_cause_id;
use causenet_core::{Impact, ImpactPolicy, RelationDescriptor, RelationRole};
use serde_json::Value;

/// Validate every element of `items` as a descriptor for `role`.
pub fn validate_relations(
    items: &[Value],
    role: RelationRole,
    policy: ImpactPolicy,
) -> Result<Vec<RelationDescriptor>, ValidationError> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| validate_one(position, item, role, policy))
        .collect()
}

fn validate_one(
    position: usize,
    item: &Value,
    role: RelationRole,
    policy: ImpactPolicy,
) -> Result<RelationDescriptor, ValidationError> {
    let object = item
        .as_object()
        .ok_or(ValidationError::ElementNotObject { position })?;

    let key = role.counterpart_key();
    let counterpart_id = match object.get(key) {
        None => return Err(ValidationError::MissingCounterpart { position, key }),
        Some(Value::String(s)) => normalize_cause_id(s),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => {
            return Err(ValidationError::InvalidCounterpart {
                position,
                key,
                found: other.to_string(),
            })
        }
    };

    let impact = Impact::from_value(object.get(IMPACT_KEY));
    if policy.requires_impact() && !impact.is_present() {
        return Err(ValidationError::MissingImpact { position });
    }

    Ok(RelationDescriptor {
        counterpart_id,
        impact,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items(v: Value) -> Vec<Value> {
        v.as_array().cloned().unwrap()
    }

    #[test]
    fn successor_list_is_normalized() {
        let list = items(json!([
            {"successor_id": "  Heart Failure ", "impact": 0.4},
            {"successor_id": "sepsis"}
        ]));
        let out =
            validate_relations(&list, RelationRole::Successor, ImpactPolicy::Lenient).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].counterpart_id, "heart failure");
        assert_eq!(out[0].impact, Impact::Numeric(0.4));
        assert_eq!(out[1].impact, Impact::Absent);
    }

    #[test]
    fn one_bad_element_rejects_the_list() {
        let list = items(json!([
            {"successor_id": "a"},
            {"predecessor_id": "b"}
        ]));
        let err =
            validate_relations(&list, RelationRole::Successor, ImpactPolicy::Lenient).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingCounterpart {
                position: 1,
                key: "successor_id"
            }
        );
    }

    #[test]
    fn role_selects_the_key() {
        let list = items(json!([{"successor_id": "a"}]));
        assert!(validate_relations(&list, RelationRole::Predecessor, ImpactPolicy::Lenient).is_err());
    }

    #[test]
    fn non_object_element_is_rejected() {
        let list = items(json!(["a"]));
        assert_eq!(
            validate_relations(&list, RelationRole::Successor, ImpactPolicy::Lenient),
            Err(ValidationError::ElementNotObject { position: 0 })
        );
    }

    #[test]
    fn strict_policy_requires_impact() {
        let list = items(json!([{"successor_id": "a", "impact": 0.2}, {"successor_id": "b"}]));
        assert_eq!(
            validate_relations(&list, RelationRole::Successor, ImpactPolicy::Strict),
            Err(ValidationError::MissingImpact { position: 1 })
        );
        // An unconvertible impact is still a present key.
        let list = items(json!([{"successor_id": "a", "impact": "n/a"}]));
        assert!(validate_relations(&list, RelationRole::Successor, ImpactPolicy::Strict).is_ok());
    }

    #[test]
    fn unusable_counterpart_value() {
        let list = items(json!([{"successor_id": null}]));
        assert!(matches!(
            validate_relations(&list, RelationRole::Successor, ImpactPolicy::Lenient),
            Err(ValidationError::InvalidCounterpart { position: 0, .. })
        ));
    }

    #[test]
    fn empty_list_is_valid() {
        assert_eq!(
            validate_relations(&[], RelationRole::Successor, ImpactPolicy::Strict),
            Ok(Vec::new())
        );
    }
}
