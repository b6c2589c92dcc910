//! Turns `{operation, caller arguments}` into a fully resolved request.
//!
//! The transformation is pure and synchronous: immutable catalog in, fresh
//! per-call value out. Every validation failure is reported here, before any
//! network activity.

use std::collections::HashSet;
use std::sync::LazyLock;

use http::Method;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use serde_json::{Map, Value};

use crate::client::Error;

use super::{CallArgs, Constraint, Operation, Param, Placement};

/// Regular expression for matching path slots in the format `{slot_name}`.
static SLOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Extracts the slot names of a path template.
pub(crate) fn slot_names(template: &str) -> HashSet<String> {
    SLOT_RE
        .captures_iter(template)
        .filter_map(|caps| caps.name("name"))
        .map(|found| found.as_str().to_string())
        .collect()
}

fn replace_path_slot(path: &str, name: &str, value: &str) -> String {
    let pattern = ["{", name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_value(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// A request ready for the dispatcher: verb, resolved path, query pairs, and
/// an optional JSON body map.
///
/// The body is `Some` exactly when the operation declares body parameters, so
/// a POST with nothing supplied still sends `{}` the way the remote expects.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedRequest {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) body: Option<Map<String, Value>>,
}

impl ResolvedRequest {
    /// Builds the request, validating every supplied argument against the
    /// operation's declared parameters.
    pub(crate) fn build(operation: &'static Operation, args: CallArgs) -> Result<Self, Error> {
        let mut path = operation.path.to_string();
        let mut unfilled = slot_names(operation.path);
        let mut query = Vec::new();
        let mut body = Map::new();
        let has_body = operation
            .params
            .iter()
            .any(|param| param.place == Placement::Body);

        for (name, value) in args {
            let Some(param) = operation.params.iter().find(|param| param.name == name) else {
                return Err(Error::UndeclaredParameter {
                    operation: operation.name,
                    name,
                });
            };

            if let Some(constraint) = param.constraint {
                check_constraint(param, constraint, &value)?;
            }

            match param.place {
                Placement::Path => {
                    let raw = scalar_to_string(param, &value)?;
                    path = replace_path_slot(&path, param.name, &encode_path_value(&raw));
                    unfilled.remove(param.name);
                }
                Placement::Query => {
                    for item in query_values(param, &value)? {
                        query.push((param.wire.to_string(), item));
                    }
                }
                Placement::Body => {
                    body.insert(param.wire.to_string(), value);
                }
            }
        }

        if !unfilled.is_empty() {
            let mut missings: Vec<String> = unfilled.into_iter().collect();
            missings.sort();
            return Err(Error::PathUnresolved {
                path: operation.path.to_string(),
                missings,
            });
        }

        Ok(Self {
            method: operation.method.clone(),
            path,
            query,
            body: has_body.then_some(body),
        })
    }
}

fn check_constraint(param: &Param, constraint: Constraint, value: &Value) -> Result<(), Error> {
    match constraint {
        Constraint::OneOf(allowed) => {
            let Some(text) = value.as_str() else {
                return Err(unsupported(param, "expected a string", value));
            };
            if !allowed.contains(&text) {
                return Err(Error::InvalidEnumValue {
                    name: param.name,
                    value: text.to_string(),
                    allowed,
                });
            }
            Ok(())
        }
        Constraint::MaxItems(max) => {
            let Some(items) = value.as_array() else {
                return Err(unsupported(param, "expected an array", value));
            };
            if items.len() > max {
                return Err(Error::BatchTooLarge {
                    name: param.name,
                    len: items.len(),
                    max,
                });
            }
            Ok(())
        }
        Constraint::AtMost(max) => {
            let Some(number) = value.as_i64() else {
                return Err(unsupported(param, "expected an integer", value));
            };
            if number > max {
                return Err(Error::ValueOutOfRange {
                    name: param.name,
                    value: number,
                    max,
                });
            }
            Ok(())
        }
    }
}

/// Stringifies a path-slot value. Only scalars are meaningful inside a path
/// segment; anything else is rejected.
fn scalar_to_string(param: &Param, value: &Value) -> Result<String, Error> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(unsupported(
            param,
            "path parameters must be scalar values",
            other,
        )),
    }
}

/// Converts a query value into its `wire=value` pairs. Arrays of scalars are
/// repeated form-style; objects and nulls are rejected.
fn query_values(param: &Param, value: &Value) -> Result<Vec<String>, Error> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| scalar_to_string(param, item))
            .collect(),
        Value::Object(_) | Value::Null => Err(unsupported(
            param,
            "query parameters must be scalars or arrays of scalars",
            value,
        )),
        other => Ok(vec![scalar_to_string(param, other)?]),
    }
}

fn unsupported(param: &Param, message: &str, value: &Value) -> Error {
    Error::UnsupportedParameterValue {
        name: param.name.to_string(),
        message: message.to_string(),
        value: value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::catalog::{self, MessageMedium, TemplateType};

    use super::*;

    fn operation(name: &str) -> &'static Operation {
        catalog::find(name).expect("a catalog entry")
    }

    #[test]
    fn should_resolve_path_slots() {
        let request = ResolvedRequest::build(
            operation("get_child_campaigns"),
            CallArgs::new().arg("campaign_id", 87),
        )
        .expect("a resolved request");

        insta::assert_snapshot!(request.path, @"/api/campaigns/recurring/87/childCampaigns");
        assert_eq!(request.method, Method::GET);
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn path_values_are_percent_encoded() {
        let request = ResolvedRequest::build(
            operation("get_user"),
            CallArgs::new().arg("email", "ada lovelace@example.com"),
        )
        .expect("a resolved request");

        insta::assert_snapshot!(request.path, @"/api/users/ada%20lovelace%40example%2Ecom");
    }

    #[test]
    fn missing_path_slot_is_an_error() {
        let result = ResolvedRequest::build(operation("get_child_campaigns"), CallArgs::new());

        let Err(Error::PathUnresolved { path, missings }) = result else {
            panic!("expected a PathUnresolved error");
        };
        assert_eq!(path, "/api/campaigns/recurring/{campaign_id}/childCampaigns");
        assert_eq!(missings, vec!["campaign_id"]);
    }

    #[test]
    fn missing_slots_are_all_reported() {
        let result = ResolvedRequest::build(operation("put_metadata_key"), CallArgs::new());

        let Err(Error::PathUnresolved { missings, .. }) = result else {
            panic!("expected a PathUnresolved error");
        };
        assert_eq!(missings, vec!["key", "table"]);
    }

    #[test]
    fn wire_names_apply_to_query_parameters() {
        let request = ResolvedRequest::build(
            operation("get_campaign_metrics"),
            CallArgs::new()
                .arg("campaign_id", 42)
                .arg("start_date_time", "2024-01-01"),
        )
        .expect("a resolved request");

        assert_eq!(
            request.query,
            vec![
                ("campaignId".to_string(), "42".to_string()),
                ("startDateTime".to_string(), "2024-01-01".to_string()),
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn array_query_values_repeat_the_wire_name() {
        let request = ResolvedRequest::build(
            operation("get_campaign_metrics"),
            CallArgs::new().arg("campaign_id", json!([1, 2, 3])),
        )
        .expect("a resolved request");

        assert_eq!(
            request.query,
            vec![
                ("campaignId".to_string(), "1".to_string()),
                ("campaignId".to_string(), "2".to_string()),
                ("campaignId".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn body_holds_exactly_the_supplied_keys_under_wire_names() {
        let request = ResolvedRequest::build(
            operation("update_user"),
            CallArgs::new()
                .arg("email", "a@b.com")
                .arg("data_fields", json!({ "plan": "pro" })),
        )
        .expect("a resolved request");

        let body = request.body.expect("a body");
        assert_eq!(
            Value::Object(body),
            json!({ "email": "a@b.com", "dataFields": { "plan": "pro" } })
        );
    }

    #[test]
    fn argument_order_does_not_change_the_body() {
        let forward = ResolvedRequest::build(
            operation("update_user"),
            CallArgs::new()
                .arg("email", "a@b.com")
                .arg("data_fields", json!({ "plan": "pro" })),
        )
        .expect("a resolved request");
        let reverse = ResolvedRequest::build(
            operation("update_user"),
            CallArgs::new()
                .arg("data_fields", json!({ "plan": "pro" }))
                .arg("email", "a@b.com"),
        )
        .expect("a resolved request");

        assert_eq!(forward.body, reverse.body);
    }

    #[test]
    fn omitted_optionals_never_reach_the_wire() {
        let request = ResolvedRequest::build(operation("create_campaign"), CallArgs::new())
            .expect("a resolved request");

        assert!(request.query.is_empty());
        assert_eq!(request.body, Some(Map::new()));
    }

    #[test]
    fn undeclared_arguments_are_rejected() {
        let result = ResolvedRequest::build(
            operation("get_lists"),
            CallArgs::new().arg("surprise", true),
        );

        let Err(Error::UndeclaredParameter { operation, name }) = result else {
            panic!("expected an UndeclaredParameter error");
        };
        assert_eq!(operation, "get_lists");
        assert_eq!(name, "surprise");
    }

    #[test]
    fn enum_constraint_accepts_members() {
        let request = ResolvedRequest::build(
            operation("get_templates"),
            CallArgs::new()
                .arg("template_type", TemplateType::Blast)
                .arg("message_medium", MessageMedium::Email),
        )
        .expect("a resolved request");

        assert_eq!(
            request.query,
            vec![
                ("templateType".to_string(), "Blast".to_string()),
                ("messageMedium".to_string(), "Email".to_string()),
            ]
        );
    }

    #[test]
    fn enum_constraint_rejects_outsiders() {
        let result = ResolvedRequest::build(
            operation("get_templates"),
            CallArgs::new().arg("template_type", "Newsletter"),
        );

        let Err(Error::InvalidEnumValue {
            name,
            value,
            allowed,
        }) = result
        else {
            panic!("expected an InvalidEnumValue error");
        };
        assert_eq!(name, "template_type");
        assert_eq!(value, "Newsletter");
        assert_eq!(allowed, TemplateType::ALLOWED);
    }

    #[test]
    fn bulk_update_rejects_oversized_batches() {
        let users: Vec<Value> = (0..51)
            .map(|index| json!({ "email": format!("user{index}@example.com") }))
            .collect();
        let result = ResolvedRequest::build(
            operation("bulk_update_users"),
            CallArgs::new().arg("users", users),
        );

        let Err(Error::BatchTooLarge { name, len, max }) = result else {
            panic!("expected a BatchTooLarge error");
        };
        assert_eq!(name, "users");
        assert_eq!(len, 51);
        assert_eq!(max, 50);
    }

    #[test]
    fn bulk_update_accepts_a_full_batch() {
        let users: Vec<Value> = (0..50)
            .map(|index| json!({ "email": format!("user{index}@example.com") }))
            .collect();
        let request = ResolvedRequest::build(
            operation("bulk_update_users"),
            CallArgs::new().arg("users", users),
        )
        .expect("a resolved request");

        let body = request.body.expect("a body");
        assert_eq!(body["users"].as_array().expect("an array").len(), 50);
    }

    #[test]
    fn event_limit_is_range_checked() {
        let result = ResolvedRequest::build(
            operation("get_events"),
            CallArgs::new().arg("email", "a@b.com").arg("limit", 500),
        );

        let Err(Error::ValueOutOfRange { name, value, max }) = result else {
            panic!("expected a ValueOutOfRange error");
        };
        assert_eq!(name, "limit");
        assert_eq!(value, 500);
        assert_eq!(max, 200);
    }

    #[test]
    fn objects_are_rejected_as_query_values() {
        let result = ResolvedRequest::build(
            operation("get_campaign_metrics"),
            CallArgs::new().arg("campaign_id", json!({ "nested": true })),
        );

        assert!(matches!(
            result,
            Err(Error::UnsupportedParameterValue { .. })
        ));
    }

    #[test]
    fn explicit_null_is_kept_in_the_body() {
        let request = ResolvedRequest::build(
            operation("update_user"),
            CallArgs::new()
                .arg("email", "a@b.com")
                .arg("data_fields", Value::Null),
        )
        .expect("a resolved request");

        let body = request.body.expect("a body");
        assert_eq!(body["dataFields"], Value::Null);
    }
}
