//! Document reconciliation
//!
//! The persisted document may lag the current content schema: fields are
//! added over time and older saves simply do not have them. Reconciliation
//! merges whatever was stored over the canonical default so every field the
//! schema declares is present before validation and rendering. It runs on
//! every read; schema drift is a permanent condition, not a one-time
//! migration.
//!
//! Merge rules:
//! - keys only in the default keep the default value, nested values included
//! - keys where both sides are objects are merged recursively
//! - a stored array replaces the default array only when it is non-empty;
//!   an accidentally-emptied list never erases default content
//! - any other stored value wins at the leaf
//! - keys only in the stored document are carried through untouched
//!
//! The function cannot fail: a stored document that is not an object at all
//! yields the default.

use serde_json::{Map, Value};

/// Merge a persisted document over the canonical default
pub fn reconcile(default: &Value, source: &Value) -> Value {
    match (default, source) {
        (Value::Object(default_map), Value::Object(source_map)) => {
            let mut out = Map::with_capacity(default_map.len());

            // Canonical key order comes from the default document
            for (key, default_value) in default_map {
                let merged = match source_map.get(key) {
                    Some(source_value) => merge_value(default_value, source_value),
                    None => default_value.clone(),
                };
                out.insert(key.clone(), merged);
            }

            // Unknown keys from older or newer schema versions are kept
            for (key, source_value) in source_map {
                if !default_map.contains_key(key) {
                    out.insert(key.clone(), source_value.clone());
                }
            }

            Value::Object(out)
        }
        // Absent or unusable stored document: the default stands
        _ => default.clone(),
    }
}

fn merge_value(default: &Value, source: &Value) -> Value {
    match (default, source) {
        (Value::Object(_), Value::Object(_)) => reconcile(default, source),
        (_, Value::Array(items)) => {
            if items.is_empty() {
                default.clone()
            } else {
                source.clone()
            }
        }
        // Scalars, nulls and shape mismatches: prefer the stored value
        _ => source.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::default_document;
    use serde_json::json;

    #[test]
    fn test_empty_source_yields_default() {
        let default = default_document();
        assert_eq!(reconcile(&default, &json!({})), default);
    }

    #[test]
    fn test_absent_source_yields_default() {
        let default = default_document();
        assert_eq!(reconcile(&default, &Value::Null), default);
        assert_eq!(reconcile(&default, &json!("not a document")), default);
    }

    #[test]
    fn test_every_default_field_survives() {
        let default = default_document();
        let partial = json!({ "artistName": "Someone Else" });
        let merged = reconcile(&default, &partial);

        let merged_obj = merged.as_object().unwrap();
        for key in default.as_object().unwrap().keys() {
            assert!(merged_obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(merged["artistName"], json!("Someone Else"));
        assert_eq!(merged["artistTagline"], default["artistTagline"]);
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let default = default_document();
        let partial = json!({ "heroImage": { "imageUrl": "https://cdn.example.com/h.jpg" } });
        let merged = reconcile(&default, &partial);

        assert_eq!(
            merged["heroImage"]["imageUrl"],
            json!("https://cdn.example.com/h.jpg")
        );
        // imageHint was not stored, so the default one is filled in
        assert_eq!(merged["heroImage"]["imageHint"], default["heroImage"]["imageHint"]);
    }

    #[test]
    fn test_non_empty_list_wins_verbatim() {
        let default = default_document();
        let stored_dates = json!([
            { "date": "JAN 01, 2026", "venue": "Town Hall", "city": "Oslo",
              "ticketUrl": "https://tickets.example.com" }
        ]);
        let merged = reconcile(&default, &json!({ "tourDates": stored_dates.clone() }));
        assert_eq!(merged["tourDates"], stored_dates);
    }

    #[test]
    fn test_empty_list_keeps_default() {
        let default = default_document();
        let merged = reconcile(&default, &json!({ "tourDates": [] }));
        assert_eq!(merged["tourDates"], default["tourDates"]);
    }

    #[test]
    fn test_scalar_leaf_prefers_source() {
        let default = default_document();
        // A null or mistyped leaf is still the stored truth; the validator
        // reports it, reconciliation does not rewrite it.
        let merged = reconcile(&default, &json!({ "artistTagline": null, "pressKitUrl": 7 }));
        assert_eq!(merged["artistTagline"], Value::Null);
        assert_eq!(merged["pressKitUrl"], json!(7));
    }

    #[test]
    fn test_unknown_keys_are_kept() {
        let default = default_document();
        let merged = reconcile(&default, &json!({ "legacyField": {"a": 1} }));
        assert_eq!(merged["legacyField"], json!({"a": 1}));
    }

    #[test]
    fn test_output_does_not_alias_default() {
        let default = default_document();
        let mut merged = reconcile(&default, &json!({}));
        merged["heroImage"]["imageUrl"] = json!("mutated");
        // the default is rebuilt per call and unaffected by edits to merges
        assert_ne!(default_document()["heroImage"]["imageUrl"], json!("mutated"));
    }

    #[test]
    fn test_arbitrary_shapes_do_not_panic() {
        let default = default_document();
        for weird in [
            json!([1, 2, 3]),
            json!(true),
            json!({ "heroImage": "just a string" }),
            json!({ "infoCards": { "not": "a list" } }),
            json!({ "contact": [] }),
        ] {
            let _ = reconcile(&default, &weird);
        }
    }
}
