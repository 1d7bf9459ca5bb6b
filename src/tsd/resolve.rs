//! Include resolution: fixed-point propagation of inherited events.
//!
//! The include relation is a restricted single-inheritance-plus-event-mixin
//! model over component names. Resolution mutates every schema's event map
//! so it becomes the component's effective event set: its own declared
//! events merged with everything contributed, directly or transitively, by
//! its includes.

use std::collections::BTreeMap;

use tracing::debug;

use super::model::{EventSpec, SchemaSet};
use crate::error::GenerateError;

/// Propagate inherited events through the include relation until no
/// component gains new events.
///
/// Breadth-first over the include graph: the frontier starts at the
/// universal base plus every component without includes (their event sets
/// are already effective). On each pass, every component whose includes
/// intersect the frontier merges the intersected includes' events into its
/// own — own-declared events win on name collision — and joins the next
/// frontier. A component therefore only inherits from a supertype after that
/// supertype has itself been resolved, so a chain of depth `d` settles in
/// `d` passes.
///
/// The include relation must be acyclic; a cycle keeps the frontier occupied
/// past the theoretical maximum pass count and is rejected with
/// [`GenerateError::IncludeCycle`].
pub fn resolve_includes(set: &mut SchemaSet, base: &str) -> Result<(), GenerateError> {
    let mut frontier: Vec<String> = vec![base.to_string()];
    frontier.extend(
        set.iter()
            .filter(|schema| schema.includes.is_empty())
            .map(|schema| schema.name.clone()),
    );

    let mut passes = 0usize;
    while !frontier.is_empty() {
        passes += 1;
        if passes > set.len() + 1 {
            return Err(GenerateError::IncludeCycle(frontier.remove(0)));
        }
        debug!(pass = passes, frontier = ?frontier, "Resolving includes.");

        let mut next = Vec::new();
        for idx in 0..set.len() {
            let (name, hits) = {
                // Index loop: the set is both read (included schemas) and
                // mutated (merge target) within one pass.
                let Some(schema) = set.get_index(idx) else {
                    continue;
                };
                let hits: Vec<String> = schema
                    .includes
                    .iter()
                    .filter(|include| frontier.contains(include))
                    .cloned()
                    .collect();
                (schema.name.clone(), hits)
            };
            if hits.is_empty() {
                continue;
            }

            let mut inherited: Vec<BTreeMap<String, EventSpec>> = Vec::with_capacity(hits.len());
            for include in &hits {
                let contributor =
                    set.get(include).ok_or_else(|| GenerateError::UnknownInclude {
                        component: name.clone(),
                        include: include.clone(),
                    })?;
                inherited.push(contributor.events.clone());
            }

            if let Some(schema) = set.get_index_mut(idx) {
                for events in inherited {
                    for (event, spec) in events {
                        schema.events.entry(event).or_insert(spec);
                    }
                }
            }
            next.push(name);
        }
        frontier = next;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::tsd::model::{ComponentSchema, Exposure, Parameter, UNIVERSAL_BASE};

    fn event(param: &str) -> EventSpec {
        EventSpec {
            parameters: vec![Parameter {
                name: param.to_string(),
                ty: "any".to_string(),
                description: None,
            }],
        }
    }

    fn schema(name: &str, includes: &[&str], events: &[(&str, &str)]) -> ComponentSchema {
        ComponentSchema {
            name: name.to_string(),
            exposure: Exposure::Class,
            description: None,
            includes: includes.iter().map(|s| s.to_string()).collect(),
            fields: BTreeMap::new(),
            methods: BTreeMap::new(),
            properties: BTreeMap::new(),
            events: events.iter().map(|(n, p)| (n.to_string(), event(p))).collect(),
        }
    }

    #[test]
    fn test_transitive_event_inheritance() {
        let mut set = SchemaSet::new();
        set.insert(schema("A", &[], &[("x", "a")])).unwrap();
        set.insert(schema("B", &["A"], &[("y", "b")])).unwrap();
        set.insert(schema("C", &["B"], &[("z", "c")])).unwrap();

        resolve_includes(&mut set, UNIVERSAL_BASE).unwrap();

        let c = set.get("C").unwrap();
        let names: Vec<_> = c.events.keys().map(String::as_str).collect();
        assert_eq!(names, ["x", "y", "z"]);
    }

    #[test]
    fn test_own_declaration_wins_over_inherited() {
        let mut set = SchemaSet::new();
        set.insert(schema("A", &[], &[("x", "fromA")])).unwrap();
        set.insert(schema("B", &["A"], &[])).unwrap();
        set.insert(schema("C", &["B"], &[("x", "fromC")])).unwrap();

        resolve_includes(&mut set, UNIVERSAL_BASE).unwrap();

        let c = set.get("C").unwrap();
        assert_eq!(c.events["x"].parameters[0].name, "fromC");
        // The intermediate component still carries the inherited definition.
        let b = set.get("B").unwrap();
        assert_eq!(b.events["x"].parameters[0].name, "fromA");
    }

    #[test]
    fn test_propagation_rooted_at_universal_base() {
        let mut set = SchemaSet::new();
        set.insert(schema(UNIVERSAL_BASE, &[], &[("dispose", "n")])).unwrap();
        set.insert(schema("Widget", &[UNIVERSAL_BASE], &[("tap", "n")])).unwrap();
        set.insert(schema("Button", &[UNIVERSAL_BASE, "Widget"], &[])).unwrap();

        resolve_includes(&mut set, UNIVERSAL_BASE).unwrap();

        let button = set.get("Button").unwrap();
        assert!(button.events.contains_key("dispose"));
        assert!(button.events.contains_key("tap"));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let mut set = SchemaSet::new();
        set.insert(schema(UNIVERSAL_BASE, &[], &[])).unwrap();
        set.insert(schema("A", &[UNIVERSAL_BASE, "B"], &[])).unwrap();
        set.insert(schema("B", &["A"], &[])).unwrap();

        let err = resolve_includes(&mut set, UNIVERSAL_BASE).unwrap_err();
        assert!(matches!(err, GenerateError::IncludeCycle(_)));
    }

    #[test]
    fn test_missing_universal_base_definition() {
        let mut set = SchemaSet::new();
        set.insert(schema("Widget", &[UNIVERSAL_BASE], &[])).unwrap();

        let err = resolve_includes(&mut set, UNIVERSAL_BASE).unwrap_err();
        match err {
            GenerateError::UnknownInclude { component, include } => {
                assert_eq!(component, "Widget");
                assert_eq!(include, UNIVERSAL_BASE);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
