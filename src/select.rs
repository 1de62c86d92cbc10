use serde::Serialize;
use tracing::{debug, error};

/// Compile-time allow-list of field names that may be selected on an
/// entity. Replaces runtime introspection with an explicit, auditable
/// declaration.
pub trait Selectable {
    const FIELDS: &'static [&'static str];
}

/// An ordered set of field names, each guaranteed to be a member of the
/// target entity's [`Selectable::FIELDS`] allow-list.
///
/// The `&'static str` entries are taken from the allow-list itself, so
/// unknown or crafted field names cannot appear in a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSelection(Vec<&'static str>);

impl FieldSelection {
    /// Resolves a raw `fields` query parameter against the allow-list of
    /// `E`.
    ///
    /// The parameter is parsed as a JSON array of strings. Entries that
    /// are members of `E::FIELDS` are kept in input order (first
    /// occurrence only); unknown entries are silently dropped. An absent
    /// or unparsable parameter yields the full wildcard set, so malformed
    /// input never fails the request.
    #[must_use]
    pub fn resolve<E: Selectable>(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::wildcard::<E>();
        };
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(requested) => {
                let mut names: Vec<&'static str> = Vec::with_capacity(requested.len());
                for name in &requested {
                    if let Some(field) = E::FIELDS.iter().copied().find(|f| *f == name.as_str()) {
                        if !names.contains(&field) {
                            names.push(field);
                        }
                    }
                }
                Self(names)
            }
            Err(err) => {
                match err.classify() {
                    serde_json::error::Category::Syntax
                    | serde_json::error::Category::Eof
                    | serde_json::error::Category::Data => {
                        debug!(error = %err, "malformed fields parameter, selecting wildcard");
                    }
                    category => {
                        error!(error = %err, ?category, "unexpected fields parameter failure");
                    }
                }
                Self::wildcard::<E>()
            }
        }
    }

    /// The full allow-list of `E`, in declaration order.
    #[must_use]
    pub fn wildcard<E: Selectable>() -> Self {
        Self(E::FIELDS.to_vec())
    }

    pub fn names(&self) -> &[&'static str] {
        &self.0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|f| *f == name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    /// Projects a JSON object onto the selection, keeping only selected
    /// keys. Non-object values are returned unchanged.
    #[must_use]
    pub fn project(&self, value: &serde_json::Value) -> serde_json::Value {
        match value.as_object() {
            Some(object) => serde_json::Value::Object(
                object
                    .iter()
                    .filter(|(key, _)| self.contains(key))
                    .map(|(key, val)| (key.clone(), val.clone()))
                    .collect(),
            ),
            None => value.clone(),
        }
    }
}

impl IntoIterator for FieldSelection {
    type Item = &'static str;
    type IntoIter = std::vec::IntoIter<&'static str>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
