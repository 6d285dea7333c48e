//! Dotted-path resolution and compiled extractors

use std::marker::PhantomData;

use crate::error::ExportError;
use crate::model::{FieldKind, FieldValue, Record, Value};

/// A compiled dotted-path extractor for records of type `T`.
///
/// Resolution happens once, against static type metadata; extraction walks
/// the accessor steps per record.
pub struct Extractor<T> {
    steps: Vec<&'static str>,
    _marker: PhantomData<fn(&T) -> Value>,
}

impl<T> std::fmt::Debug for Extractor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("steps", &self.steps)
            .finish()
    }
}

/// Compile a dotted path such as `address.city` against `T`'s metadata.
///
/// Every segment is validated eagerly: unknown fields, traversal through a
/// leaf, and paths ending on a nested record all fail here rather than
/// during row materialization.
pub fn resolve<T: Record>(dotted_path: &str) -> Result<Extractor<T>, ExportError> {
    let segments: Vec<&str> = dotted_path.split('.').collect();
    let last = segments.len() - 1;

    let mut info = T::type_info();
    let mut steps = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().copied().enumerate() {
        let spec = info
            .field_spec(segment)
            .ok_or_else(|| ExportError::UnknownField {
                type_name: info.name,
                field: segment.to_string(),
            })?;
        steps.push(spec.name);

        match spec.kind {
            FieldKind::Leaf if i < last => {
                return Err(ExportError::NotNested {
                    type_name: info.name,
                    field: spec.name,
                });
            }
            FieldKind::Leaf => {}
            FieldKind::Nested(_) if i == last => {
                return Err(ExportError::NonLeafPath {
                    path: dotted_path.to_string(),
                });
            }
            FieldKind::Nested(nested) => info = nested(),
        }
    }

    Ok(Extractor {
        steps,
        _marker: PhantomData,
    })
}

impl<T: Record> Extractor<T> {
    /// Walk the compiled steps over one record.
    ///
    /// An absent nested value at any hop short-circuits to [`Value::Null`];
    /// a blank cell, not an error.
    pub fn extract(&self, record: &T) -> Value {
        let mut steps = self.steps.iter();
        let Some(first) = steps.next() else {
            return Value::Null;
        };
        let Some(mut current) = record.field(first) else {
            return Value::Null;
        };

        for step in steps {
            match current {
                FieldValue::Nested(Some(nested)) => {
                    current = match nested.field(step) {
                        Some(value) => value,
                        None => return Value::Null,
                    };
                }
                FieldValue::Nested(None) => return Value::Null,
                FieldValue::Leaf(_) => return Value::Null,
            }
        }

        match current {
            FieldValue::Leaf(value) => value,
            FieldValue::Nested(_) => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_record;

    #[derive(Clone)]
    struct City {
        name: String,
    }

    #[derive(Clone)]
    struct Address {
        street: String,
        city: City,
    }

    #[derive(Clone)]
    struct Person {
        name: String,
        address: Option<Address>,
    }

    impl_record!(City {
        name => leaf,
    });

    impl_record!(Address {
        street => leaf,
        city => nested City,
    });

    impl_record!(Person {
        name => leaf,
        address => nested_opt Address,
    });

    fn person_with_address() -> Person {
        Person {
            name: "Ada".to_string(),
            address: Some(Address {
                street: "Main".to_string(),
                city: City {
                    name: "London".to_string(),
                },
            }),
        }
    }

    #[test]
    fn test_resolve_and_extract_deep_path() {
        let extractor = resolve::<Person>("address.city.name").unwrap();
        assert_eq!(
            extractor.extract(&person_with_address()),
            Value::from("London")
        );
    }

    #[test]
    fn test_null_intermediate_yields_blank_not_error() {
        let extractor = resolve::<Person>("address.street").unwrap();
        let person = Person {
            name: "Bob".to_string(),
            address: None,
        };
        assert_eq!(extractor.extract(&person), Value::Null);
    }

    #[test]
    fn test_unknown_field_names_type_and_field() {
        let err = resolve::<Person>("address.country").unwrap_err();
        match err {
            ExportError::UnknownField { type_name, field } => {
                assert_eq!(type_name, "Address");
                assert_eq!(field, "country");
            }
            other => panic!("expected UnknownField, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_root_field() {
        let err = resolve::<Person>("salary").unwrap_err();
        assert!(matches!(
            err,
            ExportError::UnknownField {
                type_name: "Person",
                ..
            }
        ));
    }

    #[test]
    fn test_traversal_through_leaf_fails_eagerly() {
        let err = resolve::<Person>("name.length").unwrap_err();
        assert!(matches!(
            err,
            ExportError::NotNested {
                type_name: "Person",
                field: "name",
            }
        ));
    }

    #[test]
    fn test_path_ending_on_nested_record_fails_eagerly() {
        let err = resolve::<Person>("address").unwrap_err();
        assert!(matches!(err, ExportError::NonLeafPath { .. }));
    }
}
