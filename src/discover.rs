//! Automatic column discovery over nested record metadata

use crate::error::ExportError;
use crate::model::{FieldKind, Record, TypeInfo};

/// Enumerate dotted paths to every leaf field of `T`, depth-first in
/// declaration order.
///
/// Nested fields are walked through their declared type's metadata; each
/// leaf contributes one path. A cycle among nested types fails with
/// [`ExportError::CyclicStructure`] instead of recursing unboundedly.
pub fn leaf_paths<T: Record>() -> Result<Vec<String>, ExportError> {
    let mut paths = Vec::new();
    let mut visiting = Vec::new();
    walk(T::type_info(), "", &mut visiting, &mut paths)?;
    Ok(paths)
}

fn walk(
    info: &'static TypeInfo,
    prefix: &str,
    visiting: &mut Vec<*const TypeInfo>,
    paths: &mut Vec<String>,
) -> Result<(), ExportError> {
    let id = info as *const TypeInfo;
    if visiting.contains(&id) {
        return Err(ExportError::CyclicStructure {
            type_name: info.name,
        });
    }
    visiting.push(id);

    for field in info.fields {
        match field.kind {
            FieldKind::Leaf => paths.push(format!("{prefix}{}", field.name)),
            FieldKind::Nested(nested) => {
                walk(nested(), &format!("{prefix}{}.", field.name), visiting, paths)?;
            }
        }
    }

    visiting.pop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_record;

    #[derive(Clone)]
    struct City {
        name: String,
        country: String,
    }

    #[derive(Clone)]
    struct Address {
        street: String,
        city: City,
    }

    #[derive(Clone)]
    struct Employee {
        name: String,
        address: Address,
        age: i64,
    }

    impl_record!(City {
        name => leaf,
        country => leaf,
    });

    impl_record!(Address {
        street => leaf,
        city => nested City,
    });

    impl_record!(Employee {
        name => leaf,
        address => nested Address,
        age => leaf,
    });

    #[test]
    fn test_depth_first_declaration_order() {
        let paths = leaf_paths::<Employee>().unwrap();
        assert_eq!(
            paths,
            [
                "name",
                "address.street",
                "address.city.name",
                "address.city.country",
                "age",
            ]
        );
    }

    #[test]
    fn test_flat_type_yields_one_path_per_field() {
        let paths = leaf_paths::<City>().unwrap();
        assert_eq!(paths, ["name", "country"]);
    }

    struct Ping {
        tag: String,
        pong: Option<Box<Pong>>,
    }

    struct Pong {
        tag: String,
        ping: Option<Box<Ping>>,
    }

    // Box-wrapped cycles fall outside the macro's field shapes; metadata and
    // access are spelled out by hand.
    impl crate::model::Record for Ping {
        fn type_info() -> &'static TypeInfo {
            static INFO: TypeInfo = TypeInfo {
                name: "Ping",
                fields: &[
                    crate::model::FieldSpec {
                        name: "tag",
                        kind: FieldKind::Leaf,
                    },
                    crate::model::FieldSpec {
                        name: "pong",
                        kind: FieldKind::Nested(Pong::type_info),
                    },
                ],
            };
            &INFO
        }

        fn field(&self, name: &str) -> Option<crate::model::FieldValue<'_>> {
            match name {
                "tag" => Some(crate::model::FieldValue::Leaf(self.tag.clone().into())),
                "pong" => Some(crate::model::FieldValue::Nested(
                    self.pong.as_deref().map(|v| v as &dyn Record),
                )),
                _ => None,
            }
        }
    }

    impl crate::model::Record for Pong {
        fn type_info() -> &'static TypeInfo {
            static INFO: TypeInfo = TypeInfo {
                name: "Pong",
                fields: &[
                    crate::model::FieldSpec {
                        name: "tag",
                        kind: FieldKind::Leaf,
                    },
                    crate::model::FieldSpec {
                        name: "ping",
                        kind: FieldKind::Nested(Ping::type_info),
                    },
                ],
            };
            &INFO
        }

        fn field(&self, name: &str) -> Option<crate::model::FieldValue<'_>> {
            match name {
                "tag" => Some(crate::model::FieldValue::Leaf(self.tag.clone().into())),
                "ping" => Some(crate::model::FieldValue::Nested(
                    self.ping.as_deref().map(|v| v as &dyn Record),
                )),
                _ => None,
            }
        }
    }

    #[test]
    fn test_cyclic_structure_is_rejected() {
        let err = leaf_paths::<Ping>().unwrap_err();
        assert!(matches!(
            err,
            ExportError::CyclicStructure { type_name: "Ping" }
        ));
    }
}
