//! Record metadata and field access protocol

use super::value::Value;

/// Static metadata for one record type.
#[derive(Debug)]
pub struct TypeInfo {
    /// Type name used in diagnostics.
    pub name: &'static str,
    /// Declared fields in declaration order.
    pub fields: &'static [FieldSpec],
}

impl TypeInfo {
    /// Look up a field by name.
    pub fn field_spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One declared field of a record type.
#[derive(Debug)]
pub struct FieldSpec {
    /// Field name as it appears in dotted paths.
    pub name: &'static str,
    /// Leaf or nested classification.
    pub kind: FieldKind,
}

/// Classification of a field's declared type.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Atomic property; its value converts directly to a cell payload.
    Leaf,
    /// Nested record; the function yields the nested type's metadata.
    ///
    /// A function pointer rather than a direct reference, so mutually
    /// recursive record types remain representable.
    Nested(fn() -> &'static TypeInfo),
}

/// A field value produced by [`Record::field`].
pub enum FieldValue<'a> {
    /// Leaf payload, already converted.
    Leaf(Value),
    /// Nested record; `None` marks an absent optional substructure.
    Nested(Option<&'a dyn Record>),
}

/// Uniform field access protocol for exportable record types.
///
/// Implement by hand or with [`impl_record!`](crate::impl_record). The
/// metadata side drives path resolution and column discovery; the accessor
/// side drives per-record extraction.
pub trait Record {
    /// Static field metadata for this type.
    fn type_info() -> &'static TypeInfo
    where
        Self: Sized;

    /// Read one declared field by name.
    ///
    /// Returns `None` for names that are not declared fields.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Implement [`Record`] for a struct by listing its fields.
///
/// Each field is declared as `leaf` (converts directly to a cell value via
/// `Into<Value>`), `nested Ty` (a further record), or `nested_opt Ty`
/// (an `Option`al further record). Declaration order here is the column
/// order discovery produces.
#[macro_export]
macro_rules! impl_record {
    ($ty:ident { $($field:ident => $kind:ident $($nested:ty)?),+ $(,)? }) => {
        impl $crate::model::Record for $ty {
            fn type_info() -> &'static $crate::model::TypeInfo {
                static INFO: $crate::model::TypeInfo = $crate::model::TypeInfo {
                    name: stringify!($ty),
                    fields: &[
                        $($crate::impl_record!(@spec $field, $kind $($nested)?)),+
                    ],
                };
                &INFO
            }

            fn field(&self, name: &str) -> Option<$crate::model::FieldValue<'_>> {
                match name {
                    $(stringify!($field) => {
                        Some($crate::impl_record!(@access self, $field, $kind $($nested)?))
                    })+
                    _ => None,
                }
            }
        }
    };

    (@spec $field:ident, leaf) => {
        $crate::model::FieldSpec {
            name: stringify!($field),
            kind: $crate::model::FieldKind::Leaf,
        }
    };
    (@spec $field:ident, nested $nested:ty) => {
        $crate::model::FieldSpec {
            name: stringify!($field),
            kind: $crate::model::FieldKind::Nested(
                <$nested as $crate::model::Record>::type_info,
            ),
        }
    };
    (@spec $field:ident, nested_opt $nested:ty) => {
        $crate::model::FieldSpec {
            name: stringify!($field),
            kind: $crate::model::FieldKind::Nested(
                <$nested as $crate::model::Record>::type_info,
            ),
        }
    };

    (@access $this:ident, $field:ident, leaf) => {
        $crate::model::FieldValue::Leaf($crate::model::Value::from($this.$field.clone()))
    };
    (@access $this:ident, $field:ident, nested $nested:ty) => {
        $crate::model::FieldValue::Nested(Some(&$this.$field as &dyn $crate::model::Record))
    };
    (@access $this:ident, $field:ident, nested_opt $nested:ty) => {
        $crate::model::FieldValue::Nested(
            $this.$field.as_ref().map(|v| v as &dyn $crate::model::Record),
        )
    };
}
