//! Test utilities for the capabilities crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or when the `test-support` feature is enabled.

pub mod openapi {
    //! OpenAPI schema traversal helpers.
    //!
    //! Resolve `RefOr<Schema>` wrappers to concrete `Object` schemas, panicking
    //! with a diagnostic when the shape is not what a test expects.

    use utoipa::openapi::schema::{Object, Schema};
    use utoipa::openapi::{OpenApi, RefOr};

    /// Look up a registered component schema by name.
    pub fn component_schema<'a>(doc: &'a OpenApi, name: &str) -> &'a RefOr<Schema> {
        let Some(components) = doc.components.as_ref() else {
            panic!("document has no components section");
        };
        match components.schemas.get(name) {
            Some(schema) => schema,
            None => panic!("component schema '{name}' is not registered"),
        }
    }

    /// Extract an `Object` schema, panicking if it is anything else.
    pub fn unwrap_object_schema<'a>(schema: &'a RefOr<Schema>, name: &str) -> &'a Object {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj,
            RefOr::Ref(reference) => panic!(
                "schema '{name}' is a $ref to '{}'; resolve the reference first",
                reference.ref_location
            ),
            RefOr::T(Schema::Array(_)) => panic!("schema '{name}' is an Array, not an Object"),
            _ => panic!("schema '{name}' is a combinator or unexpected type"),
        }
    }

    /// Get a property from an Object schema by name.
    pub fn get_property<'a>(obj: &'a Object, field: &str) -> &'a RefOr<Schema> {
        match obj.properties.get(field) {
            Some(property) => property,
            None => panic!("property '{field}' not found"),
        }
    }

    /// Sorted property names declared by an Object schema.
    pub fn property_names(obj: &Object) -> Vec<&str> {
        let mut names: Vec<&str> = obj.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
