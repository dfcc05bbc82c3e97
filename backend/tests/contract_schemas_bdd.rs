//! Behaviour tests for the contract schemas published in the OpenAPI document.
//!
//! These tests verify that response contracts never publish secrets, that
//! request constraints are documented, and that capability registration
//! declares no identity fields.
use std::sync::Mutex;

use capabilities::doc::ApiDoc;
use capabilities::test_support::openapi::{
    component_schema, get_property, property_names, unwrap_object_schema,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::json;
use utoipa::OpenApi;
use utoipa::openapi::schema::Object;

#[derive(Default)]
struct OpenApiWorld {
    document: Option<utoipa::openapi::OpenApi>,
}

impl std::fmt::Debug for OpenApiWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenApiWorld")
            .field("document", &self.document.as_ref().map(|_| "<OpenApi>"))
            .finish()
    }
}

#[fixture]
fn world() -> Mutex<OpenApiWorld> {
    Mutex::new(OpenApiWorld::default())
}

// Note: utoipa replaces :: with . in schema names
const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
const ERROR_CODE_SCHEMA_NAME: &str = "crate.domain.ErrorCode";
const REGISTRATION_SCHEMA_NAME: &str = "crate.domain.UserRegistration";
const CAPABILITY_SCHEMA_NAME: &str = "crate.domain.CapabilityRegistration";
const USER_RESPONSE_SCHEMA_NAME: &str = "UserResponse";
const TOKEN_RESPONSE_SCHEMA_NAME: &str = "TokenResponse";

/// Resolve a registered component to its object schema and invoke `f`.
fn with_component<F>(world: &Mutex<OpenApiWorld>, schema_name: &str, f: F)
where
    F: FnOnce(&Object),
{
    let world = world.lock().expect("world lock");
    let doc = world.document.as_ref().expect("document generated");
    f(unwrap_object_schema(
        component_schema(doc, schema_name),
        schema_name,
    ));
}

fn with_registration_property<F>(world: &Mutex<OpenApiWorld>, property_name: &str, f: F)
where
    F: FnOnce(&Object),
{
    with_component(world, REGISTRATION_SCHEMA_NAME, |obj| {
        f(unwrap_object_schema(
            get_property(obj, property_name),
            property_name,
        ));
    });
}

fn assert_schema_registered(world: &Mutex<OpenApiWorld>, schema_name: &str, label: &str) {
    let world = world.lock().expect("world lock");
    let doc = world.document.as_ref().expect("document generated");
    let components = doc.components.as_ref().expect("components present");

    assert!(
        components.schemas.contains_key(schema_name),
        "{label} schema wrapper should be registered"
    );
}

#[given("the OpenAPI document is generated")]
fn generate_openapi_document(world: &Mutex<OpenApiWorld>) {
    let mut world = world.lock().expect("world lock");
    world.document = Some(ApiDoc::openapi());
}

#[when("the document is inspected")]
fn inspect_document(world: &Mutex<OpenApiWorld>) {
    let world = world.lock().expect("world lock");
    assert!(world.document.is_some(), "document should be generated");
}

#[then("the UserResponse schema declares no password property")]
fn user_response_has_no_password(world: &Mutex<OpenApiWorld>) {
    with_component(world, USER_RESPONSE_SCHEMA_NAME, |obj| {
        assert!(!obj.properties.contains_key("password"));
        assert_eq!(
            property_names(obj),
            ["created_at", "email", "first_name", "last_name"]
        );
    });
}

#[then("the TokenResponse token_type defaults to bearer")]
fn token_type_defaults_to_bearer(world: &Mutex<OpenApiWorld>) {
    with_component(world, TOKEN_RESPONSE_SCHEMA_NAME, |obj| {
        let token_type = unwrap_object_schema(get_property(obj, "token_type"), "token_type");
        assert_eq!(token_type.default, Some(json!("bearer")));
    });
}

#[then("the UserRegistration password has minimum length {min}")]
fn registration_password_min_length(world: &Mutex<OpenApiWorld>, min: usize) {
    with_registration_property(world, "password", |password| {
        assert_eq!(password.min_length, Some(min));
    });
}

#[then("the UserRegistration first_name has minimum length {min}")]
fn registration_first_name_min_length(world: &Mutex<OpenApiWorld>, min: usize) {
    with_registration_property(world, "first_name", |first_name| {
        assert_eq!(first_name.min_length, Some(min));
    });
}

#[then("the UserRegistration email has email format")]
fn registration_email_format(world: &Mutex<OpenApiWorld>) {
    with_registration_property(world, "email", |email| {
        let format = serde_json::to_value(&email.format).expect("format serialises");
        assert_eq!(format, json!("email"));
    });
}

#[then("the CapabilityRegistration schema declares no properties")]
fn capability_schema_is_empty(world: &Mutex<OpenApiWorld>) {
    with_component(world, CAPABILITY_SCHEMA_NAME, |obj| {
        assert!(
            obj.properties.is_empty(),
            "capability registration must not declare identity fields"
        );
    });
}

#[then("the components section contains the Error schema wrapper")]
fn contains_error_schema(world: &Mutex<OpenApiWorld>) {
    assert_schema_registered(world, ERROR_SCHEMA_NAME, "Error");
}

#[then("the components section contains the ErrorCode schema wrapper")]
fn contains_error_code_schema(world: &Mutex<OpenApiWorld>) {
    assert_schema_registered(world, ERROR_CODE_SCHEMA_NAME, "ErrorCode");
}

#[scenario(
    path = "tests/features/contract_schemas.feature",
    name = "Response contracts never publish a password"
)]
fn response_contracts_never_publish_a_password(world: Mutex<OpenApiWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contract_schemas.feature",
    name = "Registration constraints are documented"
)]
fn registration_constraints_are_documented(world: Mutex<OpenApiWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contract_schemas.feature",
    name = "Capability registration carries no identity"
)]
fn capability_registration_carries_no_identity(world: Mutex<OpenApiWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contract_schemas.feature",
    name = "Errors publish the validation code set"
)]
fn errors_publish_the_validation_code_set(world: Mutex<OpenApiWorld>) {
    drop(world);
}
