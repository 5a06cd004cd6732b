mod common;

use api::gql::build_schema;
use common::*;

#[tokio::test]
async fn schema_exposes_the_declared_surface() {
    let schema = build_schema(test_state());
    let sdl = schema.sdl();

    // Root operations
    assert!(sdl.contains("allUsers: [User!]!"), "{sdl}");
    assert!(sdl.contains("user(id: Int!): User"), "{sdl}");
    assert!(
        sdl.contains("addProfileForUser(userUniqueInput: UserUniqueInput!, bio: String): Profile!"),
        "{sdl}"
    );
    assert!(sdl.contains("signupUser(data: UserCreateInput!): User!"), "{sdl}");

    // Entity types and their cross-references
    assert!(sdl.contains("type User"), "{sdl}");
    assert!(sdl.contains("email: String!"), "{sdl}");
    assert!(sdl.contains("profile: Profile"), "{sdl}");
    assert!(sdl.contains("type Profile"), "{sdl}");
    assert!(sdl.contains("bio: String"), "{sdl}");

    // Input types
    assert!(sdl.contains("input UserUniqueInput"), "{sdl}");
    assert!(sdl.contains("input UserCreateInput"), "{sdl}");
}

#[tokio::test]
async fn profile_user_reference_is_nullable() {
    let schema = build_schema(test_state());
    let sdl = schema.sdl();

    let profile_block = sdl
        .split("type Profile")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("Profile type missing from SDL");

    assert!(profile_block.contains("user: User"), "{profile_block}");
    assert!(!profile_block.contains("user: User!"), "{profile_block}");
}

#[tokio::test]
async fn add_profile_rejects_an_empty_selector() {
    let schema = build_schema(test_state());

    let mutation = r#"
        mutation {
            addProfileForUser(userUniqueInput: {}) {
                id
            }
        }
    "#;

    // Validation fires before any storage access, so no database is needed.
    let response = execute_graphql(&schema, mutation, None).await;

    assert!(
        !response.errors.is_empty(),
        "empty selector must be rejected"
    );
    let message = &response.errors[0].message;
    assert!(message.contains("`id`"), "{message}");
    assert!(message.contains("`email`"), "{message}");
}
