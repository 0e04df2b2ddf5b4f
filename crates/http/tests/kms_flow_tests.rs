//! KMS configuration screen flow tests against a mock platform.

use pylon_core::{AwsRegion, KmsConfigForm, KmsProvider, SessionCredentials};
use pylon_http::client::AuthenticatedPlatformClient;
use pylon_http::flows::{DeleteStep, KmsScreenState, KmsService, SubmitError, ViewMode};
use pylon_http::paths;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer, customer: Uuid) -> KmsService {
    let credentials =
        SessionCredentials::new(Some("api-token".into()), None, Some(customer));
    let client =
        AuthenticatedPlatformClient::from_credentials(server.uri(), &credentials).unwrap();
    KmsService::new(client)
}

async fn mock_list(server: &MockServer, customer: Uuid, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(paths::kms_configs(customer)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn initial_load_with_configs_enters_list_view() {
    let server = MockServer::start().await;
    let customer = Uuid::new_v4();
    mock_list(
        &server,
        customer,
        json!([{ "provider": "SMARTKEY", "credentials": { "base_url": "api.amer.smartkey.io" } }]),
    )
    .await;

    let service = service_for(&server, customer);
    let mut state = KmsScreenState::new();
    state.begin_load();
    state.on_loaded(service.fetch().await);

    assert_eq!(state.view, ViewMode::List);
    assert_eq!(state.configs.success().map(Vec::len), Some(1));
}

#[tokio::test]
async fn smartkey_submission_defaults_base_url_and_lands_on_list() {
    let server = MockServer::start().await;
    let customer = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(paths::kms_config(customer, KmsProvider::SmartKey)))
        .and(body_json(json!({
            "base_url": "api.amer.smartkey.io",
            "api_key": "key-material",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mock_list(&server, customer, json!([{ "provider": "SMARTKEY" }])).await;

    let form = KmsConfigForm {
        provider: Some(KmsProvider::SmartKey),
        api_key: "key-material".into(),
        ..Default::default()
    };

    let service = service_for(&server, customer);
    let mut state = KmsScreenState::new();
    state.on_loaded(Ok(Vec::new()));
    assert_eq!(state.view, ViewMode::Create);

    state.on_submitted(service.submit(&form).await.unwrap());
    assert_eq!(state.view, ViewMode::List);
}

#[tokio::test]
async fn iam_profile_submission_carries_region_only() {
    let server = MockServer::start().await;
    let customer = Uuid::new_v4();

    // Exact body match: credential keys must be absent, not null.
    Mock::given(method("POST"))
        .and(path(paths::kms_config(customer, KmsProvider::Aws)))
        .and(body_json(json!({ "AWS_REGION": "us-east-1" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    mock_list(&server, customer, json!([{ "provider": "AWS" }])).await;

    let form = KmsConfigForm {
        provider: Some(KmsProvider::Aws),
        use_iam_profile: true,
        region: Some(AwsRegion::UsEast1),
        ..Default::default()
    };

    let service = service_for(&server, customer);
    service.submit(&form).await.unwrap();
}

#[tokio::test]
async fn invalid_form_never_reaches_the_backend() {
    let server = MockServer::start().await;
    let customer = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(paths::kms_config(customer, KmsProvider::Aws)))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // AWS with IAM off and no access key: validation must block submission.
    let form = KmsConfigForm {
        provider: Some(KmsProvider::Aws),
        secret_key_id: "secret".into(),
        region: Some(AwsRegion::UsWest2),
        ..Default::default()
    };

    let service = service_for(&server, customer);
    let err = service.submit(&form).await.unwrap_err();
    assert!(matches!(err, SubmitError::Validation(_)));
}

#[tokio::test]
async fn deleting_sole_config_reverts_without_refetching() {
    let server = MockServer::start().await;
    let customer = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(paths::kms_config(customer, KmsProvider::SmartKey)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    // The list endpoint must not be hit after the delete.
    Mock::given(method("GET"))
        .and(path(paths::kms_configs(customer)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server, customer);
    let mut state = KmsScreenState::new();
    state.on_loaded(Ok(vec![pylon_http::types::KmsConfigEntry {
        provider: KmsProvider::SmartKey,
        credentials: serde_json::Value::Null,
    }]));

    let step = state.delete_step();
    service.delete(KmsProvider::SmartKey).await.unwrap();
    assert_eq!(step, DeleteStep::RevertToCreate);
    state.revert_to_create();
    assert_eq!(state.view, ViewMode::Create);
}

#[tokio::test]
async fn deleting_one_of_several_refetches_and_stays_on_list() {
    let server = MockServer::start().await;
    let customer = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(paths::kms_config(customer, KmsProvider::Aws)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(paths::kms_configs(customer)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "provider": "SMARTKEY" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server, customer);
    let mut state = KmsScreenState::new();
    state.on_loaded(Ok(vec![
        pylon_http::types::KmsConfigEntry {
            provider: KmsProvider::SmartKey,
            credentials: serde_json::Value::Null,
        },
        pylon_http::types::KmsConfigEntry {
            provider: KmsProvider::Aws,
            credentials: serde_json::Value::Null,
        },
    ]));

    assert_eq!(state.delete_step(), DeleteStep::Refetch);
    service.delete(KmsProvider::Aws).await.unwrap();
    state.on_refetched(service.fetch().await.unwrap());

    assert_eq!(state.view, ViewMode::List);
    assert_eq!(state.configs.success().map(Vec::len), Some(1));
}
