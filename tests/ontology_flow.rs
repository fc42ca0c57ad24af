//! End-to-end flows against a mock Foundry host.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use palantir::config::{Chain, ConfigFile, EnvVar, Provider, Static};
use palantir::{AuthToken, Context, ErrorKind, ObjectsClient, ResourceIdentifier};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Opt-in request logging, driven by `RUST_LOG`. Idempotent across tests.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The client under test is blocking, so wiremock runs on its own runtime.
fn start_server() -> (tokio::runtime::Runtime, MockServer) {
    init_tracing();
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap();
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

fn mount(rt: &tokio::runtime::Runtime, server: &MockServer, mock: Mock) {
    rt.block_on(mock.mount(server));
}

fn ontologies_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/api/v1/ontologies"))
        .and(header("Authorization", "Bearer flow-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": [
                {
                    "rid": "ri.ontology.main.ontology.1",
                    "displayName": "Flight operations",
                    "description": "Aircraft and airports"
                },
                {
                    "rid": "ri.ontology.main.ontology.2",
                    "displayName": "Maintenance",
                    "description": "Service records"
                }
            ]
        })))
}

#[test]
fn walks_object_types_across_pages_from_the_default_ontology() {
    let (rt, server) = start_server();
    mount(&rt, &server, ontologies_mock());

    let types_path = "/api/v1/ontologies/ri.ontology.main.ontology.1/objectTypes";
    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path(types_path))
            .and(query_param_is_missing("pageToken"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {
                        "apiName": "Aircraft",
                        "description": "All aircraft",
                        "primaryKey": ["tailNumber"],
                        "properties": {
                            "tailNumber": {"baseType": "String"},
                            "capacity": {"baseType": "Integer", "description": "Seats"}
                        },
                        "rid": "ri.ontology.main.object-type.1"
                    },
                    {
                        "apiName": "Airport",
                        "properties": {"iata": {"baseType": "String"}},
                        "rid": "ri.ontology.main.object-type.2"
                    }
                ],
                "nextPageToken": "page-2"
            }))),
    );
    // An empty page that still carries a token must not end the walk.
    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path(types_path))
            .and(query_param("pageToken", "page-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [],
                "nextPageToken": "page-3"
            }))),
    );
    mount(
        &rt,
        &server,
        Mock::given(method("GET"))
            .and(path(types_path))
            .and(query_param("pageToken", "page-3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "apiName": "Route",
                    "properties": {},
                    "rid": "ri.ontology.main.object-type.3"
                }],
                "nextPageToken": null
            }))),
    );

    let ctx = Context::builder()
        .hostname(server.uri())
        .token("flow-token")
        .ontology_rid("ri.ontology.main.ontology.1")
        .build();
    let client = ObjectsClient::new(ctx).unwrap();

    let ontology = client.get_default_ontology().unwrap();
    assert_eq!(ontology.display_name(), "Flight operations");

    let names: Vec<String> = ontology
        .list_object_types()
        .unwrap()
        .map(|object_type| Ok::<_, palantir::Error>(object_type?.api_name().to_string()))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names, vec!["Aircraft", "Airport", "Route"]);
}

#[test]
fn resolves_configuration_through_a_fallback_chain() {
    let (rt, server) = start_server();
    mount(&rt, &server, ontologies_mock());

    // Hostname comes from a config file, the token from an env var that is
    // unset so the chain falls through to the file as well.
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config");
    std::fs::write(
        &config_path,
        format!(
            "[default]\nhostname = \"{}\"\ntoken = \"flow-token\"\n",
            server.uri()
        ),
    )
    .unwrap();

    let hostname: Arc<dyn Provider<String>> = Arc::new(Chain::new(vec![
        Box::new(EnvVar::new("PALANTIR_FLOW_TEST_UNSET_HOSTNAME")),
        Box::new(ConfigFile::with_path("hostname", &config_path)),
    ]));
    let auth: Arc<dyn Provider<AuthToken>> = Arc::new(Chain::new(vec![
        Box::new(EnvVar::new("PALANTIR_FLOW_TEST_UNSET_TOKEN")),
        Box::new(ConfigFile::with_path("token", &config_path)),
    ]));
    let ontology_rid: Arc<dyn Provider<String>> =
        Arc::new(Static::new("ri.ontology.main.ontology.2".to_string()));

    let client = ObjectsClient::new(Context::new(hostname, auth, ontology_rid)).unwrap();
    let ontology = client.get_default_ontology().unwrap();
    assert_eq!(ontology.display_name(), "Maintenance");
}

#[test]
fn explicit_lookup_distinguishes_not_found_from_missing_configuration() {
    let (rt, server) = start_server();
    mount(&rt, &server, ontologies_mock());

    let ctx = Context::builder()
        .hostname(server.uri())
        .token("flow-token")
        .build();
    let client = ObjectsClient::new(ctx).unwrap();

    let hit = client.get_ontology("ri.ontology.main.ontology.2").unwrap();
    let rid: ResourceIdentifier = "ri.ontology.main.ontology.2".parse().unwrap();
    assert_eq!(hit.rid(), &rid);

    let miss = client.get_ontology("ri.x.y.z.nonexistent").unwrap_err();
    assert_eq!(miss.kind(), ErrorKind::NotFound);

    // Absent default RID: hermetic context with an empty chain.
    let ctx = Context::new(
        Arc::new(Static::new(server.uri())),
        Arc::new(Static::new(AuthToken::from("flow-token"))),
        Arc::new(Chain::new(vec![])),
    );
    let client = ObjectsClient::new(ctx).unwrap();
    let err = client.get_default_ontology().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingConfiguration);
}
