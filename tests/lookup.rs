// End-to-end tests for the `lookup` and `init` commands.
// The lookup endpoint is replaced by a wiremock server serving the
// sandbox payloads, and the config file lives in a temp directory.
use std::path::PathBuf;

use tempfile::TempDir;
use whatphone::api::ApiClient;
use whatphone::cli::Cli;
use whatphone::commands::{self, Context};
use whatphone::config::{ConfigStore, Credentials};
use whatphone::models::LookupResult;
use whatphone::Error;
use wiremock::matchers::{basic_auth, body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clap::Parser;

const NAME: &str = include_str!("fixtures/name.json");
const NAME_ADDRESS: &str = include_str!("fixtures/name_address.json");
const PROFILE: &str = include_str!("fixtures/profile.json");
const ALL: &str = include_str!("fixtures/all.json");

/// Config directory with the sandbox credentials already saved.
fn sandbox_config() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("whatphone").join("config.json");
    ConfigStore::at(&file)
        .save(&Credentials::new("test", "test"))
        .unwrap();
    (dir, file)
}

async fn run_cli(
    argv: &[&str],
    server: &MockServer,
    config: PathBuf,
) -> (anyhow::Result<()>, String) {
    run_cli_at(argv, format!("{}/v1/phone/", server.uri()), config).await
}

/// Runs the CLI on a blocking thread; the reqwest blocking client must
/// not be built or dropped on the async runtime.
async fn run_cli_at(
    argv: &[&str],
    base_url: String,
    config: PathBuf,
) -> (anyhow::Result<()>, String) {
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();

    tokio::task::spawn_blocking(move || {
        let ctx = Context {
            config: ConfigStore::at(config),
            api: ApiClient::with_base_url(base_url).unwrap(),
        };
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let result = commands::run(cli, &ctx, &mut out);
        (result, String::from_utf8(out).unwrap())
    })
    .await
    .unwrap()
}

async fn mount_lookup(server: &MockServer, number: &str, body: &str, payload: &'static str) {
    Mock::given(method("POST"))
        .and(path(format!("/v1/phone/{number}")))
        .and(basic_auth("test", "test"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(body))
        .respond_with(ResponseTemplate::new(200).set_body_raw(payload, "application/json"))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn name_lookup_renders_sandbox_sample() {
    let server = MockServer::start().await;
    mount_lookup(&server, "15551234567", "data=name", NAME).await;
    let (_dir, config) = sandbox_config();

    let (result, out) = run_cli(&["whatphone", "lookup", "-n", "15551234567"], &server, config).await;

    result.unwrap();
    assert_eq!(
        out,
        "Name: Michael Seaver\n\
         Note: THIS IS A SAMPLE, YOU WILL NOT BE CHARGED\n\
         Price Total: -0.0100\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn combined_flags_request_both_fields() {
    let server = MockServer::start().await;
    mount_lookup(&server, "15551234567", "data=name%2Caddress", NAME_ADDRESS).await;
    let (_dir, config) = sandbox_config();

    let (result, out) = run_cli(&["whatphone", "lookup", "-na", "15551234567"], &server, config).await;

    result.unwrap();
    assert_eq!(
        out,
        "\
Name: Michael Seaver
Address: 15 Robin Hood Lane
Location:
  City, State, Zip: Long Island, NY, 10003
  Lat, Long: 40.799787, -73.971421
Note: THIS IS A SAMPLE, YOU WILL NOT BE CHARGED
Price Total: -0.0900
"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn all_sends_empty_selection_and_renders_everything() {
    let server = MockServer::start().await;
    mount_lookup(&server, "15551234567", "data=", ALL).await;
    let (_dir, config) = sandbox_config();

    let (result, out) = run_cli(&["whatphone", "lookup", "--all", "15551234567"], &server, config).await;

    result.unwrap();
    assert_eq!(
        out,
        "\
Name: Michael Seaver
Profile:
  Edu: Thomas Dewey High School
  Job: Custodian
  Relationship: April Lerman
CNAM: MICHAEL SEAVER
Gender: M
Image:
  Cover: //teloimg-pub.com.s3.amazonaws.com/cover.jpg
  Small: //teloimg-pub.com.s3.amazonaws.com/small.jpg
  Medium: //teloimg-pub.com.s3.amazonaws.com/med.jpg
  Large: //teloimg-pub.com.s3.amazonaws.com/large.jpg
Address: 15 Robin Hood Lane
Location:
  City, State, Zip: Long Island, NY, 10003
  Lat, Long: 40.799787, -73.971421
Line Provider:
  ID: 215
  Name: MysticVoice
  MMS E-mail: 5551234567@mms.mysticvoice.com
  SMS E-mail: 5551234567@sms.mysticvoice.com
Carrier:
  ID: 214
  Name: Growing Wireless Inc.
Original Carrier:
  ID: 213
  Name: Paine Mobile Inc.
Linetype: mobile
Note: THIS IS A SAMPLE, YOU WILL NOT BE CHARGED
Price Total: -0.1610
"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn profile_with_pricing_breakdown() {
    let server = MockServer::start().await;
    mount_lookup(&server, "+15551234567", "data=profile", PROFILE).await;
    let (_dir, config) = sandbox_config();

    let (result, out) = run_cli(&["whatphone", "lookup", "-pb", "+15551234567"], &server, config).await;

    result.unwrap();
    assert_eq!(
        out,
        "\
Profile:
  Edu: Thomas Dewey High School
  Job: Custodian
  Relationship: April Lerman
Note: THIS IS A SAMPLE, YOU WILL NOT BE CHARGED
Price Total: -0.0050
  Name: 0.0000
  Profile: -0.0050
  CNAM: 0.0000
  Gender: 0.0000
  Image: 0.0000
  Address: 0.0000
  Location: 0.0000
  Line Provider: 0.0000
  Carrier: 0.0000
  Original Carrier: 0.0000
  Linetype: 0.0000
"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn missed_fields_are_listed_last() {
    let server = MockServer::start().await;
    let payload = r#"{
        "data": { "gender": "M" },
        "missed": ["cnam", "image"],
        "pricing": { "total": -0.01 }
    }"#;
    mount_lookup(&server, "15551234567", "data=cnam%2Cgender%2Cimage", payload).await;
    let (_dir, config) = sandbox_config();

    let (result, out) =
        run_cli(&["whatphone", "lookup", "-igm", "15551234567"], &server, config).await;

    result.unwrap();
    assert_eq!(out, "Gender: M\nPrice Total: -0.0100\n\nMissed: cnam, image\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn json_flag_prints_decoded_result() {
    let server = MockServer::start().await;
    mount_lookup(&server, "15551234567", "data=name", NAME).await;
    let (_dir, config) = sandbox_config();

    let (result, out) =
        run_cli(&["whatphone", "lookup", "-n", "--json", "15551234567"], &server, config).await;

    result.unwrap();
    let printed: LookupResult = serde_json::from_str(&out).unwrap();
    let expected: LookupResult = serde_json::from_str(NAME).unwrap();
    assert_eq!(printed, expected);
    assert_eq!(printed.data.expanded_name.unwrap().last, "Seaver");
}

#[tokio::test(flavor = "multi_thread")]
async fn no_selection_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(NAME, "application/json"))
        .expect(0)
        .mount(&server)
        .await;
    let (_dir, config) = sandbox_config();

    let (result, out) = run_cli(&["whatphone", "lookup", "15551234567"], &server, config).await;

    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "no data points selected; use --all to request all data points"
    );
    assert!(out.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_phone_number() {
    let server = MockServer::start().await;
    let (_dir, config) = sandbox_config();

    let (result, _) = run_cli(&["whatphone", "lookup"], &server, config).await;

    assert_eq!(result.unwrap_err().to_string(), "missing phone number");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_config_suggests_init() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    let (result, _) = run_cli(
        &["whatphone", "lookup", "-n", "15551234567"],
        &server,
        dir.path().join("config.json"),
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::ConfigMissing)));
    assert_eq!(
        err.to_string(),
        "unable to read config; you may need to run the init command"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn http_error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    let (_dir, config) = sandbox_config();

    let (result, out) = run_cli(&["whatphone", "lookup", "-n", "15551234567"], &server, config).await;

    assert_eq!(result.unwrap_err().to_string(), "401 Unauthorized");
    assert!(out.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;
    let (_dir, config) = sandbox_config();

    let (result, _) = run_cli(&["whatphone", "lookup", "-n", "15551234567"], &server, config).await;

    let err = result.unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Decode(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn connection_refused_is_a_transport_error() {
    let (_dir, config) = sandbox_config();

    // Nothing listens on port 1.
    let (result, out) = run_cli_at(
        &["whatphone", "lookup", "-n", "15551234567"],
        "http://127.0.0.1:1/v1/phone/".to_string(),
        config,
    )
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Transport(_))));
    assert!(out.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn init_then_lookup_uses_saved_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/phone/15551234567"))
        .and(basic_auth("AC-fresh", "tok-fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(NAME, "application/json"))
        .expect(1)
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("whatphone").join("config.json");

    let (result, out) = run_cli(
        &["whatphone", "init", "--accountsid", "AC-fresh", "--authtoken", "tok-fresh"],
        &server,
        config.clone(),
    )
    .await;
    result.unwrap();
    assert_eq!(
        out,
        format!("Config successfully written to {}\n", config.display())
    );

    let (result, out) = run_cli(&["whatphone", "lookup", "-n", "15551234567"], &server, config).await;
    result.unwrap();
    assert!(out.starts_with("Name: Michael Seaver\n"));
}
