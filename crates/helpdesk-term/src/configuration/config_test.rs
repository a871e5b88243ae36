use std::io::Write;

use super::*;
use crate::application::cli;

#[test]
fn test_backend_url_default_honors_environment_override() {
    env::set_var(BACKEND_URL_ENV, "http://10.0.0.5:9000");
    assert_eq!(
        Config::default(ConfigKey::BackendUrl),
        "http://10.0.0.5:9000"
    );

    env::remove_var(BACKEND_URL_ENV);
    assert_eq!(
        Config::default(ConfigKey::BackendUrl),
        "http://127.0.0.1:8000"
    );
}

#[test]
fn test_user_id_default() {
    assert_eq!(Config::default(ConfigKey::UserId), "web_user");
}

#[tokio::test]
async fn test_load_applies_config_file_then_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "user-id = \"file_user\"").unwrap();

    let matches = cli::build().get_matches_from(vec![
        "helpdesk-term",
        "--config-file",
        file.path().to_str().unwrap(),
    ]);
    Config::load(&matches).await.unwrap();
    assert_eq!(Config::get(ConfigKey::UserId), "file_user");

    let matches = cli::build().get_matches_from(vec![
        "helpdesk-term",
        "--config-file",
        file.path().to_str().unwrap(),
        "--user-id",
        "flag_user",
    ]);
    Config::load(&matches).await.unwrap();
    assert_eq!(Config::get(ConfigKey::UserId), "flag_user");
}

#[test]
fn test_serialize_default_covers_every_public_key() {
    let serialized = Config::serialize_default(cli::build());

    assert!(serialized.contains("backend-url = "));
    assert!(serialized.contains("user-id = "));
    assert!(!serialized.contains("config-file = "));
}
