//! Tests for reading and writing configuration from disk.

use salesforce_configuration as configuration;

#[tokio::test]
async fn configuration_round_trips_through_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let parsed = configuration::ParsedConfiguration::empty();

    configuration::write_parsed_configuration(parsed.clone(), dir.path())
        .await
        .unwrap();
    let read_back = configuration::parse_configuration(dir.path()).await.unwrap();

    assert_eq!(parsed, read_back);

    // the schema file is written alongside the configuration
    assert!(dir.path().join("schema.json").exists());
}

#[tokio::test]
async fn a_missing_configuration_file_is_reported_with_its_path() {
    let dir = tempfile::tempdir().unwrap();

    let result = configuration::parse_configuration(dir.path()).await;

    match result {
        Err(configuration::error::ParseConfigurationError::IoErrorButStringified(message)) => {
            assert!(message.contains("configuration.json"));
        }
        other => panic!("expected an I/O error, got {other:?}"),
    }
}
