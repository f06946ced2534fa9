use crate::config::settings::Settings;

#[test]
fn test_defaults_load_without_config_files() {
    let settings = Settings::new().expect("defaults should load");

    assert_eq!(settings.crawl.input_path, "company_names.json");
    assert_eq!(settings.crawl.output_path, "company_profile_data.json");
    assert_eq!(settings.crawl.url_suffix, "/?trk=companies_directory");
    assert_eq!(settings.crawl.download_delay_ms, 700);
    assert_eq!(settings.crawl.max_retries, 10);
    assert_eq!(settings.crawl.max_redirects, 5);
}

#[test]
fn test_duration_accessors() {
    let settings = Settings::new().expect("defaults should load");

    assert_eq!(
        settings.crawl.download_delay(),
        std::time::Duration::from_millis(700)
    );
    assert_eq!(
        settings.crawl.fetch_timeout(),
        std::time::Duration::from_secs(30)
    );
}
