// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::extraction_service::{parse_count, ExtractionService};

const FULL_PAGE: &str = r#"
<html><body>
  <div class="top-card-layout__entity-info">
    <h1> Acme Corp </h1>
  </div>
  <h3 class="top-card-layout__first-subline">
    <span>Software Development</span> 12,345 followers
  </h3>
  <div class="top-card-layout__entity-image-container">
    <img data-delayed-url="https://cdn.example.test/logo.png" src="spacer.gif"/>
  </div>
  <section class="core-section-container__content">
    <p>Acme builds everything.</p>
    <a class="face-pile__cta">View all 1,024 employees on this page</a>
    <div class="mb-2">
      <dt class="text-md">Website</dt>
      <dd class="text-md"><a href="https://acme.example.test">https://acme.example.test</a></dd>
    </div>
    <div class="mb-2">
      <dt class="text-md">Industry</dt>
      <dd class="text-md">Software Development</dd>
    </div>
    <div class="mb-2">
      <dt class="text-md">Company size</dt>
      <dd class="text-md">51-200 employees</dd>
    </div>
    <div class="mb-2">
      <dt class="text-md">Headquarters</dt>
      <dd class="text-md">Berlin, BE</dd>
    </div>
    <div class="mb-2">
      <dt class="text-md">Type</dt>
      <dd class="text-md">Privately Held</dd>
    </div>
    <div class="mb-2">
      <dt class="text-md">Founded</dt>
      <dd class="text-md">2009</dd>
    </div>
    <div class="mb-2">
      <dt class="text-md">Specialties</dt>
      <dd class="text-md">Anvils, Rockets</dd>
    </div>
  </section>
</body></html>
"#;

// Same page without the optional Founded block: the remaining labels
// shift position, which used to mis-assign fields under index-based
// parsing.
const SHIFTED_PAGE: &str = r#"
<html><body>
  <div class="top-card-layout__entity-info"><h1>Acme Corp</h1></div>
  <section class="core-section-container__content">
    <div class="mb-2">
      <dt class="text-md">Industry</dt>
      <dd class="text-md">Software Development</dd>
    </div>
    <div class="mb-2">
      <dt class="text-md">Specialties</dt>
      <dd class="text-md">Anvils, Rockets</dd>
    </div>
    <div class="mb-2">
      <dt class="text-md">Headquarters</dt>
      <dd class="text-md">Berlin, BE</dd>
    </div>
  </section>
</body></html>
"#;

#[test]
fn test_extract_full_page() {
    let record =
        ExtractionService::extract("https://example.test/company/acme/?ref=dir", FULL_PAGE)
            .expect("page has a name");

    assert_eq!(record.url, "https://example.test/company/acme/?ref=dir");
    assert_eq!(record.name, "Acme Corp");
    assert_eq!(
        record.logo_url.as_deref(),
        Some("https://cdn.example.test/logo.png")
    );
    assert_eq!(record.about_text.as_deref(), Some("Acme builds everything."));
    assert_eq!(record.follower_count, Some(12_345));
    assert_eq!(record.employee_count, Some(1_024));
    assert_eq!(record.website, "https://acme.example.test");
    assert_eq!(record.industry, "Software Development");
    assert_eq!(record.size_approx, "51-200");
    assert_eq!(record.headquarters, "Berlin, BE");
    assert_eq!(record.company_type, "Privately Held");
    assert_eq!(record.founded, "2009");
    assert_eq!(record.specialties, "Anvils, Rockets");
}

#[test]
fn test_extract_is_label_keyed_not_positional() {
    let record = ExtractionService::extract("http://u", SHIFTED_PAGE).unwrap();

    assert_eq!(record.industry, "Software Development");
    assert_eq!(record.specialties, "Anvils, Rockets");
    assert_eq!(record.headquarters, "Berlin, BE");
    // Absent blocks default to empty, not to a neighbour's value
    assert_eq!(record.website, "");
    assert_eq!(record.company_type, "");
    assert_eq!(record.founded, "");
    assert_eq!(record.size_approx, "");
}

#[test]
fn test_missing_name_is_unusable() {
    let html = "<html><body><p>nothing here</p></body></html>";
    assert!(ExtractionService::extract("http://u", html).is_none());
}

#[test]
fn test_blank_name_is_unusable() {
    let html = r#"<div class="top-card-layout__entity-info"><h1>   </h1></div>"#;
    assert!(ExtractionService::extract("http://u", html).is_none());
}

#[test]
fn test_name_only_page_defaults_every_other_field() {
    let html = r#"<div class="top-card-layout__entity-info"><h1>ABC Inc</h1></div>"#;
    let record = ExtractionService::extract("http://u", html).unwrap();

    assert_eq!(record.name, "ABC Inc");
    assert_eq!(record.logo_url, None);
    assert_eq!(record.about_text, None);
    assert_eq!(record.follower_count, None);
    assert_eq!(record.employee_count, None);
    assert_eq!(record.website, "");
    assert_eq!(record.industry, "");
    assert_eq!(record.size_approx, "");
    assert_eq!(record.headquarters, "");
    assert_eq!(record.company_type, "");
    assert_eq!(record.founded, "");
    assert_eq!(record.specialties, "");
}

#[test]
fn test_unknown_labels_are_ignored() {
    let html = r#"
      <div class="top-card-layout__entity-info"><h1>Acme</h1></div>
      <section class="core-section-container__content">
        <div class="mb-2">
          <dt class="text-md">Phone</dt>
          <dd class="text-md">555-0100</dd>
        </div>
      </section>
    "#;
    let record = ExtractionService::extract("http://u", html).unwrap();
    assert_eq!(record.website, "");
    assert_eq!(record.industry, "");
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("12,345 followers"), Some(12_345));
    assert_eq!(parse_count("View all 1,024 employees"), Some(1_024));
    assert_eq!(parse_count("500 followers"), Some(500));
    assert_eq!(parse_count("1,234,567"), Some(1_234_567));
    assert_eq!(parse_count("no digits at all"), None);
    assert_eq!(parse_count(""), None);
}
