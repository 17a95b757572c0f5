use pressdoc_core::error::CoreError;
use pressdoc_core::request::{DocumentKind, DocumentRequest};
use serde_json::json;

fn advisory_content() -> serde_json::Value {
    json!({
        "headline": "City Announces Park Opening",
        "summary": "The city will open a new park.",
        "event_date": "June 1, 2024",
        "event_time": "10:00 AM",
        "location": "Central Park",
        "contact_name": "Jane Doe",
        "contact_phone": "555-1234",
        "contact_email": "jane@example.com",
        "additional_speakers": ["Mayor Smith", "Council Member Lee"]
    })
}

#[test]
fn advisory_type_selects_advisory() {
    let parsed = DocumentKind::parse("advisory");
    assert_eq!(parsed.kind, DocumentKind::Advisory);
    assert!(!parsed.fallback);
}

#[test]
fn known_run_of_show_names_are_not_flagged() {
    for name in ["run_of_show", "runofshow", "schedule"] {
        let parsed = DocumentKind::parse(name);
        assert_eq!(parsed.kind, DocumentKind::RunOfShow);
        assert!(!parsed.fallback, "{name} should be recognized");
    }
}

#[test]
fn unknown_type_falls_through_to_run_of_show() {
    let parsed = DocumentKind::parse("advisroy");
    assert_eq!(parsed.kind, DocumentKind::RunOfShow);
    assert!(parsed.fallback);

    let parsed = DocumentKind::parse("");
    assert_eq!(parsed.kind, DocumentKind::RunOfShow);
    assert!(parsed.fallback);
}

#[test]
fn advisory_content_parses_with_speakers_in_order() {
    let request = DocumentRequest::from_content(DocumentKind::Advisory, advisory_content()).unwrap();
    let DocumentRequest::Advisory(advisory) = request else {
        panic!("expected advisory");
    };
    assert_eq!(advisory.headline, "City Announces Park Opening");
    assert_eq!(advisory.speakers(), ["Mayor Smith", "Council Member Lee"]);
}

#[test]
fn missing_and_null_speakers_are_empty() {
    let mut content = advisory_content();
    content.as_object_mut().unwrap().remove("additional_speakers");
    let DocumentRequest::Advisory(advisory) =
        DocumentRequest::from_content(DocumentKind::Advisory, content.clone()).unwrap()
    else {
        panic!("expected advisory");
    };
    assert!(advisory.speakers().is_empty());

    content["additional_speakers"] = serde_json::Value::Null;
    let DocumentRequest::Advisory(advisory) =
        DocumentRequest::from_content(DocumentKind::Advisory, content).unwrap()
    else {
        panic!("expected advisory");
    };
    assert!(advisory.speakers().is_empty());
}

#[test]
fn missing_required_field_is_invalid_content() {
    let mut content = advisory_content();
    content.as_object_mut().unwrap().remove("contact_email");

    let err = DocumentRequest::from_content(DocumentKind::Advisory, content).unwrap_err();
    match &err {
        CoreError::InvalidContent { kind, .. } => assert_eq!(*kind, DocumentKind::Advisory),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("contact_email"));
}

#[test]
fn unknown_field_is_rejected() {
    let mut content = advisory_content();
    content["website"] = json!("https://example.com");

    let err = DocumentRequest::from_content(DocumentKind::Advisory, content).unwrap_err();
    assert!(err.to_string().contains("website"));
}

#[test]
fn speaker_defaults_apply() {
    let content = json!({
        "event_title": "Town Hall",
        "event_date": "July 4",
        "event_location": "City Hall",
        "speakers": [{ "name": "Alice", "title": "" }]
    });

    let request = DocumentRequest::from_content(DocumentKind::RunOfShow, content).unwrap();
    assert_eq!(request.kind(), DocumentKind::RunOfShow);
    let DocumentRequest::RunOfShow(show) = request else {
        panic!("expected run of show");
    };
    let alice = &show.speakers[0];
    assert_eq!(alice.organization, "");
    assert_eq!(alice.speaking_time, "");
    assert_eq!(alice.notes(), None);
}

#[test]
fn speaker_without_name_is_rejected() {
    let content = json!({
        "event_title": "Town Hall",
        "event_date": "July 4",
        "event_location": "City Hall",
        "speakers": [{ "title": "Mayor" }]
    });

    let err = DocumentRequest::from_content(DocumentKind::RunOfShow, content).unwrap_err();
    assert!(err.to_string().starts_with("invalid run of show content"));
}

#[test]
fn file_stems_match_download_names() {
    assert_eq!(DocumentKind::Advisory.file_stem(), "media_advisory");
    assert_eq!(DocumentKind::RunOfShow.file_stem(), "run_of_show");
}
