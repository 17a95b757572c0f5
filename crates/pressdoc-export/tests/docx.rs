use pressdoc_core::models::advisory::MediaAdvisory;
use pressdoc_export::advisory::format_advisory;
use pressdoc_export::blocks::{Block, Document, TextRun};
use pressdoc_export::docx::{build_docx, render_docx, write_docx};
use pressdoc_export::styles::DocumentStyles;

fn sample() -> Document {
    let mut doc = Document::new();
    doc.push(
        Block::paragraph()
            .centered()
            .run(TextRun::new("Title").bold().size(14)),
    );
    doc.blank();
    doc.push(Block::bullet().run(TextRun::new("First").italic()));
    doc.push(Block::paragraph().run(TextRun::new("line one\nline two\n").underline()));
    doc
}

#[test]
fn renders_a_zip_package() {
    let bytes = render_docx(&sample(), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn renders_an_empty_document() {
    let bytes = render_docx(&Document::new(), &DocumentStyles::default()).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn write_docx_persists_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.docx");

    write_docx(&sample(), &DocumentStyles::default(), &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"PK"));
}

#[test]
fn write_docx_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("sample.docx");

    assert!(write_docx(&sample(), &DocumentStyles::default(), &path).is_err());
}

#[test]
fn one_inch_margin_is_1440_twips() {
    assert_eq!(DocumentStyles::default().margin_twips(), 1440);

    let half = DocumentStyles {
        margin_inches: 0.5,
        ..DocumentStyles::default()
    };
    assert_eq!(half.margin_twips(), 720);
}

fn document_xml(doc: &Document, styles: &DocumentStyles) -> String {
    String::from_utf8(build_docx(doc, styles).build().document).unwrap()
}

/// True when `xml` has an element named `tag`, e.g. `<w:b/>` or `<w:b w:val="true"/>`.
fn has_element(xml: &str, tag: &str) -> bool {
    ["/>", " ", ">"]
        .iter()
        .any(|end| xml.contains(&format!("<{tag}{end}")))
}

#[test]
fn section_is_letter_with_one_inch_margins() {
    let xml = document_xml(&sample(), &DocumentStyles::default());

    assert!(xml.contains(r#"<w:pgSz w:w="12240" w:h="15840""#), "{xml}");
    assert!(
        xml.contains(r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440""#),
        "{xml}"
    );
}

#[test]
fn margins_follow_styles() {
    let styles = DocumentStyles {
        margin_inches: 0.5,
        ..DocumentStyles::default()
    };
    let xml = document_xml(&sample(), &styles);

    assert!(xml.contains(r#"<w:pgMar w:top="720" w:right="720" w:bottom="720" w:left="720""#));
}

#[test]
fn run_styles_reach_the_document() {
    let xml = document_xml(&sample(), &DocumentStyles::default());

    assert!(xml.contains(r#"<w:jc w:val="center""#));
    assert!(has_element(&xml, "w:b"));
    assert!(has_element(&xml, "w:i"));
    assert!(xml.contains(r#"<w:u w:val="single""#));
    // 14pt title and 12pt body, in half-points
    assert!(xml.contains(r#"<w:sz w:val="28""#));
    assert!(xml.contains(r#"<w:sz w:val="24""#));
    assert!(xml.contains("Times New Roman"));
}

#[test]
fn plain_document_has_no_emphasis() {
    let mut doc = Document::new();
    doc.push(Block::paragraph().run(TextRun::new("plain")));
    let xml = document_xml(&doc, &DocumentStyles::default());

    assert!(!has_element(&xml, "w:b"));
    assert!(!has_element(&xml, "w:i"));
    assert!(!xml.contains("<w:u "));
    assert!(!xml.contains(r#"<w:jc w:val="center""#));
}

#[test]
fn bullet_items_carry_the_marker() {
    let xml = document_xml(&sample(), &DocumentStyles::default());
    assert!(xml.contains("\u{2022} "));
    assert!(xml.contains("First"));
}

#[test]
fn newlines_become_breaks_inside_one_run() {
    let xml = document_xml(&sample(), &DocumentStyles::default());

    assert_eq!(xml.matches(r#"<w:br w:type="textWrapping""#).count(), 2);
    let first = xml.find("line one").unwrap();
    let second = xml.find("line two").unwrap();
    let between = &xml[first..second];
    assert!(between.contains("textWrapping"));
    assert!(!between.contains("<w:r>") && !between.contains("<w:r "));
}

#[test]
fn advisory_contact_block_breaks_twice() {
    let advisory = MediaAdvisory {
        headline: "City Announces Park Opening".to_string(),
        summary: "Summary".to_string(),
        event_date: "June 1, 2024".to_string(),
        event_time: "10:00 AM".to_string(),
        location: "Central Park".to_string(),
        contact_name: "Jane Doe".to_string(),
        contact_phone: "555-1234".to_string(),
        contact_email: "jane@example.com".to_string(),
        additional_speakers: None,
    };
    let xml = document_xml(&format_advisory(&advisory), &DocumentStyles::default());

    assert_eq!(xml.matches(r#"<w:br w:type="textWrapping""#).count(), 2);
    assert!(xml.contains("Phone: 555-1234"));
    assert!(xml.contains("Email: jane@example.com"));
}
