use pressdoc_core::models::advisory::MediaAdvisory;

use crate::blocks::{Block, Document, TextRun};

const HEADER: &str = "*** MEDIA ADVISORY ***";
const DATELINE: &str = "NEW HAVEN, CT -- ";
const END_MARKER: &str = "###";
const TITLE_SIZE: usize = 14;

/// Lay out a media advisory.
///
/// The structure is fixed; only the "WHO:" section is conditional and is left
/// out entirely when there are no additional speakers.
pub fn format_advisory(data: &MediaAdvisory) -> Document {
    let mut doc = Document::new();

    doc.push(
        Block::paragraph()
            .centered()
            .run(TextRun::new(HEADER).bold().size(TITLE_SIZE)),
    );
    doc.push(Block::paragraph().run(TextRun::new(format!("For {}", data.event_date))));
    doc.blank();

    doc.push(Block::paragraph().run(TextRun::new(data.headline.to_uppercase()).bold()));
    doc.blank();

    doc.push(
        Block::paragraph()
            .run(TextRun::new(DATELINE).bold())
            .run(TextRun::new(data.summary.as_str())),
    );
    doc.blank();

    doc.push(Block::paragraph().run(TextRun::new("EVENT DETAILS:").bold()));
    doc.blank();

    doc.push(labeled("WHAT: ", &data.headline));
    doc.push(labeled(
        "WHEN: ",
        &format!("{}, {}", data.event_date, data.event_time),
    ));
    doc.push(labeled("WHERE: ", &data.location));

    let speakers = data.speakers();
    if !speakers.is_empty() {
        doc.push(Block::paragraph().run(TextRun::new("WHO:").bold()));
        doc.push(Block::paragraph().run(TextRun::new("Speakers:").underline()));
        for name in speakers {
            doc.push(Block::bullet().run(TextRun::new(name.as_str())));
        }
    }

    doc.blank();
    doc.push(Block::paragraph().run(TextRun::new(END_MARKER)));

    doc.push(Block::paragraph().run(TextRun::new("Press Contact:").underline()));
    doc.push(Block::paragraph().run(TextRun::new(format!(
        "{}\nPhone: {}\nEmail: {}",
        data.contact_name, data.contact_phone, data.contact_email
    ))));

    doc
}

fn labeled(label: &str, value: &str) -> Block {
    Block::paragraph()
        .run(TextRun::new(label).bold())
        .run(TextRun::new(value))
}
