use pressdoc_core::models::run_of_show::{RunOfShow, Speaker};

use crate::blocks::{Block, Document, TextRun};

const TITLE_SIZE: usize = 14;

/// Lay out a run of show: event header, then one bullet per speaker in list
/// order, each optionally followed by an italic notes paragraph.
pub fn format_run_of_show(data: &RunOfShow) -> Document {
    let mut doc = Document::new();

    doc.push(
        Block::paragraph()
            .centered()
            .run(TextRun::new(data.event_title.as_str()).bold().size(TITLE_SIZE)),
    );
    doc.push(
        Block::paragraph()
            .centered()
            .run(TextRun::new(data.event_date.as_str()).italic()),
    );
    doc.push(Block::paragraph().centered().run(TextRun::new(data.event_location.as_str())));
    doc.blank();

    doc.push(
        Block::paragraph().run(
            TextRun::new("Run of Show (in order of appearance):")
                .bold()
                .italic(),
        ),
    );
    doc.push(Block::paragraph().run(TextRun::new("Podium & Speaker will be provided").italic()));
    doc.blank();

    for speaker in &data.speakers {
        doc.push(speaker_entry(speaker));
        if let Some(notes) = speaker.notes() {
            doc.push(Block::paragraph().run(TextRun::new(format!("Notes: {notes}")).italic()));
        }
    }

    doc
}

fn speaker_entry(speaker: &Speaker) -> Block {
    let mut entry = Block::bullet().run(TextRun::new(speaker.name.as_str()).bold());

    // An empty title with an organization still gets the comma: ", of Org".
    if !speaker.title.is_empty() || !speaker.organization.is_empty() {
        let mut affiliation = String::from(",");
        if !speaker.title.is_empty() {
            affiliation.push(' ');
            affiliation.push_str(&speaker.title);
        }
        if !speaker.organization.is_empty() {
            affiliation.push_str(" of ");
            affiliation.push_str(&speaker.organization);
        }
        entry = entry.run(TextRun::new(affiliation));
    }

    if !speaker.speaking_time.is_empty() {
        entry = entry.run(TextRun::new(format!(" ({})", speaker.speaking_time)));
    }

    entry
}
