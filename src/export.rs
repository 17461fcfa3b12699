//! PDF export of a resolved standard.
//!
//! Produces a small paginated document — code heading, summary, numbered
//! examples — with `lopdf`. The filename is derived from the code with
//! colons and spaces stripped (`AS 1` → `AS1_Summary.pdf`). Export is only
//! offered for codes that actually resolve.

use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::{Path, PathBuf};

use crate::kb::{KnowledgeBase, StandardEntry};
use crate::resolve::NOT_FOUND_MESSAGE;

// Letter media box, 1" margins, 11pt Helvetica with 14pt leading.
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: i64 = 72;
const FONT_SIZE: i64 = 11;
const LEADING: i64 = 14;
const LINES_PER_PAGE: usize = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;
const WRAP_COLUMNS: usize = 85;

/// Derive the download filename from a code: colons and spaces stripped,
/// `_Summary.pdf` appended.
pub fn export_filename(code: &str) -> String {
    let stripped: String = code.chars().filter(|c| *c != ':' && *c != ' ').collect();
    format!("{}_Summary.pdf", stripped)
}

/// Render an entry into PDF bytes.
pub fn build_pdf(entry: &StandardEntry) -> Result<Vec<u8>> {
    let lines = layout_lines(entry);
    let pages: Vec<&[String]> = lines.chunks(LINES_PER_PAGE).collect();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page_lines in &pages {
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            page_content(page_lines).encode()?,
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// One page of text as a content stream: a text block positioned at the
/// top-left margin, one `Tj` per line with `T*` advancing the leading.
fn page_content(lines: &[String]) -> Content {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new(
            "Td",
            vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN - FONT_SIZE).into()],
        ),
    ];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.as_str())],
        ));
    }
    operations.push(Operation::new("ET", vec![]));
    Content { operations }
}

/// Flatten an entry into wrapped, sanitized display lines.
fn layout_lines(entry: &StandardEntry) -> Vec<String> {
    let mut lines = Vec::new();
    for summary_line in entry.summary.lines() {
        wrap_into(&mut lines, &sanitize(summary_line));
    }
    if !entry.examples.is_empty() {
        lines.push(String::new());
        lines.push("Real-life Examples:".to_string());
        for (i, example) in entry.examples.iter().enumerate() {
            wrap_into(&mut lines, &sanitize(&format!("Example {}: {}", i + 1, example)));
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated on {}",
        chrono::Utc::now().format("%Y-%m-%d")
    ));
    lines
}

/// Word-wrap `text` to the page column width, appending to `lines`.
fn wrap_into(lines: &mut Vec<String>, text: &str) {
    if text.is_empty() {
        lines.push(String::new());
        return;
    }
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > WRAP_COLUMNS {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
}

/// Reduce the summary text to glyphs Helvetica with the default encoding
/// can show. Rupee amounts keep their meaning as "Rs".
fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '₹' => out.push_str("Rs "),
            '—' | '–' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            c if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

/// CLI entry point for `asref export`.
///
/// Writes the PDF for `code` to `output` (or the derived filename in the
/// current directory) and reports the destination on stderr.
pub fn run_export(code: &str, output: Option<&Path>) -> Result<()> {
    let entry = match KnowledgeBase::global().get(code) {
        Some(entry) => entry,
        None => {
            eprintln!("{}", NOT_FOUND_MESSAGE);
            std::process::exit(1);
        }
    };

    let bytes = build_pdf(entry)?;
    let path: PathBuf = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(export_filename(entry.code)),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, &bytes)?;
    eprintln!("Exported {} summary to {}", entry.code, path.display());
    Ok(())
}
