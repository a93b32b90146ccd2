//! End-to-end conversion tests.
//!
//! These run the full pipeline (parser seam, header resolution, tree
//! building, rendering) and inspect the produced EML bytes, pulling the
//! multipart boundary out of the rendered headers to check the structure.

use msg2eml_core::{
    AttachmentData, CLASS_TO, Conversion, MsgInput, SourceAttachment, SourceMessage,
    SourceParser, SourceRecipient, convert,
};

/// Parser stub returning a prebuilt source message.
struct FixtureParser(SourceMessage);

impl SourceParser for FixtureParser {
    fn parse(&self, _input: MsgInput<'_>) -> anyhow::Result<SourceMessage> {
        Ok(self.0.clone())
    }
}

/// Parser stub that always rejects its input.
struct FailingParser;

impl SourceParser for FailingParser {
    fn parse(&self, _input: MsgInput<'_>) -> anyhow::Result<SourceMessage> {
        anyhow::bail!("not an OLE compound document")
    }
}

fn convert_fixture(source: SourceMessage, stem: &str) -> (String, Vec<String>) {
    let mut log: Vec<String> = Vec::new();
    let result = convert(
        &FixtureParser(source),
        MsgInput::Bytes(b"raw"),
        stem,
        &mut log,
    );
    let Conversion { eml, .. } = result.expect("conversion should succeed");
    (String::from_utf8(eml).expect("EML output should be UTF-8"), log)
}

/// Extracts the boundary of the top-level content type.
fn top_boundary(eml: &str) -> String {
    let line = eml
        .lines()
        .find(|l| l.starts_with("Content-Type: multipart/"))
        .expect("expected a multipart content type");
    line.split("boundary=")
        .nth(1)
        .expect("expected a boundary parameter")
        .trim_matches('"')
        .to_string()
}

/// Splits the message into the bodies of the top-level children.
fn top_children(eml: &str) -> Vec<String> {
    let boundary = top_boundary(eml);
    let delimiter = format!("--{boundary}\r\n");
    let closing = format!("--{boundary}--");
    let mut children: Vec<String> = eml
        .split(&delimiter)
        .skip(1)
        .map(ToString::to_string)
        .collect();
    if let Some(last) = children.last_mut() {
        *last = last
            .split(&closing)
            .next()
            .unwrap_or_default()
            .to_string();
    }
    children
}

#[test]
fn converts_plain_body_with_nested_message() {
    let nested = SourceMessage {
        subject: Some("Inner".into()),
        html_body: Some("<p>inner content</p>".into()),
        ..Default::default()
    };
    let source = SourceMessage {
        subject: Some("Outer".into()),
        body: Some("outer body".into()),
        attachments: vec![SourceAttachment {
            data: Some(AttachmentData::Message(Box::new(nested))),
            ..Default::default()
        }],
        ..Default::default()
    };

    let (eml, _) = convert_fixture(source, "outer");
    assert!(eml.contains("Content-Type: multipart/mixed"));

    let children = top_children(&eml);
    assert_eq!(children.len(), 2);
    assert!(children[0].starts_with("Content-Type: text/plain"));

    let embedded = &children[1];
    assert!(embedded.starts_with("Content-Type: message/rfc822"));
    assert!(embedded.contains("Content-Disposition: attachment; filename=\"Inner.eml\""));
    // The nested message kept its HTML-only body, not flattened to bytes
    assert!(embedded.contains("Content-Type: text/html; charset=utf-8"));
    assert!(embedded.contains("Subject: Inner"));
    assert!(!embedded.contains("Content-Transfer-Encoding: base64"));
}

#[test]
fn preserves_attachment_order() {
    let nested = SourceMessage {
        subject: Some("Inner".into()),
        html_body: Some("<p>inner</p>".into()),
        ..Default::default()
    };
    let source = SourceMessage {
        body: Some("body".into()),
        attachments: vec![
            SourceAttachment {
                long_filename: Some("zzz.bin".into()),
                data: Some(AttachmentData::Bytes(vec![0xDE, 0xAD])),
                ..Default::default()
            },
            SourceAttachment {
                data: Some(AttachmentData::Message(Box::new(nested))),
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    let (eml, _) = convert_fixture(source, "ordered");
    let children = top_children(&eml);
    assert_eq!(children.len(), 3);
    assert!(children[0].starts_with("Content-Type: text/plain"));
    assert!(children[1].contains("filename=\"zzz.bin\""));
    assert!(children[1].contains("Content-Transfer-Encoding: base64"));
    assert!(children[2].starts_with("Content-Type: message/rfc822"));
}

#[test]
fn no_attachments_means_no_mixed_wrapper() {
    let source = SourceMessage {
        subject: Some("Plain".into()),
        body: Some("just text".into()),
        ..Default::default()
    };

    let (eml, _) = convert_fixture(source, "plain");
    assert!(!eml.contains("multipart/mixed"));
    assert!(eml.contains("Content-Type: text/plain; charset=utf-8"));
    assert_eq!(eml.matches("MIME-Version: 1.0").count(), 1);
}

#[test]
fn both_bodies_become_alternative_without_mixed() {
    let source = SourceMessage {
        body: Some("plain version".into()),
        html_body: Some("<p>html version</p>".into()),
        ..Default::default()
    };

    let (eml, _) = convert_fixture(source, "alt");
    assert!(eml.contains("Content-Type: multipart/alternative"));
    assert!(!eml.contains("multipart/mixed"));

    let children = top_children(&eml);
    assert_eq!(children.len(), 2);
    assert!(children[0].starts_with("Content-Type: text/plain"));
    assert!(children[1].starts_with("Content-Type: text/html"));
}

#[test]
fn sender_name_is_cross_referenced_against_recipients() {
    let source = SourceMessage {
        sender_display: Some("Jane Doe".into()),
        recipients: vec![SourceRecipient {
            name: Some("Jane Doe".into()),
            address: Some("jane@example.com".into()),
            class: CLASS_TO,
        }],
        body: Some("hi".into()),
        ..Default::default()
    };

    let (eml, _) = convert_fixture(source, "from-fallback");
    assert!(eml.contains("From: Jane Doe <jane@example.com>\r\n"));
}

#[test]
fn suggested_filename_is_sanitized_stem() {
    let source = SourceMessage {
        body: Some("hi".into()),
        ..Default::default()
    };
    let mut log: Vec<String> = Vec::new();
    let result = convert(
        &FixtureParser(source),
        MsgInput::Bytes(b"raw"),
        "Q3 report: final?",
        &mut log,
    );
    assert_eq!(result.expect("should convert").filename, "Q3_report_final.eml");
}

#[test]
fn parser_failure_yields_none_with_logged_reason() {
    let mut log: Vec<String> = Vec::new();
    let result = convert(&FailingParser, MsgInput::Bytes(b"junk"), "bad", &mut log);
    assert!(result.is_none());
    let last = log.last().expect("failure must be logged");
    assert!(last.contains("Error reading main MSG file"));
    assert!(last.contains("not an OLE compound document"));
}

#[test]
fn conversion_logs_progress_in_order() {
    let nested = SourceMessage {
        subject: Some("Inner".into()),
        body: Some("inner".into()),
        ..Default::default()
    };
    let source = SourceMessage {
        subject: Some("Outer".into()),
        body: Some("outer".into()),
        attachments: vec![SourceAttachment {
            data: Some(AttachmentData::Message(Box::new(nested))),
            ..Default::default()
        }],
        ..Default::default()
    };

    let (_, log) = convert_fixture(source, "progress");
    let starting = log
        .iter()
        .position(|l| l.contains("Starting conversion"))
        .expect("start line");
    let outer = log
        .iter()
        .position(|l| l.contains("subject: 'Outer'"))
        .expect("outer build line");
    let inner = log
        .iter()
        .position(|l| l.contains("subject: 'Inner'"))
        .expect("inner build line");
    let done = log
        .iter()
        .position(|l| l.contains("Successfully converted"))
        .expect("success line");
    assert!(starting < outer && outer < inner && inner < done);
    // Nested build lines are indented one level deeper
    assert!(log[inner].starts_with("  "));
}
