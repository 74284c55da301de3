//! Email container handling: pull PDF attachments out of .eml files.

use mailparse::{ParsedMail, parse_mail};
use tracing::{debug, warn};

use crate::error::EmlError;

/// One PDF attachment lifted out of a message.
#[derive(Debug, Clone)]
pub struct PdfAttachment {
    /// Attachment file name as declared by the part, when present.
    pub file_name: Option<String>,
    /// Decoded PDF bytes.
    pub data: Vec<u8>,
}

/// Parse a raw message and collect its PDF attachments.
///
/// A part qualifies when its content type is `application/pdf` or its
/// declared file name ends in `.pdf`. Parts with an empty payload are
/// skipped.
pub fn pdf_attachments(raw: &[u8]) -> Result<Vec<PdfAttachment>, EmlError> {
    let mail = parse_mail(raw)?;

    let mut attachments = Vec::new();
    collect_pdf_parts(&mail, &mut attachments)?;

    debug!(count = attachments.len(), "PDF attachments in message");
    Ok(attachments)
}

fn collect_pdf_parts(
    part: &ParsedMail<'_>,
    out: &mut Vec<PdfAttachment>,
) -> Result<(), EmlError> {
    for sub in &part.subparts {
        collect_pdf_parts(sub, out)?;
    }

    if !part.subparts.is_empty() {
        return Ok(());
    }

    let file_name = part_file_name(part);
    let is_pdf_type = part.ctype.mimetype.eq_ignore_ascii_case("application/pdf");
    let is_pdf_name = file_name
        .as_deref()
        .is_some_and(|n| n.to_ascii_lowercase().ends_with(".pdf"));

    if !is_pdf_type && !is_pdf_name {
        return Ok(());
    }

    let data = part.get_body_raw()?;
    if data.is_empty() {
        warn!(?file_name, "PDF part has no payload, skipping");
        return Ok(());
    }

    out.push(PdfAttachment { file_name, data });
    Ok(())
}

/// File name from the disposition header, falling back to the content-type
/// `name` parameter.
fn part_file_name(part: &ParsedMail<'_>) -> Option<String> {
    part.get_content_disposition()
        .params
        .get("filename")
        .cloned()
        .or_else(|| part.ctype.params.get("name").cloned())
}

/// File base name without extension, the terminal resolver fallback.
pub fn file_stem(name: &str) -> String {
    std::path::Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"sep\"\r\n\
\r\n\
--sep\r\n\
Content-Type: text/plain\r\n\
\r\n\
Invoice attached.\r\n\
--sep\r\n\
Content-Type: application/pdf; name=\"inv_4471.pdf\"\r\n\
Content-Disposition: attachment; filename=\"inv_4471.pdf\"\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
JVBERi0xLjQK\r\n\
--sep--\r\n";

    #[test]
    fn finds_and_decodes_pdf_parts() {
        let attachments = pdf_attachments(SAMPLE.as_bytes()).unwrap();
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].file_name.as_deref(), Some("inv_4471.pdf"));
        assert_eq!(attachments[0].data, b"%PDF-1.4\n");
    }

    #[test]
    fn plain_message_has_no_attachments() {
        let raw = b"Content-Type: text/plain\r\n\r\njust a body\r\n";
        assert!(pdf_attachments(raw).unwrap().is_empty());
    }

    #[test]
    fn pdf_extension_qualifies_even_with_generic_type() {
        let raw = "Content-Type: application/octet-stream; name=\"scan.PDF\"\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
JVBERi0xLjQK\r\n";
        let attachments = pdf_attachments(raw.as_bytes()).unwrap();
        assert_eq!(attachments.len(), 1);
    }

    #[test]
    fn file_stem_strips_extension() {
        assert_eq!(file_stem("inv_4471.pdf"), "inv_4471");
        assert_eq!(file_stem("plain"), "plain");
    }
}
