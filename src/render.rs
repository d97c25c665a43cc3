//! Serialization to the sectioned key-value wire format.
//!
//! This module is the only place that knows the descriptor file format.
//! The format is a contract with the downstream updater and is stricter
//! than it looks:
//!
//! - Keys appear in a fixed order (`Name` through `Version`), regardless
//!   of how the document was built.
//! - Values are written raw — no quoting, no escaping, even for values
//!   containing spaces. The consumer reads them verbatim.
//! - Section names are emitted as-is inside `[...]`.
//! - Equal documents always render to byte-identical text.
//!
//! ```text
//! ;aiu;
//! [my-app]
//! Name = My App
//! ProductVersion = 2.1.3
//! ...
//! ```
//!
//! Rendering is pure (no I/O): it returns the full text and the caller
//! routes it to stdout or a file. Writing is not atomic — a failed write
//! can leave a partial file behind, which callers avoid by rendering
//! first and writing once.

use crate::descriptor::{OutputDocument, UpdateDescriptor};

/// Marker line some updater variants expect before the first section.
pub const MARKER_LINE: &str = ";aiu;";

/// Render the document to its exact textual form.
///
/// Sections appear in document order, separated by one blank line; the
/// output ends with a newline.
pub fn render(doc: &OutputDocument) -> String {
    let mut lines = Vec::new();
    if doc.emit_marker() {
        lines.push(MARKER_LINE.to_string());
    }
    for (i, descriptor) in doc.descriptors().iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        push_section(&mut lines, descriptor);
    }
    if lines.is_empty() {
        return String::new();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Append one section in the fixed key order. `Flags` is the only
/// optional key and is skipped entirely when absent.
fn push_section(lines: &mut Vec<String>, d: &UpdateDescriptor) {
    lines.push(format!("[{}]", d.section_name));
    lines.push(format!("Name = {}", d.display_name));
    lines.push(format!("ProductVersion = {}", d.product_version));
    lines.push(format!("URL = {}", d.url));
    lines.push(format!("Size = {}", d.size_bytes));
    lines.push(format!("SHA256 = {}", d.sha256));
    lines.push(format!("MD5 = {}", d.md5));
    lines.push(format!("ServerFileName = {}", d.server_file_name));
    if let Some(flags) = &d.flags {
        lines.push(format!("Flags = {flags}"));
    }
    lines.push(format!("RegistryKey = {}", d.registry_key));
    lines.push(format!("Version = {}", d.version));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::OutputDocument;
    use crate::test_helpers::descriptor_named;

    fn single_doc(marker: bool) -> OutputDocument {
        let mut doc = OutputDocument::new(marker);
        doc.push(descriptor_named("my-app")).unwrap();
        doc
    }

    #[test]
    fn single_section_exact_bytes() {
        let text = render(&single_doc(false));
        assert_eq!(
            text,
            "[my-app]\n\
             Name = My App\n\
             ProductVersion = 1.0\n\
             URL = https://x.io/dl/my-app.exe\n\
             Size = 3\n\
             SHA256 = abc\n\
             MD5 = def\n\
             ServerFileName = my-app.exe\n\
             RegistryKey = SOFTWARE\\X\\Version\n\
             Version = 1.0\n"
        );
    }

    #[test]
    fn marker_line_comes_first() {
        let text = render(&single_doc(true));
        assert!(text.starts_with(";aiu;\n[my-app]\n"));
    }

    #[test]
    fn no_marker_by_default() {
        let text = render(&single_doc(false));
        assert!(!text.contains(";aiu;"));
    }

    #[test]
    fn flags_key_included_only_when_present() {
        let mut with_flags = descriptor_named("app");
        with_flags.flags = Some("critical".to_string());
        let mut doc = OutputDocument::new(false);
        doc.push(with_flags).unwrap();

        let text = render(&doc);
        assert!(text.contains("ServerFileName = app.exe\nFlags = critical\nRegistryKey = "));

        let without = render(&single_doc(false));
        assert!(!without.contains("Flags"));
    }

    #[test]
    fn key_order_is_fixed() {
        let text = render(&single_doc(false));
        let keys: Vec<&str> = text
            .lines()
            .skip(1)
            .filter_map(|l| l.split(" = ").next())
            .collect();
        assert_eq!(
            keys,
            [
                "Name",
                "ProductVersion",
                "URL",
                "Size",
                "SHA256",
                "MD5",
                "ServerFileName",
                "RegistryKey",
                "Version"
            ]
        );
    }

    #[test]
    fn sections_separated_by_one_blank_line() {
        let mut doc = OutputDocument::new(false);
        doc.push(descriptor_named("first")).unwrap();
        doc.push(descriptor_named("second")).unwrap();

        let text = render(&doc);
        assert!(text.contains("Version = 1.0\n\n[second]\n"));
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn values_are_not_quoted_or_escaped() {
        let mut d = descriptor_named("app");
        d.display_name = "My App (x64) [beta]".to_string();
        d.registry_key = "SOFTWARE\\Vendor\\App \"Pro\"".to_string();
        let mut doc = OutputDocument::new(false);
        doc.push(d).unwrap();

        let text = render(&doc);
        assert!(text.contains("Name = My App (x64) [beta]\n"));
        assert!(text.contains("RegistryKey = SOFTWARE\\Vendor\\App \"Pro\"\n"));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let doc = single_doc(true);
        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn empty_document_renders_to_nothing() {
        assert_eq!(render(&OutputDocument::new(false)), "");
    }
}
