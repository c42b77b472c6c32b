// Document containers: reads the body markup out of .docx files.

pub mod loader;

/// Writes a minimal .docx whose `word/document.xml` holds `body`.
#[cfg(test)]
pub(crate) fn write_test_docx(path: &std::path::Path, body: &str) {
    use std::io::Write;

    let mut writer = zip::ZipWriter::new(std::fs::File::create(path).unwrap());
    writer
        .start_file(loader::DOCUMENT_ENTRY, zip::write::FileOptions::default())
        .unwrap();
    writer.write_all(body.as_bytes()).unwrap();
    writer.finish().unwrap();
}
