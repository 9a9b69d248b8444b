//! PDF file serialization.
//!
//! Objects are numbered up front so every reference is known before it is
//! written:
//!
//! | Object | Content |
//! |---|---|
//! | 1 | Catalog |
//! | 2 | Page tree |
//! | 3-6 | Fonts F1-F4 |
//! | 7 | Document info |
//! | 8 + 2n | Page n |
//! | 9 + 2n | Content stream of page n |

use std::fmt::Write as _;
use std::io::{self, Write};

use encoding_rs::WINDOWS_1252;
use flate2::Compression;
use flate2::write::ZlibEncoder;

use super::layout::{Font, Page};

const CATALOG: usize = 1;
const PAGES: usize = 2;
const FIRST_FONT: usize = 3;
const INFO: usize = 7;
const FIRST_PAGE: usize = 8;

/// Document-level settings for [`write_pdf`].
#[derive(Debug, Clone)]
pub struct PdfSettings<'a> {
    pub title: &'a str,
    pub producer: &'a str,
    pub width: f64,
    pub height: f64,
    pub compress: bool,
}

/// Serialize laid-out pages to a complete PDF file.
pub fn write_pdf(pages: &[Page], settings: &PdfSettings) -> io::Result<Vec<u8>> {
    let mut w = ObjectWriter::new();

    w.object(CATALOG, format!("<< /Type /Catalog /Pages {PAGES} 0 R >>").as_bytes());

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", page_object(i)))
        .collect();
    w.object(
        PAGES,
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()).as_bytes(),
    );

    for (i, font) in Font::ALL.iter().enumerate() {
        w.object(
            FIRST_FONT + i,
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_font()
            )
            .as_bytes(),
        );
    }

    let mut info = b"<< /Title ".to_vec();
    info.extend(pdf_string(settings.title));
    info.extend(b" /Producer ");
    info.extend(pdf_string(settings.producer));
    info.extend(b" >>");
    w.object(INFO, &info);

    let fonts: String = Font::ALL
        .iter()
        .enumerate()
        .map(|(i, font)| format!("/{} {} 0 R", font.resource(), FIRST_FONT + i))
        .collect::<Vec<_>>()
        .join(" ");

    for (i, page) in pages.iter().enumerate() {
        let id = page_object(i);
        w.object(
            id,
            format!(
                "<< /Type /Page /Parent {PAGES} 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << {fonts} >> >> /Contents {} 0 R >>",
                settings.width,
                settings.height,
                id + 1
            )
            .as_bytes(),
        );
        w.stream(id + 1, &content_stream(page), settings.compress)?;
    }

    Ok(w.finish(INFO))
}

fn page_object(index: usize) -> usize {
    FIRST_PAGE + 2 * index
}

/// Text-showing operators for one page.
fn content_stream(page: &Page) -> Vec<u8> {
    let mut out = Vec::new();
    for run in &page.runs {
        let mut op = String::new();
        let _ = write!(
            op,
            "BT /{} {} Tf {:.2} {:.2} Td ",
            run.font.resource(),
            run.size,
            run.x,
            run.y
        );
        out.extend(op.as_bytes());
        out.extend(pdf_string(&run.text));
        out.extend(b" Tj ET\n");
    }
    out
}

/// A literal string in WinAnsi encoding. Characters outside it become `?`.
pub fn pdf_string(text: &str) -> Vec<u8> {
    let mut out = vec![b'('];
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let (encoded, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        let byte = match encoded.as_ref() {
            [b] if !had_errors => *b,
            _ => b'?',
        };
        match byte {
            b'(' | b')' | b'\\' => out.extend([b'\\', byte]),
            0x20..=0x7e => out.push(byte),
            _ => out.extend(format!("\\{byte:03o}").as_bytes()),
        }
    }
    out.push(b')');
    out
}

/// Appends numbered objects and records their offsets for the xref table.
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.offsets.push((id, self.buf.len()));
        self.buf.extend(format!("{id} 0 obj\n").as_bytes());
        self.buf.extend(body);
        self.buf.extend(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, data: &[u8], compress: bool) -> io::Result<()> {
        let (data, filter) = if compress {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(data)?;
            (encoder.finish()?, " /Filter /FlateDecode")
        } else {
            (data.to_vec(), "")
        };

        let mut body = format!("<< /Length {}{filter} >>\nstream\n", data.len()).into_bytes();
        body.extend(&data);
        body.extend(b"\nendstream");
        self.object(id, &body);
        Ok(())
    }

    fn finish(mut self, info: usize) -> Vec<u8> {
        self.offsets.sort_unstable();
        let size = self.offsets.len() + 1;
        let xref_start = self.buf.len();

        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for (_, offset) in &self.offsets {
            let _ = writeln!(xref, "{offset:010} 00000 n ");
        }
        let _ = write!(
            xref,
            "trailer\n<< /Size {size} /Root {CATALOG} 0 R /Info {info} 0 R >>\nstartxref\n{xref_start}\n%%EOF\n"
        );
        self.buf.extend(xref.as_bytes());
        self.buf
    }
}
