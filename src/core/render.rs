use std::io::{self, Write};

use crate::models::{LineKind, RenderLine};

const INDENT: &[u8] = b"  ";

pub fn write_line<W: Write>(writer: &mut W, line: &RenderLine) -> io::Result<()> {
    for _ in 0..line.depth {
        writer.write_all(INDENT)?;
    }

    match line.kind {
        LineKind::Directory => write!(writer, "📁 {}/", line.name)?,
        LineKind::File => write!(writer, "📄 {}", line.name)?,
        LineKind::PermissionDenied => writer.write_all("❌ Permission denied".as_bytes())?,
    }

    writer.write_all(b"\n")
}
