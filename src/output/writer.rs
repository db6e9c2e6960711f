use std::io::{self, Write};

pub trait Writer<W: Write> {
    fn write(&mut self, buf: &[u8]) -> io::Result<()>;

    fn into_inner(self) -> W
    where
        Self: Sized;
}

/// Writes each encoded view as one delimiter-terminated chunk.
pub struct LineWriter<W> {
    inner: W,
    delim: u8,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }
}

impl<W: Write> Writer<W> for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner.write_all(buf)?;
        self.inner.write_all(&[self.delim])
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_writer_delimits_chunks() -> io::Result<()> {
        let mut writer = LineWriter::new(Vec::new());
        writer.write(b"{}")?;
        writer.write(b"[]")?;
        assert_eq!(b"{}\n[]\n".to_vec(), writer.into_inner());
        Ok(())
    }
}
