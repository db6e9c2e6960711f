use std::io::Write;

use super::encoder::Encoder;
use super::writer::Writer;
use crate::engine::{View, ViewKind};
use crate::error::Result;

pub struct Output<W> {
    writer: Box<dyn Writer<W>>,
    encoder: Box<dyn Encoder>,
}

impl<W: Write> Output<W> {
    pub fn new(writer: Box<dyn Writer<W>>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }

    pub fn write(&mut self, kind: ViewKind, view: &View) -> Result<()> {
        let buf = self.encoder.encode(kind, view)?;

        self.writer.write(&buf).map_err(|e| ("writer failed", e))?;

        Ok(())
    }
}
