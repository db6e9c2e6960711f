use crate::engine::{View, ViewKind};
use crate::error::Result;

pub trait Encoder {
    fn encode(&self, kind: ViewKind, view: &View) -> Result<Vec<u8>>;
}
