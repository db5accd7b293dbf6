use std::fmt;

use crate::{objects::Dictionary, PdfResult, Resolve};

/// A stream's bytes are stored with any stream filters already applied;
/// decoding is the document model's concern, not this crate's
#[derive(Clone)]
pub struct Stream {
    pub(crate) dict: StreamDict,
    pub(crate) stream: Vec<u8>,
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("dict", &self.dict)
            .field("stream", &format!("[ {} bytes ]", self.stream.len()))
            .finish()
    }
}

impl Stream {
    pub fn new(dict: StreamDict, bytes: Vec<u8>) -> Self {
        Self {
            dict,
            stream: bytes,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.stream
    }
}

#[derive(Debug, Clone)]
pub struct StreamDict {
    pub len: usize,

    /// Entries not consumed by the stream itself, e.g. the `Subtype` of an
    /// embedded font program
    pub other: Dictionary,
}

impl StreamDict {
    pub fn from_dict(mut dict: Dictionary, resolver: &mut dyn Resolve) -> PdfResult<StreamDict> {
        let len = dict.expect_integer("Length", resolver)? as usize;

        Ok(StreamDict { len, other: dict })
    }
}
