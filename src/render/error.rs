use core::fmt;

#[derive(Debug)]
pub enum PdfRenderError {
    /// The glyph could not be resolved or rasterized because support for
    /// the selected font program is not available. Raised per glyph; the
    /// caller should skip the glyph and keep rendering
    RenderingUnsupported { reason: &'static str },
}

impl fmt::Display for PdfRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#?}", self)
    }
}

impl std::error::Error for PdfRenderError {}
