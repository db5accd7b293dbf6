mod error;

pub use error::PdfRenderError;

use crate::geometry::Point;

/// Colors are packed `0xAARRGGBB`
pub struct Color;

impl Color {
    pub const BLACK: u32 = 0xff_00_00_00;
    pub const RED: u32 = 0xff_ff_00_00;
    pub const GREEN: u32 = 0xff_00_ff_00;
    pub const BLUE: u32 = 0xff_00_00_ff;
}

/// The surface glyphs are painted onto.
///
/// Outline interpretation and rasterization live outside this crate. An
/// implementation receives the glyph index selected by the font's CID
/// addressing rule and may report `RenderingUnsupported` when it has no
/// interpreter for the underlying font program
pub trait GlyphPainter {
    fn draw_glyph(
        &mut self,
        glyph_index: u16,
        position: Point,
        font_size: f32,
        color: u32,
    ) -> Result<(), PdfRenderError>;
}
