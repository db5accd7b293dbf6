use crate::{
    error::{ParseError, PdfResult},
    geometry::Point,
    objects::{Dictionary, Object},
    render::{GlyphPainter, PdfRenderError},
    Resolve,
};

use super::{
    cid::{CidFontDictionary, CidFontSubtype, CidSystemInfo, CidWidths},
    cid_font_type0::CidFontType0,
    cid_font_type2::CidFontType2,
    descriptor::FontDescriptor,
};

/// A composite font, also called a Type 0 font, is one whose glyphs are
/// obtained from a fontlike object called a CIDFont. A composite font shall
/// be represented by a font dictionary whose Subtype value is Type0. The
/// Type 0 font is known as the root font, and its associated CIDFont is
/// called its descendant.
///
/// Only the Identity-H encoding is supported: character codes are fixed
/// two-byte big-endian values used directly as CIDs
#[derive(Debug)]
pub struct Type0Font {
    /// The name of the font. If the descendant is a Type 0 CIDFont, this
    /// name should be the concatenation of the CIDFont's BaseFont name, a
    /// hyphen, and the CMap name given in the Encoding entry. If the
    /// descendant is a Type 2 CIDFont, this name should be the same as the
    /// CIDFont's BaseFont name
    base_font: String,

    /// The character collection the descendant's CIDs are drawn from
    system_info: CidSystemInfo,

    /// Per-CID advance widths, combining the W array with the DW default
    widths: CidWidths,

    /// How CIDs select glyphs in the descendant's font program
    cid_font_type: CidFontType,

    descriptor: FontDescriptor,

    font_size: f32,
}

/// The two glyph-addressing strategies a descendant CIDFont can use.
///
/// The set is closed by ISO 32000; a new strategy means a new variant and
/// the compiler pointing at every match that must learn about it
#[derive(Debug)]
pub enum CidFontType {
    /// Glyph procedures addressed through an embedded CFF program's charset
    Type0(CidFontType0),

    /// Glyph indices of a TrueType program addressed through CIDToGIDMap
    Type2(CidFontType2),
}

impl CidFontType {
    /// The glyph index `cid` selects in the underlying font program
    pub fn glyph_index(&self, cid: u16) -> Result<u16, PdfRenderError> {
        match self {
            Self::Type0(cff) => cff.glyph_index(cid),
            Self::Type2(true_type) => Ok(true_type.glyph_index(cid)),
        }
    }
}

impl Type0Font {
    const TYPE: &'static str = "Font";

    pub fn from_dict(
        mut dict: Dictionary,
        resolver: &mut dyn Resolve,
        font_size: f32,
    ) -> PdfResult<Self> {
        dict.expect_type(Self::TYPE, resolver, true)?;

        let subtype = dict.expect_name("Subtype", resolver)?;
        if subtype != "Type0" {
            anyhow::bail!(ParseError::MismatchedTypeKey {
                expected: "Type0",
                found: subtype,
            });
        }

        let base_font = dict.expect_name("BaseFont", resolver)?;

        // only the fixed two-byte identity mapping from character codes to
        // CIDs is supported; an embedded CMap stream or any other
        // predefined CMap cannot be silently ignored
        let encoding = dict
            .get_object("Encoding")
            .ok_or(ParseError::MissingRequiredKey { key: "Encoding" })?;
        match resolver.resolve(encoding)? {
            Object::Name(ref name) if name == "Identity-H" => {}
            _ => anyhow::bail!(ParseError::UnsupportedFeature {
                feature: "Type 0 font encodings other than Identity-H",
            }),
        }

        // a one-element array; only the single descendant is modeled
        let mut descendant_fonts = dict.expect_arr("DescendantFonts", resolver)?;
        if descendant_fonts.is_empty() {
            anyhow::bail!(ParseError::ArrayOfInvalidLength {
                expected: 1,
                found: descendant_fonts,
            });
        }
        let descendant = resolver.assert_dict(descendant_fonts.remove(0))?;

        let CidFontDictionary {
            subtype,
            base_font: _,
            cid_system_info,
            font_descriptor,
            widths,
            cid_to_gid_map,
        } = CidFontDictionary::from_dict(descendant, resolver)?;

        let cid_font_type = match subtype {
            CidFontSubtype::CidFontType0 => {
                CidFontType::Type0(CidFontType0::new(&font_descriptor))
            }
            CidFontSubtype::CidFontType2 => {
                CidFontType::Type2(CidFontType2::new(cid_to_gid_map, &font_descriptor))
            }
        };

        Ok(Self {
            base_font,
            system_info: cid_system_info,
            widths,
            cid_font_type,
            descriptor: font_descriptor,
            font_size,
        })
    }

    pub fn base_font(&self) -> &str {
        &self.base_font
    }

    pub fn system_info(&self) -> &CidSystemInfo {
        &self.system_info
    }

    pub fn descriptor(&self) -> &FontDescriptor {
        &self.descriptor
    }

    pub fn cid_font_type(&self) -> &CidFontType {
        &self.cid_font_type
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// The advance width for `cid`, in text space units
    pub fn get_char_width(&self, cid: u16) -> f32 {
        self.widths.get(cid)
    }

    /// Lays out `string` as a sequence of two-byte CIDs starting at
    /// `position`, painting each glyph and returning the pen position after
    /// the final one.
    ///
    /// Glyphs whose outlines cannot be resolved yet are skipped, but their
    /// advance is still applied so the rest of the string lands where it
    /// should
    pub fn draw_string(
        &self,
        painter: &mut dyn GlyphPainter,
        mut position: Point,
        string: &[u8],
        color: u32,
        font_size: f32,
        character_spacing: f32,
        word_spacing: f32,
        horizontal_scaling: f32,
    ) -> PdfResult<Point> {
        // word spacing applies only to the single-byte code 32, which
        // cannot occur in a two-byte encoding
        let _ = word_spacing;

        if string.len() % 2 != 0 {
            log::warn!("truncated two-byte character code at end of string");
        }

        for code in string.chunks_exact(2) {
            let cid = u16::from_be_bytes([code[0], code[1]]);

            match self.cid_font_type.glyph_index(cid) {
                Ok(glyph_index) => {
                    if let Err(PdfRenderError::RenderingUnsupported { reason }) =
                        painter.draw_glyph(glyph_index, position, font_size, color)
                    {
                        log::warn!("skipping glyph for CID {}: {}", cid, reason);
                    }
                }
                Err(PdfRenderError::RenderingUnsupported { reason }) => {
                    log::warn!("skipping glyph for CID {}: {}", cid, reason);
                }
            }

            let advance =
                (self.widths.get(cid) * font_size + character_spacing) * horizontal_scaling;

            position.x += advance;
        }

        Ok(position)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        render::Color,
        resolve::TestResolver,
        stream::{Stream, StreamDict},
    };

    fn name(s: &str) -> Object {
        Object::Name(s.to_owned())
    }

    fn int(n: i32) -> Object {
        Object::Integer(n)
    }

    fn dict(entries: Vec<(&str, Object)>) -> Dictionary {
        Dictionary::new(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value))
                .collect(),
        )
    }

    fn descriptor_dict(embedded_true_type: bool) -> Dictionary {
        let mut entries = vec![
            ("Type", name("FontDescriptor")),
            ("FontName", name("Test")),
            ("Flags", int(4)),
            ("ItalicAngle", int(0)),
        ];

        if embedded_true_type {
            entries.push((
                "FontFile2",
                Object::Stream(Stream::new(
                    StreamDict {
                        len: 4,
                        other: dict(Vec::new()),
                    },
                    vec![0x00, 0x01, 0x00, 0x00],
                )),
            ));
        }

        dict(entries)
    }

    fn descendant_dict(subtype: &str, embedded_true_type: bool) -> Dictionary {
        dict(vec![
            ("Subtype", name(subtype)),
            ("BaseFont", name("Test")),
            (
                "CIDSystemInfo",
                Object::Dictionary(dict(vec![
                    ("Registry", Object::String("Adobe".to_owned())),
                    ("Ordering", Object::String("Identity".to_owned())),
                    ("Supplement", int(0)),
                ])),
            ),
            (
                "FontDescriptor",
                Object::Dictionary(descriptor_dict(embedded_true_type)),
            ),
            (
                "W",
                Object::Array(vec![int(1), Object::Array(vec![int(500)])]),
            ),
        ])
    }

    fn type0_dict(descendant: Dictionary) -> Dictionary {
        dict(vec![
            ("Type", name("Font")),
            ("Subtype", name("Type0")),
            ("BaseFont", name("Test-Identity-H")),
            ("Encoding", name("Identity-H")),
            (
                "DescendantFonts",
                Object::Array(vec![Object::Dictionary(descendant)]),
            ),
        ])
    }

    fn true_type_font() -> Type0Font {
        Type0Font::from_dict(
            type0_dict(descendant_dict("CIDFontType2", true)),
            &mut TestResolver,
            12.0,
        )
        .unwrap()
    }

    struct RecordingPainter {
        glyphs: Vec<(u16, Point)>,
    }

    impl GlyphPainter for RecordingPainter {
        fn draw_glyph(
            &mut self,
            glyph_index: u16,
            position: Point,
            _font_size: f32,
            _color: u32,
        ) -> Result<(), PdfRenderError> {
            self.glyphs.push((glyph_index, position));
            Ok(())
        }
    }

    struct UnsupportedPainter;

    impl GlyphPainter for UnsupportedPainter {
        fn draw_glyph(
            &mut self,
            _glyph_index: u16,
            _position: Point,
            _font_size: f32,
            _color: u32,
        ) -> Result<(), PdfRenderError> {
            Err(PdfRenderError::RenderingUnsupported {
                reason: "no outline interpreter",
            })
        }
    }

    #[test]
    fn constructs_from_a_minimal_dictionary() {
        let font = true_type_font();

        assert_eq!(font.base_font(), "Test-Identity-H");
        assert_eq!(font.system_info().registry, "Adobe");
        assert_eq!(font.system_info().ordering, "Identity");
        assert_eq!(font.system_info().supplement, 0);
        assert_eq!(font.font_size(), 12.0);
        assert_eq!(font.get_char_width(1), 0.5);
        assert_eq!(font.get_char_width(2), 1.0);
    }

    #[test]
    fn default_width_comes_from_dw() {
        let descendant = dict(vec![
            ("Subtype", name("CIDFontType2")),
            ("BaseFont", name("Test")),
            (
                "CIDSystemInfo",
                Object::Dictionary(dict(vec![
                    ("Registry", Object::String("Adobe".to_owned())),
                    ("Ordering", Object::String("Identity".to_owned())),
                    ("Supplement", int(0)),
                ])),
            ),
            ("FontDescriptor", Object::Dictionary(descriptor_dict(true))),
            ("DW", int(750)),
        ]);

        let font = Type0Font::from_dict(type0_dict(descendant), &mut TestResolver, 12.0).unwrap();

        assert_eq!(font.get_char_width(42), 0.75);
    }

    #[test]
    fn unknown_descendant_subtype_fails_construction() {
        let err = Type0Font::from_dict(
            type0_dict(descendant_dict("CIDFontType7", true)),
            &mut TestResolver,
            12.0,
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::UnrecognizedVariant { .. })
        ));
    }

    #[test]
    fn non_identity_encoding_is_unsupported() {
        let font_dict = dict(vec![
            ("Type", name("Font")),
            ("Subtype", name("Type0")),
            ("BaseFont", name("Test-UniJIS")),
            ("Encoding", name("UniJIS-UCS2-H")),
            (
                "DescendantFonts",
                Object::Array(vec![Object::Dictionary(descendant_dict(
                    "CIDFontType2",
                    true,
                ))]),
            ),
        ]);

        let err = Type0Font::from_dict(font_dict, &mut TestResolver, 12.0).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::UnsupportedFeature { .. })
        ));
    }

    #[test]
    fn missing_encoding_is_malformed() {
        let font_dict = dict(vec![
            ("Type", name("Font")),
            ("Subtype", name("Type0")),
            ("BaseFont", name("Test")),
            (
                "DescendantFonts",
                Object::Array(vec![Object::Dictionary(descendant_dict(
                    "CIDFontType2",
                    true,
                ))]),
            ),
        ]);

        let err = Type0Font::from_dict(font_dict, &mut TestResolver, 12.0).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::MissingRequiredKey { key: "Encoding" })
        ));
    }

    #[test]
    fn draw_string_accumulates_advances() {
        let font = true_type_font();
        let mut painter = RecordingPainter { glyphs: Vec::new() };

        // CIDs 1 and 2: widths 0.5 and the default 1.0
        let end = font
            .draw_string(
                &mut painter,
                Point::origin(),
                &[0x00, 0x01, 0x00, 0x02],
                Color::BLACK,
                12.0,
                1.0,
                0.0,
                1.0,
            )
            .unwrap();

        assert_eq!(
            painter.glyphs,
            vec![(1, Point::origin()), (2, Point::new(7.0, 0.0))]
        );
        assert_eq!(end, Point::new(20.0, 0.0));
    }

    #[test]
    fn draw_string_applies_horizontal_scaling() {
        let font = true_type_font();
        let mut painter = RecordingPainter { glyphs: Vec::new() };

        let end = font
            .draw_string(
                &mut painter,
                Point::origin(),
                &[0x00, 0x01, 0x00, 0x02],
                Color::BLACK,
                12.0,
                1.0,
                0.0,
                2.0,
            )
            .unwrap();

        assert_eq!(end, Point::new(40.0, 0.0));
    }

    #[test]
    fn unsupported_outlines_still_advance_the_pen() {
        let font = true_type_font();

        let end = font
            .draw_string(
                &mut UnsupportedPainter,
                Point::origin(),
                &[0x00, 0x01, 0x00, 0x02],
                Color::BLACK,
                12.0,
                1.0,
                0.0,
                1.0,
            )
            .unwrap();

        assert_eq!(end, Point::new(20.0, 0.0));
    }

    #[test]
    fn cff_descendant_without_interpreted_program_advances_without_painting() {
        let font = Type0Font::from_dict(
            type0_dict(descendant_dict("CIDFontType0", false)),
            &mut TestResolver,
            12.0,
        )
        .unwrap();
        let mut painter = RecordingPainter { glyphs: Vec::new() };

        let end = font
            .draw_string(
                &mut painter,
                Point::origin(),
                &[0x00, 0x01, 0x00, 0x02],
                Color::BLACK,
                12.0,
                1.0,
                0.0,
                1.0,
            )
            .unwrap();

        assert!(painter.glyphs.is_empty());
        assert_eq!(end, Point::new(20.0, 0.0));
    }
}
