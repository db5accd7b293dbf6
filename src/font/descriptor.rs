use std::fmt;

use crate::{data_structures::Rectangle, error::PdfResult, objects::Dictionary, Resolve};

use super::embedded::{FontFile3, TrueTypeFontFile};

/// Metrics and attributes of a CIDFont other than its glyph widths
#[derive(Debug)]
pub struct FontDescriptor {
    /// The PostScript name of the font. This name shall be the same as the
    /// value of BaseFont in the CIDFont dictionary that refers to this font
    /// descriptor
    pub font_name: String,

    /// A byte string specifying the preferred font family name
    pub font_family: Option<String>,

    /// A collection of flags defining various characteristics of the font
    pub flags: FontDescriptorFlags,

    /// A rectangle, expressed in the glyph coordinate system, that shall
    /// specify the font bounding box
    pub font_bounding_box: Option<Rectangle>,

    /// The angle, expressed in degrees counterclockwise from the vertical,
    /// of the dominant vertical strokes of the font.
    ///
    /// The value shall be negative for fonts that slope to the right, as
    /// almost all italic fonts do
    pub italic_angle: f32,

    /// The maximum height above the baseline reached by glyphs in this
    /// font, excluding accented characters
    pub ascent: Option<f32>,

    /// The maximum depth below the baseline reached by glyphs in this font
    ///
    /// The value shall be a negative number
    pub descent: Option<f32>,

    /// The vertical coordinate of the top of flat capital letters, measured
    /// from the baseline
    pub cap_height: Option<f32>,

    /// The thickness, measured horizontally, of the dominant vertical stems
    /// of glyphs in the font
    pub stem_v: Option<f32>,

    /// The width to use for character codes whose widths are not specified
    ///
    /// Default value: 0
    pub missing_width: f32,

    /// A stream containing a TrueType font program
    pub font_file_two: Option<TrueTypeFontFile>,

    /// A stream containing a CFF-class font program, its format named by
    /// the Subtype entry in the stream dictionary
    pub font_file_three: Option<FontFile3>,
}

impl FontDescriptor {
    const TYPE: &'static str = "FontDescriptor";

    pub fn from_dict(mut dict: Dictionary, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        dict.expect_type(Self::TYPE, resolver, true)?;

        let font_name = dict.expect_name("FontName", resolver)?;
        let font_family = dict.get_string("FontFamily", resolver)?;
        let flags = FontDescriptorFlags(dict.expect_unsigned_integer("Flags", resolver)?);
        let font_bounding_box = dict
            .get_arr("FontBBox", resolver)?
            .map(|arr| Rectangle::from_arr(arr, resolver))
            .transpose()?;
        let italic_angle = dict.expect_number("ItalicAngle", resolver)?;
        let ascent = dict.get_number("Ascent", resolver)?;
        let descent = dict.get_number("Descent", resolver)?;
        let cap_height = dict.get_number("CapHeight", resolver)?;
        let stem_v = dict.get_number("StemV", resolver)?;
        let missing_width = dict.get_number("MissingWidth", resolver)?.unwrap_or(0.0);
        let font_file_two = dict
            .get_stream("FontFile2", resolver)?
            .map(|stream| TrueTypeFontFile::from_stream(stream, resolver))
            .transpose()?;
        let font_file_three = dict
            .get_stream("FontFile3", resolver)?
            .map(|stream| FontFile3::from_stream(stream, resolver))
            .transpose()?;

        Ok(Self {
            font_name,
            font_family,
            flags,
            font_bounding_box,
            italic_angle,
            ascent,
            descent,
            cap_height,
            stem_v,
            missing_width,
            font_file_two,
            font_file_three,
        })
    }
}

#[derive(Clone, Copy)]
pub struct FontDescriptorFlags(u32);

impl fmt::Debug for FontDescriptorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

impl FontDescriptorFlags {
    const FIXED_PITCH: u32 = 1 << 0;
    const SERIF: u32 = 1 << 1;
    const SYMBOLIC: u32 = 1 << 2;
    const SCRIPT: u32 = 1 << 3;
    const ITALIC: u32 = 1 << 6;
    const FORCE_BOLD: u32 = 1 << 18;

    /// All glyphs have the same width
    pub const fn is_fixed_pitch(&self) -> bool {
        self.0 & Self::FIXED_PITCH != 0
    }

    /// Glyphs have serifs, which are short strokes drawn at an angle on the
    /// top and bottom of glyph stems
    pub const fn is_serif(&self) -> bool {
        self.0 & Self::SERIF != 0
    }

    /// The font contains glyphs outside the Standard Latin character set
    pub const fn is_symbolic(&self) -> bool {
        self.0 & Self::SYMBOLIC != 0
    }

    /// Glyphs resemble cursive handwriting
    pub const fn is_script(&self) -> bool {
        self.0 & Self::SCRIPT != 0
    }

    /// Glyphs have dominant vertical strokes that are slanted
    pub const fn is_italic(&self) -> bool {
        self.0 & Self::ITALIC != 0
    }

    /// Bold glyphs shall be painted with extra pixels even at very small
    /// sizes
    pub const fn is_force_bold(&self) -> bool {
        self.0 & Self::FORCE_BOLD != 0
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::{error::ParseError, objects::Object, resolve::TestResolver};

    #[test]
    fn flags_are_decoded_from_the_bitfield() {
        let flags = FontDescriptorFlags(0b100_0101);

        assert!(flags.is_fixed_pitch());
        assert!(!flags.is_serif());
        assert!(flags.is_symbolic());
        assert!(flags.is_italic());
        assert!(!flags.is_force_bold());
    }

    #[test]
    fn missing_flags_entry_is_an_error() {
        let dict = Dictionary::new(HashMap::from([
            (
                "Type".to_owned(),
                Object::Name("FontDescriptor".to_owned()),
            ),
            ("FontName".to_owned(), Object::Name("Test".to_owned())),
            ("ItalicAngle".to_owned(), Object::Integer(0)),
        ]));

        let err = FontDescriptor::from_dict(dict, &mut TestResolver).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::MissingRequiredKey { key: "Flags" })
        ));
    }
}
