use crate::{error::PdfResult, objects::Dictionary, pdf_enum, stream::Stream, Resolve};

/// Entries common to all embedded font-program streams
#[derive(Debug, Clone)]
pub struct EmbeddedFontDictionary {
    /// The length in bytes of the clear-text portion of a Type 1 font
    /// program, or the entire TrueType font program, after it has been
    /// decoded using the filters specified by the stream's Filter entry,
    /// if any
    pub length_one: Option<u32>,

    /// The length in bytes of the encrypted portion of a Type 1 font
    /// program after it has been decoded
    pub length_two: Option<u32>,

    /// The length in bytes of the fixed-content portion of a Type 1 font
    /// program after it has been decoded
    pub length_three: Option<u32>,
}

impl EmbeddedFontDictionary {
    pub fn from_dict(dict: &mut Dictionary, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        let length_one = dict.get_unsigned_integer("Length1", resolver)?;
        let length_two = dict.get_unsigned_integer("Length2", resolver)?;
        let length_three = dict.get_unsigned_integer("Length3", resolver)?;

        Ok(Self {
            length_one,
            length_two,
            length_three,
        })
    }
}

/// TrueType font program, as described in the TrueType Reference Manual.
/// This entry may appear in the font descriptor for a CIDFontType2 CIDFont
/// dictionary
#[derive(Debug, Clone)]
pub struct TrueTypeFontFile {
    pub dict: EmbeddedFontDictionary,
    pub stream: Stream,
}

impl TrueTypeFontFile {
    pub fn from_stream(mut stream: Stream, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        let dict = EmbeddedFontDictionary::from_dict(&mut stream.dict.other, resolver)?;

        Ok(Self { dict, stream })
    }
}

pdf_enum!(
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FontFile3Subtype {
        /// Type 0 CIDFont program represented in the Compact Font Format,
        /// as described in Adobe Technical Note #5176
        CidFontType0C = "CIDFontType0C",

        /// OpenType font program: an extension of TrueType that allows
        /// inclusion of font programs that use the Compact Font Format
        OpenType = "OpenType",
    }
);

/// A CFF-class font program (FontFile3). In the descriptor of a CIDFont
/// the stream's Subtype shall be either CIDFontType0C or OpenType
#[derive(Debug, Clone)]
pub struct FontFile3 {
    pub subtype: FontFile3Subtype,
    pub dict: EmbeddedFontDictionary,
    pub stream: Stream,
}

impl FontFile3 {
    pub fn from_stream(mut stream: Stream, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        let subtype = FontFile3Subtype::from_str(&stream.dict.other.expect_name("Subtype", resolver)?)?;
        let dict = EmbeddedFontDictionary::from_dict(&mut stream.dict.other, resolver)?;

        Ok(Self {
            subtype,
            dict,
            stream,
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::{
        error::ParseError,
        objects::Object,
        resolve::TestResolver,
        stream::{Stream, StreamDict},
    };

    fn program_stream(subtype: &str) -> Stream {
        Stream::new(
            StreamDict {
                len: 0,
                other: Dictionary::new(HashMap::from([(
                    "Subtype".to_owned(),
                    Object::Name(subtype.to_owned()),
                )])),
            },
            Vec::new(),
        )
    }

    #[test]
    fn font_file_3_accepts_cid_keyed_cff_and_opentype() {
        let cff = FontFile3::from_stream(program_stream("CIDFontType0C"), &mut TestResolver)
            .unwrap();
        let open_type =
            FontFile3::from_stream(program_stream("OpenType"), &mut TestResolver).unwrap();

        assert_eq!(cff.subtype, FontFile3Subtype::CidFontType0C);
        assert_eq!(open_type.subtype, FontFile3Subtype::OpenType);
    }

    #[test]
    fn font_file_3_rejects_other_subtypes() {
        let err = FontFile3::from_stream(program_stream("Type1C"), &mut TestResolver).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::UnrecognizedVariant { .. })
        ));
    }
}
