use crate::{render::PdfRenderError, stream::Stream};

use super::{cff::CffProgram, descriptor::FontDescriptor};

/// A CFF-class CIDFont (Subtype CIDFontType0).
///
/// ISO 32000 (PDF 2.0) 9.7.4.2 Glyph selection in CIDFonts:
/// "When the CIDFont contains an embedded font program that is represented
///  in the Compact Font Format (CFF), the FontFile3 entry in the font
///  descriptor (...) shall be either CIDFontType0C or OpenType.
///  There are two cases, depending on the contents of the font program:
///  * The "CFF" font program has a Top DICT that uses CIDFont operators:
///    The CIDs shall be used to determine the GID value for the glyph
///    procedure using the charset table in the CFF program. The GID value
///    shall then be used to look up the glyph procedure using the
///    CharStrings INDEX table [...]
///  * The "CFF" font program has a Top DICT that does not use CIDFont
///    operators: The CIDs shall be used directly as GID values, and the
///    glyph procedure shall be retrieved using the CharStrings INDEX"
#[derive(Debug)]
pub struct CidFontType0 {
    /// The embedded font program (FontFile3), if present
    font_file: Option<Stream>,

    /// The addressing view of the embedded program, produced by a CFF
    /// interpreter. Absent until one has run over `font_file`
    program: Option<CffProgram>,
}

impl CidFontType0 {
    pub(crate) fn new(descriptor: &FontDescriptor) -> Self {
        Self {
            font_file: descriptor
                .font_file_three
                .as_ref()
                .map(|font_file| font_file.stream.clone()),
            program: None,
        }
    }

    pub fn with_program(font_file: Option<Stream>, program: CffProgram) -> Self {
        Self {
            font_file,
            program: Some(program),
        }
    }

    /// The raw program bytes a CFF interpreter should consume
    pub fn font_file(&self) -> Option<&Stream> {
        self.font_file.as_ref()
    }

    pub fn glyph_index(&self, cid: u16) -> Result<u16, PdfRenderError> {
        match &self.program {
            Some(program) => Ok(program.glyph_index(cid)),
            None => Err(PdfRenderError::RenderingUnsupported {
                reason: "glyph lookup requires an interpreted CFF font program",
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::font::cff::CffCharset;

    #[test]
    fn lookup_without_a_program_is_unsupported() {
        let cid_font = CidFontType0 {
            font_file: None,
            program: None,
        };

        assert!(matches!(
            cid_font.glyph_index(3),
            Err(PdfRenderError::RenderingUnsupported { .. })
        ));
    }

    #[test]
    fn lookup_goes_through_the_charset_when_cid_keyed() {
        let cid_font = CidFontType0::with_program(
            None,
            CffProgram {
                cid_keyed: true,
                charset: CffCharset::Zero {
                    cids: vec![50, 60, 70],
                },
            },
        );

        assert_eq!(cid_font.glyph_index(60).unwrap(), 2);
        assert_eq!(cid_font.glyph_index(9999).unwrap(), 0);
    }

    #[test]
    fn lookup_is_identity_when_not_cid_keyed() {
        let cid_font = CidFontType0::with_program(
            None,
            CffProgram {
                cid_keyed: false,
                charset: CffCharset::Zero { cids: Vec::new() },
            },
        );

        assert_eq!(cid_font.glyph_index(60).unwrap(), 60);
    }
}
