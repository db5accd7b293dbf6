use std::collections::HashMap;

use crate::{
    error::{ParseError, PdfResult},
    objects::{Dictionary, Object, ObjectType},
    pdf_enum,
    stream::Stream,
    Resolve,
};

use super::descriptor::FontDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidSystemInfo {
    /// A string identifying the issuer of the character collection
    ///
    /// For information about assigning a registry identifier, contact
    /// the Adobe Solutions Network or consult the ASN Web site
    pub registry: String,

    /// A string that uniquely names the character collection within the
    /// specified registry
    pub ordering: String,

    /// The supplement number of the character collection. An original
    /// character collection has a supplement number of 0. Whenever
    /// additional CIDs are assigned in a character collection, the
    /// supplement number shall be increased
    pub supplement: u8,
}

impl CidSystemInfo {
    pub fn from_dict(mut dict: Dictionary, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        let registry = dict.expect_string("Registry", resolver)?;
        let ordering = dict.expect_string("Ordering", resolver)?;
        // supplement values above 0xff are truncated
        let supplement = dict.expect_integer("Supplement", resolver)? as u8;

        Ok(Self {
            registry,
            ordering,
            supplement,
        })
    }
}

pdf_enum!(
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CidFontSubtype {
        /// A CIDFont whose glyph descriptions are based on the Compact
        /// Font Format
        CidFontType0 = "CIDFontType0",

        /// A CIDFont whose glyph descriptions are based on TrueType
        CidFontType2 = "CIDFontType2",
    }
);

/// The descendant of a Type 0 font: the dictionary that carries the actual
/// character collection, width, and glyph-addressing data
#[derive(Debug)]
pub struct CidFontDictionary {
    pub subtype: CidFontSubtype,

    /// The PostScript name of the CIDFont. For Type 0 CIDFonts, this shall
    /// be the value of the CIDFontName entry in the CIDFont program. For
    /// Type 2 CIDFonts, it shall be derived the same way as for a simple
    /// TrueType font
    pub base_font: String,

    /// A dictionary containing entries that define the character collection
    /// of the CIDFont
    pub cid_system_info: CidSystemInfo,

    /// A font descriptor describing the CIDFont's default metrics other
    /// than its glyph widths
    pub font_descriptor: FontDescriptor,

    /// Glyph widths, combining the W array with the DW default
    pub widths: CidWidths,

    pub(crate) cid_to_gid_map: CidToGidMap,
}

impl CidFontDictionary {
    pub fn from_dict(mut dict: Dictionary, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        let subtype = CidFontSubtype::from_str(&dict.expect_name("Subtype", resolver)?)?;
        let base_font = dict.expect_name("BaseFont", resolver)?;
        let cid_system_info =
            CidSystemInfo::from_dict(dict.expect_dict("CIDSystemInfo", resolver)?, resolver)?;
        let font_descriptor =
            FontDescriptor::from_dict(dict.expect_dict("FontDescriptor", resolver)?, resolver)?;
        let default_width = dict.get_integer("DW", resolver)?.unwrap_or(1000) as u16;
        let w = dict.get_arr("W", resolver)?;
        let widths = CidWidths::new(w, default_width, resolver)?;
        let cid_to_gid_map = dict
            .get_object("CIDToGIDMap")
            .map(|obj| CidToGidMap::from_obj(obj, resolver))
            .transpose()?
            .unwrap_or(CidToGidMap::Identity);

        Ok(Self {
            subtype,
            base_font,
            cid_system_info,
            font_descriptor,
            widths,
            cid_to_gid_map,
        })
    }
}

/// Per-CID advance widths.
///
/// The W array's elements have a variable format that can specify
/// individual widths for consecutive CIDs or one width for a range of
/// CIDs; both forms may be interleaved arbitrarily within one array
#[derive(Debug)]
pub struct CidWidths {
    widths: HashMap<u16, u16>,

    /// The width for CIDs the W array does not cover, in glyph space
    ///
    /// Default value: 1000
    default_width: u16,
}

/// The two element kinds a W array interleaves. After a pending first CID,
/// the kind of the next element decides which form applies
#[derive(Debug)]
enum WidthsArrayElement {
    Number(f32),
    Array(Vec<Object>),
}

impl WidthsArrayElement {
    fn from_obj(obj: Object, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        Ok(match resolver.resolve(obj)? {
            Object::Integer(n) => Self::Number(n as f32),
            Object::Real(n) => Self::Number(n),
            Object::Array(arr) => Self::Array(arr),
            found => anyhow::bail!(ParseError::MismatchedObjectTypeAny {
                expected: &[ObjectType::Integer, ObjectType::Real, ObjectType::Array],
                found,
            }),
        })
    }
}

impl CidWidths {
    pub fn new(
        arr: Option<Vec<Object>>,
        default_width: u16,
        resolver: &mut dyn Resolve,
    ) -> PdfResult<Self> {
        let elements = arr
            .unwrap_or_default()
            .into_iter()
            .map(|obj| WidthsArrayElement::from_obj(obj, resolver))
            .collect::<PdfResult<Vec<WidthsArrayElement>>>()?;

        let mut widths = HashMap::new();
        let mut elements = elements.into_iter();

        while let Some(element) = elements.next() {
            let first = match element {
                WidthsArrayElement::Number(n) => n as u16,
                WidthsArrayElement::Array(found) => {
                    anyhow::bail!(ParseError::MismatchedObjectType {
                        expected: ObjectType::Integer,
                        found: Object::Array(found),
                    })
                }
            };

            match elements.next() {
                // c [w1 w2 ... wn]: widths for consecutive CIDs starting
                // at c
                Some(WidthsArrayElement::Array(run)) => {
                    let mut code = first;
                    for obj in run {
                        widths.insert(code, resolver.assert_number(obj)? as u16);
                        code = code.wrapping_add(1);
                    }
                }
                // c_first c_last w: one width for an inclusive CID range
                Some(WidthsArrayElement::Number(last)) => {
                    let width = match elements.next() {
                        Some(WidthsArrayElement::Number(w)) => w as u16,
                        Some(WidthsArrayElement::Array(found)) => {
                            anyhow::bail!(ParseError::MismatchedObjectType {
                                expected: ObjectType::Integer,
                                found: Object::Array(found),
                            })
                        }
                        None => anyhow::bail!(ParseError::UnexpectedEof),
                    };

                    for code in first..=(last as u16) {
                        widths.insert(code, width);
                    }
                }
                None => anyhow::bail!(ParseError::UnexpectedEof),
            }
        }

        Ok(Self {
            widths,
            default_width,
        })
    }

    /// The horizontal displacement for `cid` in text space units
    pub fn get(&self, cid: u16) -> f32 {
        self.widths
            .get(&cid)
            .copied()
            .unwrap_or(self.default_width) as f32
            / 1000.0
    }
}

/// A specification of the mapping from CIDs to glyph indices. If the value
/// is a stream, the glyph index for a particular CID value c shall be a
/// 2-byte value stored in bytes 2 × c and 2 × c + 1, where the first byte
/// shall be the high-order byte. If the value is a name, it shall be
/// Identity.
///
/// Default value: Identity
///
/// This entry may appear only in a Type 2 CIDFont whose associated TrueType
/// font program is embedded in the PDF file
#[derive(Debug, Clone)]
pub(crate) enum CidToGidMap {
    Identity,
    Stream(Stream),
}

impl CidToGidMap {
    pub fn from_obj(obj: Object, resolver: &mut dyn Resolve) -> PdfResult<Self> {
        Ok(match resolver.resolve(obj)? {
            Object::Name(ref name) if name == "Identity" => Self::Identity,
            Object::Stream(stream) => Self::Stream(stream),
            _ => anyhow::bail!(ParseError::UnsupportedFeature {
                feature: "CIDToGIDMap entries other than a stream or the name Identity",
            }),
        })
    }
}
