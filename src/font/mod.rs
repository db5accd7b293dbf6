pub use self::{
    cid::{CidFontDictionary, CidFontSubtype, CidSystemInfo, CidWidths},
    cid_font_type0::CidFontType0,
    cid_font_type2::CidFontType2,
    descriptor::{FontDescriptor, FontDescriptorFlags},
    embedded::{EmbeddedFontDictionary, FontFile3, FontFile3Subtype, TrueTypeFontFile},
    type0::{CidFontType, Type0Font},
};

pub mod cff;
mod cid;
mod cid_font_type0;
mod cid_font_type2;
mod descriptor;
mod embedded;
mod type0;
