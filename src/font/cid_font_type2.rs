use super::{cid::CidToGidMap, descriptor::FontDescriptor};

/// A TrueType-class CIDFont (Subtype CIDFontType2).
///
/// TrueType font programs have no native notion of CIDs; glyph
/// descriptions are identified by glyph index values internal to the font.
/// The CIDFont dictionary's CIDToGIDMap entry connects the two, and is
/// only meaningful when the font program is embedded in the file
#[derive(Debug)]
pub struct CidFontType2 {
    cid_to_gid: CidToGid,
}

/// The resolved form of the CIDToGIDMap entry
#[derive(Debug)]
enum CidToGid {
    Identity,
    /// Glyph indices indexed by CID
    Explicit(Vec<u16>),
}

impl CidFontType2 {
    pub(crate) fn new(map: CidToGidMap, descriptor: &FontDescriptor) -> Self {
        let cid_to_gid = match map {
            CidToGidMap::Identity => CidToGid::Identity,
            CidToGidMap::Stream(stream) => {
                if descriptor.font_file_two.is_some() {
                    CidToGid::Explicit(
                        stream
                            .bytes()
                            .chunks_exact(2)
                            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                            .collect(),
                    )
                } else {
                    // it is not meaningful to refer to glyph indices in an
                    // external font program; the map shall be ignored
                    log::warn!("ignoring explicit CIDToGIDMap: font program is not embedded");
                    CidToGid::Identity
                }
            }
        };

        Self { cid_to_gid }
    }

    pub fn glyph_index(&self, cid: u16) -> u16 {
        match &self.cid_to_gid {
            CidToGid::Identity => cid,
            // CIDs past the end of the table select the missing glyph
            CidToGid::Explicit(gids) => gids.get(usize::from(cid)).copied().unwrap_or(0),
        }
    }
}
