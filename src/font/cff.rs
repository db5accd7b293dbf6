/*!
 * The view of an embedded CFF font program needed to address glyphs.
 *
 * Parsing the program itself (headers, INDEX structures, DICTs,
 * charstrings) is the outline interpreter's job. Composite fonts only need
 * to know whether the program's Top DICT uses the CIDFont operators and,
 * if so, the charset table connecting glyph indices to CIDs.
 *
 * https://adobe-type-tools.github.io/font-tech-notes/pdfs/5176.CFF.pdf
 */

#[derive(Debug)]
pub struct CffProgram {
    /// Whether the Top DICT carries the CIDFont operators (ROS, CIDCount,
    /// FDArray, ...). Only then does the charset key glyphs by CID
    pub cid_keyed: bool,
    pub charset: CffCharset,
}

impl CffProgram {
    /// The glyph procedure index that `cid` selects in this program's
    /// CharStrings INDEX
    pub fn glyph_index(&self, cid: u16) -> u16 {
        if self.cid_keyed {
            // missing CIDs select .notdef
            self.charset.glyph_index(cid).unwrap_or(0)
        } else {
            cid
        }
    }
}

#[derive(Debug)]
pub enum CffCharset {
    IsoAdobe,
    Expert,
    ExpertSubset,
    Zero { cids: Vec<u16> },
    One(Vec<CharsetRangeOne>),
    Two(Vec<CharsetRangeTwo>),
}

#[derive(Debug)]
pub struct CharsetRangeOne {
    pub first: u16,
    /// Number of glyphs after `first`
    pub count: u8,
}

#[derive(Debug)]
pub struct CharsetRangeTwo {
    pub first: u16,
    /// Number of glyphs after `first`
    pub count: u16,
}

impl CffCharset {
    /// Inverse lookup: the glyph index whose charset entry is `cid`.
    ///
    /// The charset stores one entry per glyph starting at glyph 1; glyph 0
    /// is always `.notdef` and is never listed
    pub fn glyph_index(&self, cid: u16) -> Option<u16> {
        if cid == 0 {
            return Some(0);
        }

        match self {
            // the predefined charsets cannot occur in a CID-keyed program;
            // fall back to the identity ordering
            Self::IsoAdobe | Self::Expert | Self::ExpertSubset => Some(cid),
            Self::Zero { cids } => cids
                .iter()
                .position(|&c| c == cid)
                .map(|idx| idx as u16 + 1),
            Self::One(ranges) => {
                glyph_index_in_ranges(ranges.iter().map(|r| (r.first, u16::from(r.count))), cid)
            }
            Self::Two(ranges) => glyph_index_in_ranges(ranges.iter().map(|r| (r.first, r.count)), cid),
        }
    }
}

/// Each range covers `count + 1` consecutive CIDs mapped to consecutive
/// glyph indices, with the glyph counter carried across ranges
fn glyph_index_in_ranges(
    ranges: impl Iterator<Item = (u16, u16)>,
    cid: u16,
) -> Option<u16> {
    let mut glyph_index = 1u32;

    for (first, count) in ranges {
        let last = u32::from(first) + u32::from(count);

        if (u32::from(first)..=last).contains(&u32::from(cid)) {
            return u16::try_from(glyph_index + u32::from(cid - first)).ok();
        }

        glyph_index += u32::from(count) + 1;
    }

    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn format_zero_lookup() {
        let charset = CffCharset::Zero {
            cids: vec![100, 5, 300],
        };

        assert_eq!(charset.glyph_index(0), Some(0));
        assert_eq!(charset.glyph_index(100), Some(1));
        assert_eq!(charset.glyph_index(5), Some(2));
        assert_eq!(charset.glyph_index(300), Some(3));
        assert_eq!(charset.glyph_index(7), None);
    }

    #[test]
    fn format_one_lookup() {
        let charset = CffCharset::One(vec![CharsetRangeOne {
            first: 100,
            count: 3,
        }]);

        assert_eq!(charset.glyph_index(100), Some(1));
        assert_eq!(charset.glyph_index(103), Some(4));
        assert_eq!(charset.glyph_index(104), None);
    }

    #[test]
    fn format_two_lookup_carries_glyph_counter_across_ranges() {
        let charset = CffCharset::Two(vec![
            CharsetRangeTwo {
                first: 10,
                count: 2,
            },
            CharsetRangeTwo {
                first: 100,
                count: 5,
            },
        ]);

        assert_eq!(charset.glyph_index(12), Some(3));
        assert_eq!(charset.glyph_index(100), Some(4));
        assert_eq!(charset.glyph_index(101), Some(5));
        assert_eq!(charset.glyph_index(99), None);
    }

    #[test]
    fn non_cid_keyed_program_uses_cids_as_glyph_indices() {
        let program = CffProgram {
            cid_keyed: false,
            charset: CffCharset::Zero { cids: vec![17] },
        };

        assert_eq!(program.glyph_index(42), 42);
    }

    #[test]
    fn cid_keyed_program_maps_missing_cids_to_notdef() {
        let program = CffProgram {
            cid_keyed: true,
            charset: CffCharset::Zero { cids: vec![17] },
        };

        assert_eq!(program.glyph_index(17), 1);
        assert_eq!(program.glyph_index(42), 0);
    }
}
