//! Line/column bookkeeping.

use loxt_ir::Location;

/// Walks the source once, front to back, turning byte offsets into
/// [`Location`]s.
///
/// Every character between the previous position and the requested offset
/// is consumed, so characters inside comments, strings and skipped
/// whitespace all move the line and column. Columns count characters, not
/// bytes.
pub(crate) struct LocationTracker<'src> {
    source: &'src str,
    loc: Location,
}

impl<'src> LocationTracker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        LocationTracker {
            source,
            loc: Location::START,
        }
    }

    /// Advance to byte `offset` and return the location there.
    ///
    /// `offset` must be a char boundary at or after the current position.
    pub(crate) fn advance_to(&mut self, offset: usize) -> Location {
        let start = self.loc.offset as usize;
        debug_assert!(offset >= start, "location tracker moved backwards");
        for ch in self.source[start..offset].chars() {
            if ch == '\n' {
                self.loc.line += 1;
                self.loc.column = 1;
            } else {
                self.loc.column += 1;
            }
        }
        self.loc.offset = to_u32(offset);
        self.loc
    }
}

/// Source offsets are stored as `u32`; `lex` rejects larger inputs up front.
#[inline]
fn to_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or_else(|_| panic!("source offset {offset} exceeds u32::MAX"))
}
