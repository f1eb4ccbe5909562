/// A point in source text.
///
/// All values are 0-based. Columns are tracked both as UTF-8 character
/// counts (what editors usually display) and as UTF-16 code units (what LSP
/// clients and JavaScript-hosted engines expect). For ASCII text the two
/// columns are equal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct SourcePosition {
    line: u32,
    col_utf8: u32,
    col_utf16: u32,
    byte_offset: u32,
}

impl SourcePosition {
    pub fn new(
        line: u32,
        col_utf8: u32,
        col_utf16: u32,
        byte_offset: u32,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// 0-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 0-based count of characters from the start of the line.
    pub fn col_utf8(&self) -> u32 {
        self.col_utf8
    }

    /// 0-based count of UTF-16 code units from the start of the line.
    pub fn col_utf16(&self) -> u32 {
        self.col_utf16
    }

    /// 0-based byte offset from the start of the source.
    pub fn byte_offset(&self) -> u32 {
        self.byte_offset
    }

    /// The 1-based `(line, column)` pair used in human-facing output and in
    /// response-shaped error locations.
    pub fn to_line_column(&self) -> (usize, usize) {
        (self.line as usize + 1, self.col_utf8 as usize + 1)
    }
}
