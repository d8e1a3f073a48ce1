//! Knobs for the parsing half of the round trip
//!
//! The renderer has no options: its output is a fixed function of the AST. What can vary is
//! how the body is parsed (which comrak extensions are on) and whether the header must be
//! valid YAML.

use comrak::Options;

/// Parser configuration shared by [`crate::parse_document`] and [`crate::round_trip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject documents whose header block is not well-formed YAML.
    pub validate_header: bool,
    /// Smart punctuation (curly quotes, dashes, ellipses).
    pub smart: bool,
    pub strikethrough: bool,
    pub table: bool,
    pub autolink: bool,
    pub tasklist: bool,
    pub footnotes: bool,
    pub superscript: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            validate_header: true,
            smart: false,
            strikethrough: false,
            table: false,
            autolink: false,
            tasklist: false,
            footnotes: false,
            superscript: false,
        }
    }
}

impl ParseOptions {
    /// Build the comrak options for the body parser.
    ///
    /// Front matter handling stays off here: the header is split off before comrak sees the
    /// text, so a leading `---` left in the body is a thematic break.
    pub fn to_comrak(&self) -> Options<'static> {
        let mut options = Options::default();
        options.parse.smart = self.smart;
        options.extension.strikethrough = self.strikethrough;
        options.extension.table = self.table;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;
        options.extension.footnotes = self.footnotes;
        options.extension.superscript = self.superscript;
        options
    }
}
