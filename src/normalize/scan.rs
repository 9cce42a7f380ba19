//! Raw-spelling scanner.
//!
//! Splits a compiler-emitted type spelling into *path runs* and *structural
//! punctuation*. The renderer trims path runs and copies punctuation through
//! verbatim, so the scanner is the only place that needs to know which bytes
//! carry structure.

/// One scanned piece of a raw spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// A `::`-separated identifier run: `alloc::vec::Vec`, `i32`, `mut`,
    /// `dyn`, `{{closure}}`, an array length.
    Path(&'a str),
    /// Structural text: `<`, `, `, `) -> `, `[`, `&`, ...
    Punct(&'a str),
}

/// Bytes that terminate a path run. Everything else extends it, which keeps
/// `{{closure}}` markers and non-ASCII identifiers intact.
const fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b' ' | b'<'
            | b'>'
            | b'('
            | b')'
            | b'['
            | b']'
            | b'&'
            | b'*'
            | b','
            | b';'
            | b'+'
            | b'\''
            | b'-'
            | b'='
            | b'!'
            | b'?'
    )
}

/// Iterator over the pieces of a raw spelling.
///
/// Total: any input splits into pieces, and concatenating the pieces
/// reproduces the input exactly.
pub struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(raw: &'a str) -> Self {
        Scanner { rest: raw }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Piece<'a>> {
        let bytes = self.rest.as_bytes();
        let first = *bytes.first()?;
        let in_punct = is_delimiter(first);
        let mut i = 1;
        while i < bytes.len() && is_delimiter(bytes[i]) == in_punct {
            i += 1;
        }
        // Delimiters are ASCII, so `i` always lands on a char boundary.
        let (piece, rest) = self.rest.split_at(i);
        self.rest = rest;
        Some(if in_punct {
            Piece::Punct(piece)
        } else {
            Piece::Path(piece)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, Scanner};

    fn pieces(raw: &str) -> Vec<Piece<'_>> {
        Scanner::new(raw).collect()
    }

    #[test]
    fn bare_path_is_one_piece() {
        assert_eq!(pieces("alloc::vec::Vec"), [Piece::Path("alloc::vec::Vec")]);
    }

    #[test]
    fn generics_split_on_brackets() {
        assert_eq!(
            pieces("core::option::Option<i32>"),
            [
                Piece::Path("core::option::Option"),
                Piece::Punct("<"),
                Piece::Path("i32"),
                Piece::Punct(">"),
            ]
        );
    }

    #[test]
    fn fn_pointer_arrow_is_punctuation() {
        assert_eq!(
            pieces("fn(i32) -> bool"),
            [
                Piece::Path("fn"),
                Piece::Punct("("),
                Piece::Path("i32"),
                Piece::Punct(") -> "),
                Piece::Path("bool"),
            ]
        );
    }

    #[test]
    fn closure_marker_stays_in_the_run() {
        assert_eq!(
            pieces("demo::main::{{closure}}"),
            [Piece::Path("demo::main::{{closure}}")]
        );
    }

    #[test]
    fn pieces_concatenate_back_to_the_input() {
        let raw = "&mut [alloc::boxed::Box<dyn core::fmt::Debug + Send>; 4]";
        let mut rebuilt = String::new();
        for piece in Scanner::new(raw) {
            match piece {
                Piece::Path(p) | Piece::Punct(p) => rebuilt.push_str(p),
            }
        }
        assert_eq!(rebuilt, raw);
    }
}
