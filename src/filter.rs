//! Black rectangle removal for content streams
//!
//! Scans the whitespace-separated tokens of one content stream, keeps a running
//! guess of whether the nonstroking fill color is black, and drops every
//! `x y w h re [h] <fill>` sequence painted while it is.
//!
//! This is not a content-stream lexer. Literal strings, hex strings and
//! dictionaries that contain whitespace are split like everything else and
//! passed through token by token.

use crate::error::Result;
use crate::latin1;

/// Operators that paint the current path with the fill color
const FILL_OPS: [&str; 6] = ["f", "f*", "B", "B*", "b", "b*"];

/// Tolerance for a color component to count as zero
const ZERO_TOL: f64 = 1e-8;

/// Tolerance for the CMYK black channel to count as full
const CMYK_BLACK_TOL: f64 = 1e-4;

fn is_zero(x: f64) -> bool {
    x.abs() <= ZERO_TOL
}

fn is_fill_op(token: &str) -> bool {
    FILL_OPS.contains(&token)
}

/// Per-stream scan state
///
/// Owned by a single pass over one stream. The default nonstroking color in
/// PDF is DeviceGray 0, so `fill_is_black` starts out true.
#[derive(Debug)]
pub struct StreamFilter<'a> {
    out: Vec<&'a str>,
    fill_is_black: bool,
    removed: usize,
}

impl Default for StreamFilter<'_> {
    fn default() -> Self {
        Self {
            out: Vec::new(),
            fill_is_black: true,
            removed: 0,
        }
    }
}

impl<'a> StreamFilter<'a> {
    /// Create a filter with the default (black) fill color
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the fill color is currently considered black
    pub fn fill_is_black(&self) -> bool {
        self.fill_is_black
    }

    /// Run the scan over `tokens`, returning the rejoined text and the number
    /// of rectangles removed
    pub fn run(mut self, tokens: &[&'a str]) -> (String, usize) {
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            match token {
                "rg" => self.set_rgb(),
                "g" => self.set_gray(),
                "k" => self.set_cmyk(),
                "re" => {
                    if let Some(next) = self.match_black_fill(tokens, i) {
                        self.out.truncate(self.out.len() - 4);
                        self.removed += 1;
                        i = next;
                        continue;
                    }
                }
                _ => {}
            }
            self.out.push(token);
            i += 1;
        }

        (self.out.join(" "), self.removed)
    }

    /// Parse the last `N` emitted tokens as numbers
    ///
    /// `None` when fewer than `N` tokens were emitted or any of them is not a
    /// number.
    fn trailing_operands<const N: usize>(&self) -> Option<[f64; N]> {
        let start = self.out.len().checked_sub(N)?;
        let mut values = [0.0; N];
        for (value, token) in values.iter_mut().zip(&self.out[start..]) {
            *value = token.parse().ok()?;
        }
        Some(values)
    }

    fn set_rgb(&mut self) {
        if let Some([r, g, b]) = self.trailing_operands::<3>() {
            self.fill_is_black = is_zero(r) && is_zero(g) && is_zero(b);
        }
    }

    fn set_gray(&mut self) {
        if let Some([gray]) = self.trailing_operands::<1>() {
            self.fill_is_black = is_zero(gray);
        }
    }

    fn set_cmyk(&mut self) {
        if let Some([c, m, y, k]) = self.trailing_operands::<4>() {
            self.fill_is_black = is_zero(c)
                && is_zero(m)
                && is_zero(y)
                && (k - 1.0).abs() <= CMYK_BLACK_TOL;
        }
    }

    /// Check whether the `re` at `pos` starts a black rectangle fill
    ///
    /// Returns the index just past the fill operator on a match.
    fn match_black_fill(&self, tokens: &[&str], pos: usize) -> Option<usize> {
        if !self.fill_is_black {
            return None;
        }
        // x y w h, any sign or size
        self.trailing_operands::<4>()?;

        let mut next = pos + 1;
        if tokens.get(next) == Some(&"h") {
            next += 1;
        }
        match tokens.get(next) {
            Some(op) if is_fill_op(op) => Some(next + 1),
            _ => None,
        }
    }
}

/// Remove black filled rectangles from a decoded content stream
///
/// Returns the new stream text, tokens joined by single spaces, and how many
/// rectangles were removed. Never fails: anything it does not understand is
/// kept as is.
///
/// # Example
///
/// ```
/// use pdf_reveal::filter::strip_black_rectangles;
///
/// let (text, removed) = strip_black_rectangles("BT (secret) Tj ET 0 g 5 5 50 50 re f");
/// assert_eq!(text, "BT (secret) Tj ET 0 g");
/// assert_eq!(removed, 1);
/// ```
pub fn strip_black_rectangles(stream: &str) -> (String, usize) {
    let tokens: Vec<&str> = stream.split_whitespace().collect();
    StreamFilter::new().run(&tokens)
}

/// Byte-level variant of [`strip_black_rectangles`]
///
/// Decodes one byte per char, filters, and encodes back, so bytes outside
/// ASCII pass through unchanged.
pub fn strip_black_rectangles_bytes(content: &[u8]) -> Result<(Vec<u8>, usize)> {
    let text = latin1::decode(content);
    let (filtered, removed) = strip_black_rectangles(&text);
    Ok((latin1::encode(&filtered)?, removed))
}
