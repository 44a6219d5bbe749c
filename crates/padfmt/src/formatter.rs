//! The three-phase template engine.
//!
//! Construction drives one mutable buffer through three sequential
//! phases: a directive scan, one placeholder substitution per argument,
//! and a final padding pass over the recorded sections. The scan records
//! smart-padding sections as [`PadSpan`]s before any substitution
//! happens, so the later phases have to keep those byte spans anchored
//! to the same logical content while the buffer grows and shrinks around
//! them. The two shift rules that make that work live in [`crate::span`].

use crate::error::Error;
use crate::span::PadSpan;
use crate::value::ToText;

/// The two-byte positional placeholder.
const PLACEHOLDER: &str = "{}";

/// Closing delimiter of a smart-padding section.
const SMART_TERMINATOR: &str = ".%";

/// A single-shot template formatter.
///
/// Construction runs the whole pipeline and stores the finished string;
/// the instance is immutable afterwards and cannot be reused for a
/// second template. Read the result with [`as_str`](Self::as_str) or
/// take it with [`into_string`](Self::into_string).
///
/// # Example
///
/// ```
/// use padfmt::Formatter;
///
/// let f = Formatter::new("{} and {}", &[&1, &"two"]);
/// assert_eq!(f.as_str(), "1 and two");
///
/// let f = Formatter::with_pad('*', "a%3b", &[]);
/// assert_eq!(f.as_str(), "a***b");
/// ```
///
/// # Lenient by default
///
/// The default constructors never fail: malformed or zero-width
/// directives stay in the output as literal text, placeholder/argument
/// count mismatches are absorbed, and an unterminated `%.N` section
/// empties the whole output. Use [`try_new`](Self::try_new) or
/// [`try_with_pad`](Self::try_with_pad) to surface that last case as an
/// [`Error`] instead.
#[derive(Debug, Clone)]
pub struct Formatter {
    buf: String,
    pad: char,
    spans: Vec<PadSpan>,
    /// Sticky search position for placeholder substitution; `None` once
    /// the template has run out of placeholders.
    cursor: Option<usize>,
}

impl Formatter {
    /// Formats `template` with the default pad character (space).
    pub fn new(template: impl Into<String>, args: &[&dyn ToText]) -> Self {
        Self::with_pad(' ', template, args)
    }

    /// Formats `template`, filling padding with `pad`.
    pub fn with_pad(pad: char, template: impl Into<String>, args: &[&dyn ToText]) -> Self {
        let mut f = Self::start(pad, template.into());
        if f.scan().is_err() {
            // An unterminated smart directive wipes the whole output,
            // records included.
            f.buf.clear();
            f.spans.clear();
        }
        f.finish(args)
    }

    /// Like [`new`](Self::new), but an unterminated smart-padding
    /// directive is reported instead of emptying the output.
    pub fn try_new(template: impl Into<String>, args: &[&dyn ToText]) -> Result<Self, Error> {
        Self::try_with_pad(' ', template, args)
    }

    /// Like [`with_pad`](Self::with_pad), but an unterminated
    /// smart-padding directive is reported instead of emptying the
    /// output.
    ///
    /// ```
    /// use padfmt::{Error, Formatter};
    ///
    /// let err = Formatter::try_new("%.5Hi", &[]).unwrap_err();
    /// assert_eq!(err, Error::UnterminatedPadding { offset: 0 });
    /// ```
    pub fn try_with_pad(
        pad: char,
        template: impl Into<String>,
        args: &[&dyn ToText],
    ) -> Result<Self, Error> {
        let mut f = Self::start(pad, template.into());
        f.scan()?;
        Ok(f.finish(args))
    }

    /// The finished string.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the formatter and takes the finished string.
    pub fn into_string(self) -> String {
        self.buf
    }

    fn start(pad: char, buf: String) -> Self {
        Self {
            buf,
            pad,
            spans: Vec::new(),
            cursor: Some(0),
        }
    }

    fn finish(mut self, args: &[&dyn ToText]) -> Self {
        for arg in args {
            self.substitute(*arg);
        }
        self.apply_padding();
        self
    }

    /// Phase one: resolve `%N` directives into fill runs in place, and
    /// record each `%.N ... .%` section as a [`PadSpan`] while stripping
    /// its delimiters.
    fn scan(&mut self) -> Result<(), Error> {
        let mut pos = 0;
        while pos < self.buf.len() {
            let Some(found) = self.buf[pos..].find('%') else {
                break;
            };
            let start = pos + found;
            // A bare trailing `%` ends the scan.
            if start + 1 >= self.buf.len() {
                break;
            }
            let smart = self.buf.as_bytes()[start + 1] == b'.';
            let digits_at = start + if smart { 2 } else { 1 };
            let digits_end = self.buf[digits_at..]
                .find(|c: char| !c.is_ascii_digit())
                .map_or(self.buf.len(), |i| digits_at + i);
            let width = match self.buf[digits_at..digits_end].parse::<usize>() {
                Ok(n) if n > 0 => n,
                // No digits, overflow, or an explicit zero width: the
                // directive stays literal. Resume one character past the
                // digit scan (a whole character, so a multi-byte one
                // cannot leave the cursor mid-sequence).
                _ => {
                    pos = digits_end
                        + self.buf[digits_end..]
                            .chars()
                            .next()
                            .map_or(1, char::len_utf8);
                    continue;
                }
            };

            if smart {
                let Some(term) = self.buf[digits_end..]
                    .find(SMART_TERMINATOR)
                    .map(|i| digits_end + i)
                else {
                    return Err(Error::UnterminatedPadding { offset: start });
                };
                let digit_len = digits_end - digits_at;
                let span = PadSpan {
                    begin: start,
                    // Where the terminator lands once `%.N` is gone.
                    end: term - digit_len - 2,
                    width,
                };
                self.buf.replace_range(term..term + 2, "");
                self.buf.replace_range(start..digits_end, "");
                // Resume at the section's end: recorded content is never
                // re-scanned, so the span stays valid.
                pos = span.end;
                self.spans.push(span);
            } else {
                let fill: String = std::iter::repeat(self.pad).take(width).collect();
                self.buf.replace_range(start..digits_end, &fill);
                pos = start + fill.len();
            }
        }
        Ok(())
    }

    /// Phase two: replace the next `{}` with `arg`'s text and re-anchor
    /// the recorded spans around the edit.
    ///
    /// The cursor stays at the substitution point afterwards, so a
    /// substituted value is itself searched for later placeholders. Once
    /// the template runs out of placeholders the cursor goes `None` and
    /// every remaining argument is dropped.
    fn substitute(&mut self, arg: &dyn ToText) {
        let Some(from) = self.cursor else {
            return;
        };
        let Some(found) = self.buf[from..].find(PLACEHOLDER) else {
            self.cursor = None;
            return;
        };
        let at = from + found;
        let value = arg.to_text();
        let inserted = value.len();
        self.buf.replace_range(at..at + PLACEHOLDER.len(), &value);
        for (i, span) in self.spans.iter_mut().enumerate() {
            span.shift_for_substitution(at, inserted, i == 0);
        }
        self.cursor = Some(at);
    }

    /// Phase three: grow each recorded section to its width, in encounter
    /// order, shifting the records still ahead of each insertion.
    fn apply_padding(&mut self) {
        for i in 0..self.spans.len() {
            let span = self.spans[i];
            if span.width <= span.len() {
                continue;
            }
            let missing = span.width - span.len();
            let fill: String = std::iter::repeat(self.pad).take(missing).collect();
            let at = floor_char_boundary(&self.buf, span.end);
            self.buf.insert_str(at, &fill);
            for later in &mut self.spans[i + 1..] {
                later.shift_by(fill.len());
            }
        }
    }
}

impl std::fmt::Display for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Largest char boundary at or below `i`, capped at the buffer length.
///
/// Multi-byte argument values can drag a span's `end` off a character
/// boundary (offsets are raw bytes); fill is inserted at the nearest
/// boundary below instead of panicking.
fn floor_char_boundary(s: &str, i: usize) -> usize {
    let mut i = i.min(s.len());
    while !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}
