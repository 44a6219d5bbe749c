//! Error type for checked construction.

/// Errors reported by the checked constructors,
/// [`try_new`](crate::Formatter::try_new) and
/// [`try_with_pad`](crate::Formatter::try_with_pad).
///
/// The default constructors never surface errors; see the crate docs for
/// the silent fallback behavior they keep instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `%.N` smart-padding directive has no `.%` terminator anywhere in
    /// the rest of the template.
    #[error("smart padding directive at byte {offset} has no `.%` terminator")]
    UnterminatedPadding {
        /// Byte offset of the directive's opening `%`.
        offset: usize,
    },
}
