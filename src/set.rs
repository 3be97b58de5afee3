//! Provides the `LineSet` structure, a file's contents deduplicated into a
//! set of lines.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use memchr::memchr;

/// A `LineSet` is a set of lines, each line a slice borrowed from one file's
/// contents.
/// * Duplicate lines collapse to a single member.
/// * A line is zero or more non-newline bytes; the `\n` terminator and any
///   `\r` before it are not part of the member, so CRLF and LF files with the
///   same lines produce equal sets.
/// * A leading (UTF-8) Byte Order Mark is stripped before splitting, so it
///   can't make the first line of a BOM'd file spuriously unique.
/// * Iteration yields the lines in first-appearance order, which keeps output
///   deterministic from run to run.
pub struct LineSet<'data> {
    set: SliceSet<'data>,
}
type SliceSet<'data> = IndexSet<&'data [u8], FxBuildHasher>;

impl<'data> LineSet<'data> {
    /// Creates a `LineSet` whose members are the distinct lines of `slice`.
    #[must_use]
    pub fn new(mut slice: &'data [u8]) -> Self {
        if has_bom(slice) {
            slice = &slice[BOM_BYTES.len()..];
        }
        let mut set = SliceSet::default();
        while let Some(end) = memchr(b'\n', slice) {
            let (mut line, rest) = slice.split_at(end);
            slice = &rest[1..];
            if let Some(&maybe_cr) = line.last() {
                if maybe_cr == b'\r' {
                    line = &line[..line.len() - 1];
                }
            }
            set.insert(line);
        }
        if !slice.is_empty() {
            set.insert(slice);
        }
        LineSet { set }
    }

    /// Returns an iterator over the lines of `self` that are not members of
    /// `other`, in the order they first appear in `self`.
    pub fn difference<'a>(
        &'a self,
        other: &'a LineSet<'data>,
    ) -> impl Iterator<Item = &'data [u8]> + 'a {
        self.set.iter().copied().filter(|line| !other.set.contains(line))
    }

    /// The number of distinct lines in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Does the set have no members?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

const BOM_0: u8 = b'\xEF';
const BOM_1: u8 = b'\xBB';
const BOM_2: u8 = b'\xBF';
const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";
/// Does `contents` begin with a (UTF-8) Byte Order Mark?
fn has_bom(contents: &[u8]) -> bool {
    contents.len() >= 3 && contents[0] == BOM_0 && contents[1] == BOM_1 && contents[2] == BOM_2
}
