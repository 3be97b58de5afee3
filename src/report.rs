//! Houses the `report` function, the kernel of the application: it computes
//! both set differences and writes the two-section report.

use anyhow::Result;
use std::io;

use crate::set::LineSet;

const UNIQUE_TO_OLD_HEADER: &[u8] = b"Lines in old file but not in new file:";
const UNIQUE_TO_NEW_HEADER: &[u8] = b"Lines in new file but not in old file:";

/// Writes the comparison of `old` and `new` to `out`: a section listing the
/// lines unique to the old file, a blank separator line, then a section
/// listing the lines unique to the new file. Each section is a header
/// followed by its lines, one per line; a section with no unique lines is
/// just its header.
pub fn report<'data>(
    old: &LineSet<'data>,
    new: &LineSet<'data>,
    mut out: impl io::Write,
) -> Result<()> {
    write_section(&mut out, UNIQUE_TO_OLD_HEADER, old.difference(new))?;
    out.write_all(b"\n")?;
    write_section(&mut out, UNIQUE_TO_NEW_HEADER, new.difference(old))?;
    out.flush()?;
    Ok(())
}

fn write_section<'a>(
    out: &mut impl io::Write,
    header: &[u8],
    lines: impl Iterator<Item = &'a [u8]>,
) -> Result<()> {
    out.write_all(header)?;
    out.write_all(b"\n")?;
    for line in lines {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
