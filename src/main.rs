use anyhow::Result;
use is_terminal::IsTerminal;
use linecomp::report::report;
use linecomp::set::LineSet;
use std::io;

fn main() -> Result<()> {
    let args = linecomp::args::parsed();

    let old_contents = linecomp::operands::contents_of(&args.old)?;
    let new_contents = linecomp::operands::contents_of(&args.new)?;

    let old = LineSet::new(&old_contents);
    let new = LineSet::new(&new_contents);

    if io::stdout().is_terminal() {
        report(&old, &new, io::stdout().lock())?;
    } else {
        report(&old, &new, io::BufWriter::new(io::stdout().lock()))?;
    }
    Ok(())
}
