use std::io::Write;

use rd_core::date::{format_short, parse_flexible_date};

use crate::bootstrap::AppRuntime;

pub fn run<W: Write>(runtime: &AppRuntime, text: &str, out: &mut W) -> anyhow::Result<()> {
    let date = parse_flexible_date(text, runtime.deps.clock.as_ref())?;
    writeln!(out, "{}  ({})", date.format("%Y-%m-%d"), format_short(date))?;
    Ok(())
}
