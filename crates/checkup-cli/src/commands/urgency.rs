use crate::error::Result;
use crate::ui;
use std::io::Write;

pub fn run(out: &mut impl Write) -> Result<()> {
    ui::write_urgency_legend(out)?;
    Ok(())
}
