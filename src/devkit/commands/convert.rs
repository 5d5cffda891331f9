use crate::commands::CmdResult;
use crate::error::Result;
use crate::numeric;
use crate::radix::Radix;

pub fn run(input: &str, radix: Radix) -> Result<CmdResult> {
    let conversion = numeric::convert(input, radix)?;
    Ok(CmdResult::default().with_conversion(radix, conversion))
}
