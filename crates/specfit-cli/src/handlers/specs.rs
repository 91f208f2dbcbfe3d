//! Show the hardware sampled from this machine.

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_system_profile;

pub fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let system = ctx.service.system_profile()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&system)?);
    } else {
        println!("{}", render_system_profile(&system));
    }
    Ok(())
}
