//! List the titles that can be checked.

use crate::bootstrap::CliContext;
use crate::presentation::render_titles;

pub fn execute(ctx: &CliContext) {
    println!("{}", render_titles(&ctx.registry, ctx.style));
}
