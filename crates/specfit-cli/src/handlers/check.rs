//! Compare this machine against one title's requirements.

use specfit_core::{ProfileKind, RetryPolicy};
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{render_report, report_json};

/// Arguments for the check command.
#[derive(Debug, Clone, Copy)]
pub struct CheckArgs<'a> {
    pub title: &'a str,
    pub kind: ProfileKind,
    pub json: bool,
    pub retries: u8,
}

/// Run one comparison and print the report.
///
/// Returns whether every dimension passed.
pub async fn execute(ctx: &CliContext, args: CheckArgs<'_>) -> Result<bool, CliError> {
    let title = ctx.registry.resolve(args.title)?;
    info!(title = %title.name, application_id = title.id, kind = %args.kind, "Checking requirements");

    let policy = RetryPolicy::default().with_max_retries(args.retries);
    let report = ctx
        .service
        .check_with_retry(title.id, args.kind, policy)
        .await?;

    if args.json {
        println!("{}", report_json(title, &report, &ctx.retailer)?);
    } else {
        println!(
            "{}",
            render_report(title, &report, &ctx.retailer, ctx.style)
        );
    }

    Ok(report.all_passed())
}
