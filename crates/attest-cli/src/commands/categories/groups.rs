use attest_views::groups::{organize, visible_groups};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(show_hidden: bool, flat: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let groups = ctx.client.category_groups(show_hidden).await?;
    if flat {
        return output(&visible_groups(groups), flags.format);
    }
    let sections = organize(groups);
    match flags.format {
        crate::cli::OutputFormat::Table => {
            for section in &sections {
                println!(
                    "{} ({} awaiting evidence)",
                    section.label,
                    section.pending_evidence()
                );
                output(&section.groups, flags.format)?;
                println!();
            }
            Ok(())
        }
        format => output(&sections, format),
    }
}
