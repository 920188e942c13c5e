use anyhow::{Result, bail};
use state_inspector_core::InspectorConfig;
use state_inspector_service::prune_workspaces;

pub(crate) fn run(config: &InspectorConfig, ids: &[String], confirmed: bool) -> Result<()> {
    let layout = config.layout()?;
    if !confirmed {
        bail!(
            "refusing to delete {} workspace director{} under {} without --yes",
            ids.len(),
            if ids.len() == 1 { "y" } else { "ies" },
            layout.root().display()
        );
    }

    let report = prune_workspaces(&layout, ids);
    for failure in &report.errors {
        tracing::warn!(id = %failure.id, "{}", failure.message);
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    eprintln!("{}", report.summary());
    Ok(())
}
