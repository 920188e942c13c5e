use anyhow::Result;
use state_inspector_core::{EntrySource, InspectorConfig};
use state_inspector_service::{collect_statistics, find_empty_workspaces, lookup_entry};

pub(crate) fn stats(config: &InspectorConfig) -> Result<()> {
    let layout = config.layout()?;
    let stats = collect_statistics(&layout)?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

pub(crate) fn entry(config: &InspectorConfig, key: &str, source: &str) -> Result<()> {
    let layout = config.layout()?;
    let entry = lookup_entry(&layout, key, &EntrySource::parse(Some(source)))?;
    println!("{}", serde_json::to_string_pretty(&entry)?);
    Ok(())
}

pub(crate) fn empty(config: &InspectorConfig) -> Result<()> {
    let layout = config.layout()?;
    let workspaces = find_empty_workspaces(&layout)?;
    println!("{}", serde_json::to_string_pretty(&workspaces)?);
    Ok(())
}
