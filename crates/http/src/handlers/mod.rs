pub mod entries;
pub mod statistics;
pub mod workspaces;
