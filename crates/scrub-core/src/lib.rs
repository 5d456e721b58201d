//! Scroll-driven hero video scrubbing, independent of any DOM.
//!
//! Hosts build a [`ScrubController`], forward input as [`Message`]s and carry
//! out the returned [`Effect`]s.

pub mod config;
pub mod controller;
pub mod mapping;
pub mod pager;
pub mod preferences;
pub mod preload;
pub mod touch;

pub use controller::{Effect, LockState, Message, ScrubController, ScrubSnapshot};

use std::fs;
use std::path::Path;
use ts_rs::TS;

fn export_single_type<T: TS + 'static>(out_dir: &Path) -> Result<(), String> {
    T::export_all_to(out_dir).map_err(|err| err.to_string())
}

/// Write TypeScript definitions of the host protocol into `out_dir`.
pub fn export_ts_bindings(out_dir: &Path) -> Result<(), String> {
    fs::create_dir_all(out_dir)
        .map_err(|err| format!("Failed to create {}: {err}", out_dir.display()))?;

    for entry in fs::read_dir(out_dir)
        .map_err(|err| format!("Failed to list {}: {err}", out_dir.display()))?
    {
        let entry = entry.map_err(|err| format!("Failed to read entry: {err}"))?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
            fs::remove_file(&path)
                .map_err(|err| format!("Failed to remove {}: {err}", path.display()))?;
        }
    }

    export_single_type::<Message>(out_dir)?;
    export_single_type::<Effect>(out_dir)?;
    export_single_type::<ScrubSnapshot>(out_dir)?;
    export_single_type::<LockState>(out_dir)?;
    export_single_type::<pager::SectionBounds>(out_dir)?;
    export_single_type::<preload::MediaSource>(out_dir)?;
    export_single_type::<preferences::UserPreferences>(out_dir)?;

    let index_content = r#"export type { Message } from "./Message";
export type { Effect } from "./Effect";
export type { ScrubSnapshot } from "./ScrubSnapshot";
export type { LockState } from "./LockState";
export type { SectionBounds } from "./SectionBounds";
export type { MediaSource } from "./MediaSource";
export type { UserPreferences } from "./UserPreferences";
"#;
    let index_path = out_dir.join("index.ts");
    fs::write(&index_path, index_content)
        .map_err(|err| format!("Failed to write {}: {err}", index_path.display()))?;
    Ok(())
}
