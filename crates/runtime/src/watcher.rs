//! # Shader Hot-Reloading
//!
//! Watches the ship's WGSL source and forwards a path over a channel every
//! time it changes. The render loop drains the channel between frames and
//! rebuilds its pipeline, so the notify thread never touches GPU state.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use tracing::{debug, error, info};

/// Ship shader inside the source tree.
#[must_use]
pub fn default_shader_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../render/src/ship.wgsl")
}

/// True if `event` modifies or creates the `.wgsl` file named like `target`.
fn touches(event: &Event, target: &Path) -> bool {
    if !(event.kind.is_modify() || event.kind.is_create()) {
        return false;
    }
    event.paths.iter().any(|path| {
        path.extension().is_some_and(|ext| ext == "wgsl") && path.file_name() == target.file_name()
    })
}

/// Start watching `shader`. Changes are sent on `updates` until the returned
/// watcher is dropped.
pub fn start(shader: &Path, updates: Sender<PathBuf>) -> Result<RecommendedWatcher> {
    info!("Initializing shader watcher...");

    let target = shader.to_path_buf();
    let dir = shader
        .parent()
        .with_context(|| format!("{} has no parent directory", shader.display()))?
        .to_path_buf();

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if touches(&event, &target) {
                debug!(kind = ?event.kind, "shader changed");
                if updates.send(target.clone()).is_err() {
                    debug!("render loop gone, dropping shader update");
                }
            }
        }
        Err(e) => error!("Error watching shader files: {e:?}"),
    })?;

    // Editors often replace the file, so watch the directory rather than the file
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", dir.display()))?;
    info!("Shader watcher started for {}", shader.display());
    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind};
    use notify::EventKind;

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn edits_to_the_shader_trigger_reload() {
        let target = Path::new("/src/render/src/ship.wgsl");
        let modify = EventKind::Modify(ModifyKind::Data(DataChange::Content));
        assert!(touches(&event(modify, "/src/render/src/ship.wgsl"), target));
        assert!(touches(
            &event(EventKind::Create(CreateKind::File), "/src/render/src/ship.wgsl"),
            target
        ));
    }

    #[test]
    fn unrelated_events_are_ignored() {
        let target = Path::new("/src/render/src/ship.wgsl");
        let modify = EventKind::Modify(ModifyKind::Data(DataChange::Content));
        assert!(!touches(&event(modify, "/src/render/src/other.wgsl"), target));
        assert!(!touches(&event(modify, "/src/render/src/ship.rs"), target));
        assert!(!touches(
            &event(EventKind::Access(AccessKind::Read), "/src/render/src/ship.wgsl"),
            target
        ));
    }

    #[test]
    fn default_path_points_at_the_render_shader() {
        assert!(default_shader_path().is_file());
    }
}
