//! Pipeline snapshot plugin for inspection and debugging.
//!
//! Captures the projection graph and diagnostics after each phase so the
//! intermediate state can be dumped as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use eyre::Result;
use mirage_ir::ProjectionGraph;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// The pipeline state after one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// The projection graph (available from the "build" phase on).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<ProjectionGraph>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".mirage/debug"));
/// let ctx = pipeline.run(metadata, options)?;
/// ```
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    /// Snapshots are written here as each phase completes.
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes `<phase>.json` files to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// All collected snapshots, in phase order.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots.read().unwrap().clone()
    }

    /// Write all snapshots to `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        for snapshot in self.snapshots.read().unwrap().iter() {
            write_snapshot(dir, snapshot)?;
        }

        Ok(())
    }

    fn capture_snapshot(&self, phase: &str, ctx: &CompilationContext) {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            graph: ctx.graph.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots.write().unwrap().push(snapshot);
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        self.capture_snapshot(phase, ctx);

        if let Some(ref dir) = self.output_dir
            && let Some(snapshot) = self.snapshots.read().unwrap().last()
        {
            fs::create_dir_all(dir)?;
            write_snapshot(dir, snapshot)?;
        }

        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "wrote snapshot");
    Ok(())
}
