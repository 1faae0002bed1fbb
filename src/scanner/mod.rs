//! Course folder scanner.
//!
//! Walks a section folder through a [`FileTree`], probes every video file it
//! finds, and sums the runtimes. Probe failures are logged and count as zero;
//! they never abort the walk.

pub mod tree;

use crate::probe::DurationProbe;
use coursetime_common::{paths::is_video_file, Hours};
use std::path::Path;
use tracing::{debug, warn};

pub use tree::{FileTree, FsTree, MemoryTree};

/// Totals for one folder tree.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FolderDuration {
    /// Summed runtime of every video that probed successfully.
    pub hours: Hours,
    /// Video files found, including ones that failed to probe.
    pub video_count: usize,
    /// Video files whose duration could not be read.
    pub failed_count: usize,
}

/// Sums video runtimes beneath a folder.
pub struct FolderAggregator<'a, T: ?Sized, P: ?Sized> {
    tree: &'a T,
    probe: &'a P,
}

impl<'a, T, P> FolderAggregator<'a, T, P>
where
    T: FileTree + ?Sized,
    P: DurationProbe + ?Sized,
{
    /// Create an aggregator over a tree and probe.
    pub fn new(tree: &'a T, probe: &'a P) -> Self {
        Self { tree, probe }
    }

    /// Walk `folder` recursively and total every video file's duration.
    pub fn aggregate(&self, folder: &Path) -> FolderDuration {
        let mut totals = FolderDuration::default();

        for path in self.tree.files_under(folder) {
            if !is_video_file(&path) {
                continue;
            }
            totals.video_count += 1;

            match self.probe.probe(&path) {
                Ok(hours) => totals.hours += hours,
                Err(e) => {
                    warn!("Error processing {}: {}", path.display(), e);
                    totals.failed_count += 1;
                }
            }
        }

        debug!(
            "Aggregated {}: {} videos, {} failed, {:.4}h",
            folder.display(),
            totals.video_count,
            totals.failed_count,
            totals.hours.as_f64()
        );
        totals
    }

    /// Total duration of the videos beneath `folder`.
    pub fn aggregate_duration(&self, folder: &Path) -> Hours {
        self.aggregate(folder).hours
    }
}
