//! Course progress report.
//!
//! [`ProgressReportBuilder`] lists the section folders under a course root,
//! totals each one with a [`FolderAggregator`], and produces an immutable
//! [`ProgressReport`]. [`render`] turns the report into the console table.

pub mod render;
pub mod section;

pub use render::render;
pub use section::{section_number, Classification, Section, DONE_PREFIX};

use crate::probe::{DurationProbe, MediaDurationProbe};
use crate::scanner::{FileTree, FolderAggregator, FsTree};
use coursetime_common::{paths::display_name, Error, Hours, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Totals and per-section breakdown for one course.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    root: PathBuf,
    sections: Vec<Section>,
    total: Hours,
    done: Hours,
    lines: Vec<String>,
}

impl ProgressReport {
    /// Compute totals and the sorted breakdown from classified sections.
    ///
    /// Sections with zero duration stay in the totals but get no summary line.
    /// Summary lines are not deduplicated: two sections rendering the same
    /// text both appear.
    pub fn from_sections<P: Into<PathBuf>>(root: P, sections: Vec<Section>) -> Self {
        let mut total = Hours::ZERO;
        let mut done = Hours::ZERO;

        for section in &sections {
            if section.is_done {
                done += section.duration;
                total += section.duration;
            } else if section.is_counted {
                total += section.duration;
            }
        }

        let mut lines: Vec<String> = sections
            .iter()
            .filter(|s| !s.duration.is_zero())
            .map(Section::summary_line)
            .collect();
        lines.sort_by_key(|line| section_number(line));

        Self {
            root: root.into(),
            sections,
            total,
            done,
            lines,
        }
    }

    /// Course root folder.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every section found, in folder-name order, including ignored ones.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Sorted per-section summary lines.
    pub fn section_lines(&self) -> &[String] {
        &self.lines
    }

    /// Runtime of done and counted sections.
    pub fn total_duration(&self) -> Hours {
        self.total
    }

    /// Runtime of done sections.
    pub fn done_duration(&self) -> Hours {
        self.done
    }

    /// Total minus done.
    pub fn remaining_duration(&self) -> Hours {
        self.total - self.done
    }

    /// Percentage of the total that is done, or `None` when the total is zero.
    pub fn done_percentage(&self) -> Option<f64> {
        if self.total.is_zero() {
            return None;
        }
        Some(self.done.as_f64() / self.total.as_f64() * 100.0)
    }

    /// `100 - done_percentage`, or `None` when the total is zero.
    pub fn remaining_percentage(&self) -> Option<f64> {
        self.done_percentage().map(|done| 100.0 - done)
    }

    /// Done and remaining percentages, failing when nothing was counted.
    pub fn percentages(&self) -> Result<(f64, f64)> {
        match (self.done_percentage(), self.remaining_percentage()) {
            (Some(done), Some(remaining)) => Ok((done, remaining)),
            _ => Err(Error::no_counted_duration(&self.root)),
        }
    }

    /// Video files that failed to probe, across all sections.
    pub fn failed_count(&self) -> usize {
        self.sections.iter().map(|s| s.failed_count).sum()
    }
}

/// Builds a [`ProgressReport`] from a course root.
pub struct ProgressReportBuilder<T, P> {
    tree: T,
    probe: P,
}

impl ProgressReportBuilder<FsTree, MediaDurationProbe> {
    /// Builder over the real filesystem with the default media probe.
    pub fn from_filesystem() -> Self {
        Self::new(FsTree::new(), MediaDurationProbe::new())
    }
}

impl<T: FileTree, P: DurationProbe> ProgressReportBuilder<T, P> {
    /// Create a builder over a tree and probe.
    pub fn new(tree: T, probe: P) -> Self {
        Self { tree, probe }
    }

    /// Scan every section under `root` and compute the report.
    ///
    /// Only immediate subdirectories are sections; files at the top level are
    /// ignored. Fails when `root` is missing or not a directory.
    pub fn build(&self, root: &Path) -> Result<ProgressReport> {
        if !self.tree.exists(root) {
            return Err(Error::root_not_found(root));
        }
        if !self.tree.is_dir(root) {
            return Err(Error::not_a_directory(root));
        }

        info!("Scanning course folder: {}", root.display());
        let aggregator = FolderAggregator::new(&self.tree, &self.probe);

        let mut sections = Vec::new();
        for dir in self.tree.child_dirs(root)? {
            let name = display_name(&dir);
            let totals = aggregator.aggregate(&dir);

            let mut section = Section::new(name, dir, totals.hours);
            section.video_count = totals.video_count;
            section.failed_count = totals.failed_count;

            if section.classification().contributes() {
                debug!(
                    "Section {:?}: {} (done: {}, videos: {})",
                    section.name, section.duration, section.is_done, section.video_count
                );
            } else {
                debug!(
                    "Section {:?} ignored: no \"{}\" marker or leading number",
                    section.name, DONE_PREFIX
                );
            }
            sections.push(section);
        }

        let report = ProgressReport::from_sections(root, sections);
        info!(
            "Scan complete: {} sections, {} failed videos, total {}",
            report.sections().len(),
            report.failed_count(),
            report.total_duration()
        );
        Ok(report)
    }
}
