/* Copyright (C) 2026 The gettext-report authors

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and
associated documentation files (the "Software"), to deal in the Software without restriction,
including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense,
and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial
portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT
NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES
OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
*/

//! Per-file and aggregate translation statistics.

use crate::catalog::{Catalog, CatalogError, CatalogSource};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Message counts of one catalog, or of several summed together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Stats {
    /// Number of messages expected in the catalog.
    pub count: usize,
    /// Number of messages whose translation differs from the source.
    pub diff: usize,
    pub percent: f32,
}

impl Stats {
    pub fn new(count: usize, diff: usize) -> Self {
        Self {
            count,
            diff,
            percent: percent(diff, count),
        }
    }

    /// Sums the counts; the percentage is recomputed from the sums.
    pub fn merge(self, other: Stats) -> Self {
        Self::new(self.count + other.count, self.diff + other.diff)
    }
}

impl std::iter::Sum for Stats {
    fn sum<I: Iterator<Item = Stats>>(iter: I) -> Self {
        iter.fold(Stats::default(), Stats::merge)
    }
}

/// `diff / count * 100`, or 0 for an empty count.
pub fn percent(diff: usize, count: usize) -> f32 {
    if count > 0 {
        diff as f32 / count as f32 * 100.0
    } else {
        0.0
    }
}

/// The statistics of one input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileReport {
    pub file: String,
    #[serde(flatten)]
    pub stats: Stats,
}

/// The statistics of all input files, in report order, and their total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    #[serde(flatten)]
    pub total: Stats,
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn from_files(files: Vec<FileReport>) -> Self {
        Self {
            total: files.iter().map(|f| f.stats).sum(),
            files,
        }
    }
}

/// Computes the statistics of an already loaded catalog.
///
/// The expected count is the number of messages of the catalog, but at least `min_total`.
pub fn analyze(file: impl Into<String>, catalog: &Catalog, min_total: usize) -> FileReport {
    FileReport {
        file: file.into(),
        stats: Stats::new(catalog.len().max(min_total), catalog.diff_count()),
    }
}

/// Parameters of a report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// A `.pot` file whose message count is the minimum total of every file.
    pub template: Option<PathBuf>,
}

/// Loads catalogs from a [`CatalogSource`] and computes their statistics.
#[derive(Debug, Clone)]
pub struct Analyzer<S> {
    source: S,
    min_total: usize,
}

impl<S: CatalogSource> Analyzer<S> {
    /// An analyzer without a minimum total.
    pub fn new(source: S) -> Self {
        Self {
            source,
            min_total: 0,
        }
    }

    /// Creates an analyzer, loading the template of `config` if there is one.
    pub fn from_config(source: S, config: &ReportConfig) -> Result<Self, ReportError> {
        let mut analyzer = Self::new(source);
        if let Some(template) = &config.template {
            let catalog = analyzer
                .source
                .load(template)
                .map_err(|source| ReportError::Template {
                    path: template.clone(),
                    source,
                })?;
            tracing::info!(
                template = %template.display(),
                messages = catalog.len(),
                "using template message count as minimum total"
            );
            analyzer.min_total = catalog.len();
        }
        Ok(analyzer)
    }

    pub fn with_min_total(mut self, min_total: usize) -> Self {
        self.min_total = min_total;
        self
    }

    pub fn min_total(&self) -> usize {
        self.min_total
    }

    pub fn analyze_file(&self, path: &Path) -> Result<FileReport, CatalogError> {
        let catalog = self.source.load(path)?;
        let report = analyze(path.display().to_string(), &catalog, self.min_total);
        tracing::debug!(
            file = %report.file,
            messages = catalog.len(),
            count = report.stats.count,
            diff = report.stats.diff,
            "analyzed catalog"
        );
        Ok(report)
    }

    /// Analyzes every path in lexicographic order and sums the results.
    ///
    /// The first catalog that fails to load aborts the whole report.
    pub fn report<P: AsRef<Path>>(
        &self,
        paths: impl IntoIterator<Item = P>,
    ) -> Result<Report, ReportError> {
        let mut paths: Vec<P> = paths.into_iter().collect();
        if paths.is_empty() {
            return Err(ReportError::NoFiles);
        }
        paths.sort_by(|a, b| a.as_ref().as_os_str().cmp(b.as_ref().as_os_str()));

        let files = paths
            .iter()
            .map(|path| self.analyze_file(path.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Report::from_files(files))
    }
}

/// This error is returned when a report could not be produced.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("no files specified")]
    NoFiles,
    #[error("could not load template `{}`", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
