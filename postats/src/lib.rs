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

//! # Translation statistics for gettext catalogs
//!
//! This crate computes how much of a set of `.po` files is translated. A message counts as
//! translated when its `msgstr` differs from its `msgid`. Each file gets a [`FileReport`] and
//! the whole set a [`Report`] whose percentage is computed from the summed counts.
//!
//! When a `.pot` template is given, its message count is used as the minimum total of every
//! file, so that a catalog missing messages is not reported as complete.
//!
//! Example:
//!
//! ```no_run
//! use postats::{Analyzer, OutputFormat, PoFileSource, ReportConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReportConfig {
//!     template: Some("po/messages.pot".into()),
//! };
//! let analyzer = Analyzer::from_config(PoFileSource, &config)?;
//! let report = analyzer.report(["po/fr.po", "po/de.po"])?;
//! OutputFormat::Table.render(&report, std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod render;
pub mod report;

pub use catalog::{Catalog, CatalogError, CatalogSource, Message, PoFileSource};
pub use render::{OutputFormat, UnknownOutputType};
pub use report::{analyze, Analyzer, FileReport, Report, ReportConfig, ReportError, Stats};
