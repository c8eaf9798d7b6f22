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

//! Loading of `.po` / `.pot` catalogs into plain message lists.

use std::path::{Path, PathBuf};

/// A single message of a catalog: the source text and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    msgid: String,
    msgstr: String,
}

impl Message {
    pub fn new(msgid: impl Into<String>, msgstr: impl Into<String>) -> Self {
        Self {
            msgid: msgid.into(),
            msgstr: msgstr.into(),
        }
    }

    pub fn msgid(&self) -> &str {
        &self.msgid
    }

    pub fn msgstr(&self) -> &str {
        &self.msgstr
    }

    /// Returns true when the translated text is not the same as the source text.
    ///
    /// An empty `msgstr` counts as different from any non-empty `msgid`.
    pub fn differs(&self) -> bool {
        self.msgid != self.msgstr
    }
}

/// The messages of one catalog file, in file order.
///
/// The header entry and obsolete (`#~`) entries are not part of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: Vec<Message>,
}

impl Catalog {
    /// Parses the raw content of a `.po` or `.pot` file.
    ///
    /// `origin` is only used to name the catalog in the error.
    /// The content must be UTF-8. An entry without `msgstr` is a syntax error.
    pub fn from_po_bytes(origin: impl Into<PathBuf>, data: Vec<u8>) -> Result<Self, CatalogError> {
        let origin = origin.into();
        let mut content = String::from_utf8(data).map_err(|utf8_error| CatalogError::Parse {
            path: origin.clone(),
            reason: utf8_error.to_string(),
        })?;
        // rspolib reads its input as a file name when it names an existing file
        if !content.ends_with('\n') {
            content.push('\n');
        }
        let pofile = rspolib::pofile(content.as_str()).map_err(|parse_error| {
            CatalogError::Parse {
                path: origin,
                reason: parse_error.to_string(),
            }
        })?;
        Ok(Self::from(pofile))
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages whose translation differs from the source text.
    pub fn diff_count(&self) -> usize {
        self.messages.iter().filter(|m| m.differs()).count()
    }
}

impl From<rspolib::POFile> for Catalog {
    fn from(pofile: rspolib::POFile) -> Self {
        pofile
            .entries
            .into_iter()
            .filter(|entry| !entry.obsolete)
            // msgid "" without context is the header
            .filter(|entry| !(entry.msgid.is_empty() && entry.msgctxt.is_none()))
            .map(
                |rspolib::POEntry {
                     msgid,
                     msgstr,
                     msgid_plural,
                     msgstr_plural,
                     ..
                 }| {
                    let msgstr = if msgid_plural.is_some() {
                        msgstr_plural.into_iter().next()
                    } else {
                        msgstr
                    };
                    Message::new(msgid, msgstr.unwrap_or_default())
                },
            )
            .collect()
    }
}

impl FromIterator<Message> for Catalog {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

/// Something that can turn a path into a [`Catalog`].
///
/// [`PoFileSource`] reads from the file system; other implementations can serve
/// catalogs from memory.
pub trait CatalogSource {
    fn load(&self, path: &Path) -> Result<Catalog, CatalogError>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn load(&self, path: &Path) -> Result<Catalog, CatalogError> {
        (**self).load(path)
    }
}

/// Loads catalogs from `.po` files on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoFileSource;

impl CatalogSource for PoFileSource {
    fn load(&self, path: &Path) -> Result<Catalog, CatalogError> {
        let data = std::fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_owned(),
            source,
        })?;
        Catalog::from_po_bytes(path, data)
    }
}

/// This error is returned when a catalog could not be loaded.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// The file could not be read.
    #[error("could not read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file content is not a valid `po` file.
    #[error("error parsing `po` file `{}`: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

impl CatalogError {
    /// The path of the catalog that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {r#"
        msgid ""
        msgstr ""
        "Content-Type: text/plain; charset=UTF-8\n"
        "Plural-Forms: nplurals=2; plural=(n != 1);\n"

        msgid "Hello"
        msgstr "Bonjour"

        msgid "OK"
        msgstr "OK"

        msgid "Cancel"
        msgstr ""

        msgctxt "menu"
        msgid "File"
        msgstr "Fichier"

        msgid "One file"
        msgid_plural "{n} files"
        msgstr[0] "Un fichier"
        msgstr[1] "{n} fichiers"

        #~ msgid "Gone"
        #~ msgstr "Parti"
    "#};

    fn sample() -> Catalog {
        Catalog::from_po_bytes("sample.po", SAMPLE.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn header_and_obsolete_entries_are_skipped() {
        let catalog = sample();
        let ids: Vec<_> = catalog.messages().map(Message::msgid).collect();
        assert_eq!(ids, ["Hello", "OK", "Cancel", "File", "One file"]);
    }

    #[test]
    fn translations() {
        let catalog = sample();
        let strs: Vec<_> = catalog.messages().map(Message::msgstr).collect();
        assert_eq!(strs, ["Bonjour", "OK", "", "Fichier", "Un fichier"]);
        // "OK" is the only message identical to its source
        assert_eq!(catalog.diff_count(), 4);
    }

    #[test]
    fn template_has_untranslated_messages() {
        let pot = indoc! {r#"
            msgid "Hello"
            msgstr ""

            msgid "World"
            msgstr ""
        "#};
        let catalog = Catalog::from_po_bytes("t.pot", pot.as_bytes().to_vec()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.diff_count(), 2);
    }

    #[test]
    fn header_only_catalog() {
        let po = indoc! {r#"
            msgid ""
            msgstr ""
            "Content-Type: text/plain; charset=UTF-8\n"
        "#};
        let catalog = Catalog::from_po_bytes("empty.po", po.as_bytes().to_vec()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.diff_count(), 0);
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let err = Catalog::from_po_bytes("bad.po", b"msgid \"\xff\xfe\"\nmsgstr \"\"\n".to_vec())
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert_eq!(err.path(), Path::new("bad.po"));
        assert!(err.to_string().starts_with("error parsing `po` file `bad.po`: "));
    }

    #[test]
    fn entry_without_msgstr_is_a_parse_error() {
        let po = indoc! {r#"
            msgid "a"

            msgid "b"
            msgstr "b"
        "#};
        let err = Catalog::from_po_bytes("nostr.po", po.as_bytes().to_vec()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("missing 'msgstr' section"));
    }

    #[test]
    fn file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("de.po");
        std::fs::write(&path, SAMPLE).unwrap();
        let catalog = PoFileSource.load(&path).unwrap();
        assert_eq!(catalog, sample());
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn content_naming_an_existing_file_is_parsed_as_content() {
        let dir = tempfile::tempdir().unwrap();
        let decoy = dir.path().join("decoy.po");
        std::fs::write(&decoy, SAMPLE).unwrap();
        let content = decoy.to_str().unwrap().as_bytes().to_vec();
        // a bare line is not a po entry, whatever file it names
        assert!(matches!(
            Catalog::from_po_bytes("decoy", content),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = Catalog::from_po_bytes("junk.po", b"this is not a po file\n".to_vec())
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn missing_file() {
        let err = PoFileSource
            .load(Path::new("this/file/does/not/exist.po"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert_eq!(err.path(), Path::new("this/file/does/not/exist.po"));
        assert_eq!(
            err.to_string(),
            "could not read `this/file/does/not/exist.po`"
        );
    }

    #[test]
    fn message_differs() {
        assert!(Message::new("a", "b").differs());
        assert!(Message::new("a", "").differs());
        assert!(!Message::new("a", "a").differs());
        assert!(!Message::new("", "").differs());
    }
}
