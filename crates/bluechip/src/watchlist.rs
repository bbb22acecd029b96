//! Plain-text watchlists.
//!
//! One ticker per line. Blank lines and lines starting with `#` are ignored,
//! and anything after the first whitespace-separated token is treated as an
//! inline comment:
//!
//! ```text
//! # My favorite dividend stocks
//! JNJ
//! pg    Procter & Gamble
//! KO
//! ```

use crate::error::WatchlistError;
use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Named, ordered list of unique upper-cased ticker symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Watchlist {
    /// Name, usually the file stem
    pub name: String,
    /// Symbols in first-seen order
    pub symbols: Vec<String>,
}

impl Watchlist {
    /// Build from symbols, upper-casing and dropping repeats.
    pub fn new<I, S>(name: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let symbols = symbols
            .into_iter()
            .filter_map(|s| normalize(s.as_ref()))
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self {
            name: name.into(),
            symbols,
        }
    }

    /// Parse watchlist text.
    pub fn parse(name: impl Into<String>, content: &str) -> Self {
        let tokens = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| line.split_whitespace().next());
        Self::new(name, tokens)
    }

    /// Read a watchlist file.
    ///
    /// Fails with [`WatchlistError::NotFound`] when the file is missing and
    /// [`WatchlistError::Empty`] when it holds no tickers.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, WatchlistError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => WatchlistError::NotFound(path.to_path_buf()),
            _ => WatchlistError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let watchlist = Self::parse(stem(path), &content);
        if watchlist.is_empty() {
            return Err(WatchlistError::Empty(path.to_path_buf()));
        }
        info!(path = %path.display(), tickers = watchlist.len(), "loaded watchlist");
        Ok(watchlist)
    }

    /// Render as file content, optionally with a comment header stamped
    /// with `generated_at`.
    pub fn render(&self, generated_at: Option<DateTime<Local>>) -> String {
        let mut out = String::new();
        if let Some(ts) = generated_at {
            out.push_str("# Stock Watchlist\n");
            out.push_str(&format!("# Generated on {}\n\n", ts.format("%Y-%m-%d %H:%M:%S")));
        }
        for symbol in &self.symbols {
            out.push_str(symbol);
            out.push('\n');
        }
        out
    }

    /// Write to `path`, with the comment header when `header` is set.
    pub fn write(&self, path: impl AsRef<Path>, header: bool) -> Result<(), WatchlistError> {
        let path = path.as_ref();
        let content = self.render(header.then(Local::now));
        fs::write(path, content).map_err(|source| WatchlistError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), tickers = self.len(), "saved watchlist");
        Ok(())
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether there are no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// `.txt` files in `dir`, sorted by name.
pub fn list_watchlists(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, WatchlistError> {
    let dir = dir.as_ref();
    let io_err = |source| WatchlistError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_txt = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        if is_txt && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn normalize(symbol: &str) -> Option<String> {
    let symbol = symbol.trim();
    (!symbol.is_empty()).then(|| symbol.to_uppercase())
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_skips_comments_and_inline_text() {
        let content = "# header\n\nJNJ\n  pg   Procter & Gamble\n# Tech\nmsft\n\n";
        let wl = Watchlist::parse("mine", content);
        assert_eq!(wl.symbols, ["JNJ", "PG", "MSFT"]);
        assert_eq!(wl.name, "mine");
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let wl = Watchlist::parse("dups", "KO\nPEP\nko\nJNJ\nPEP\n");
        assert_eq!(wl.symbols, ["KO", "PEP", "JNJ"]);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("income.txt");
        let original = Watchlist::new("income", ["O", "JNJ", "PG", "KO"]);

        original.write(&path, true).unwrap();
        let loaded = Watchlist::read(&path).unwrap();
        assert_eq!(loaded, original);

        original.write(&path, false).unwrap();
        assert_eq!(Watchlist::read(&path).unwrap(), original);
    }

    #[test]
    fn test_render_header() {
        let wl = Watchlist::new("x", ["KO"]);
        let ts = Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(
            wl.render(Some(ts)),
            "# Stock Watchlist\n# Generated on 2024-03-01 09:30:00\n\nKO\n"
        );
        assert_eq!(wl.render(None), "KO\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Watchlist::read(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, WatchlistError::NotFound(_)));
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "# nothing here\n\n").unwrap();
        let err = Watchlist::read(&path).unwrap_err();
        assert!(matches!(err, WatchlistError::Empty(_)));
    }

    #[test]
    fn test_list_watchlists() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "KO\n").unwrap();
        fs::write(dir.path().join("a.TXT"), "PG\n").unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();
        fs::create_dir(dir.path().join("dir.txt")).unwrap();

        let names: Vec<_> = list_watchlists(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.TXT", "b.txt"]);
    }
}
