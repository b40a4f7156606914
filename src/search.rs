use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::error::SweepError;

/// Directories to search, with an optional base name to skip anywhere
/// under them (the candidate header's own file).
#[derive(Debug, Clone)]
pub struct SearchScope {
    pub roots: Vec<PathBuf>,
    pub exclude: Option<String>,
}

impl SearchScope {
    pub fn dirs(roots: Vec<PathBuf>) -> Self {
        Self { roots, exclude: None }
    }

    pub fn dir_excluding(root: &Path, file_name: &str) -> Self {
        Self {
            roots: vec![root.to_path_buf()],
            exclude: Some(file_name.to_string()),
        }
    }

    pub fn describe(&self) -> String {
        let roots = self
            .roots
            .iter()
            .map(|r| r.display().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        match &self.exclude {
            Some(name) => format!("{roots} (excluding {name})"),
            None => roots,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchLine {
    pub file: PathBuf,
    pub line: usize,
    pub text: String,
}

/// Literal substring search over file contents. The classifier only needs a
/// boolean per scope; `matches` exists for the debug probe.
pub trait TextSearch {
    fn search(&self, pattern: &str, scope: &SearchScope) -> bool;
    fn matches(&self, pattern: &str, scope: &SearchScope) -> Vec<MatchLine>;
}

#[derive(Debug, Clone)]
pub struct FsSearch {
    skip: GlobSet,
}

impl FsSearch {
    pub fn new(skip_patterns: &[String]) -> Result<Self> {
        let mut b = GlobSetBuilder::new();
        for p in skip_patterns {
            b.add(Glob::new(p).with_context(|| format!("invalid skip glob: {p}"))?);
        }
        Ok(Self {
            skip: b.build().context("failed to build skip glob set")?,
        })
    }

    /// Visit every searchable file under the scope. I/O failures degrade to
    /// skipping the file, reported on stderr so they stay distinguishable
    /// from a genuine no-match.
    fn visit_files<F>(&self, scope: &SearchScope, mut f: F)
    where
        F: FnMut(&Path, &[u8]) -> bool,
    {
        for root in &scope.roots {
            for entry in WalkDir::new(root) {
                let entry = match entry {
                    Ok(e) => e,
                    Err(err) => {
                        report_degraded(root, &err.to_string());
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                let path = entry.path();
                if let Some(excluded) = &scope.exclude
                    && path.file_name().and_then(|n| n.to_str()) == Some(excluded.as_str())
                {
                    continue;
                }
                let rel = path.strip_prefix(root).unwrap_or(path);
                if self.skip.is_match(rel.to_string_lossy().replace('\\', "/")) {
                    continue;
                }
                match fs::read(path) {
                    Ok(content) => {
                        if !f(path, &content) {
                            return;
                        }
                    }
                    Err(source) => {
                        let err = SweepError::Search {
                            path: path.to_path_buf(),
                            source,
                        };
                        report_degraded(root, &err.to_string());
                    }
                }
            }
        }
    }
}

impl TextSearch for FsSearch {
    fn search(&self, pattern: &str, scope: &SearchScope) -> bool {
        let needle = pattern.as_bytes();
        let mut found = false;
        self.visit_files(scope, |_, content| {
            if contains_bytes(content, needle) {
                found = true;
                return false;
            }
            true
        });
        found
    }

    fn matches(&self, pattern: &str, scope: &SearchScope) -> Vec<MatchLine> {
        let mut out = Vec::new();
        self.visit_files(scope, |path, content| {
            let text = String::from_utf8_lossy(content);
            for (idx, line) in text.lines().enumerate() {
                if line.contains(pattern) {
                    out.push(MatchLine {
                        file: path.to_path_buf(),
                        line: idx + 1,
                        text: line.to_string(),
                    });
                }
            }
            true
        });
        out
    }
}

fn report_degraded(root: &Path, detail: &str) {
    eprintln!("warning: treating as not found under {}: {detail}", root.display());
}

// Literal byte containment. Header names carry `.` and `_`, so the pattern
// must never reach a regex engine.
fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}
