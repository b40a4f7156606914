use std::path::PathBuf;

use crate::model::{Report, UsageTier};
use crate::search::{SearchScope, TextSearch};

#[derive(Debug, Clone)]
pub struct ClassifierOptions {
    pub external: Vec<PathBuf>,
    pub internal: PathBuf,
    pub debug_header: Option<String>,
}

#[derive(Debug)]
pub struct Classifier<'a, S: TextSearch> {
    search: &'a S,
    opts: ClassifierOptions,
}

impl<'a, S: TextSearch> Classifier<'a, S> {
    pub fn new(search: &'a S, opts: ClassifierOptions) -> Self {
        Self { search, opts }
    }

    /// Classify each header in order. Headers found in the external scope are
    /// dropped from the report; the internal check runs only for the rest, so
    /// `unused_everywhere` can only ever grow out of `unused_external`.
    pub fn classify(&self, headers: &[String]) -> Report {
        let external_scope = SearchScope::dirs(self.opts.external.clone());
        let mut report = Report::new(headers.len());

        for h in headers {
            let external_found = self.search.search(h, &external_scope);
            if self.is_debug_target(h) {
                self.probe(h, &external_scope, external_found);
            }
            if external_found {
                continue;
            }
            report.unused_external.push(h.clone());

            let internal_scope = SearchScope::dir_excluding(&self.opts.internal, h);
            let internal_found = self.search.search(h, &internal_scope);
            if self.is_debug_target(h) {
                self.probe(h, &internal_scope, internal_found);
            }
            if UsageTier::from_outcomes(external_found, internal_found) == UsageTier::UnusedEverywhere {
                report.unused_everywhere.push(h.clone());
            }
        }

        report
    }

    fn is_debug_target(&self, header: &str) -> bool {
        self.opts.debug_header.as_deref() == Some(header)
    }

    fn probe(&self, header: &str, scope: &SearchScope, found: bool) {
        eprintln!("probe: literal search for {header:?} in {}", scope.describe());
        eprintln!("probe: found = {found}");
        let hits = self.search.matches(header, scope);
        if hits.is_empty() {
            eprintln!("probe: no matching lines");
        }
        for hit in hits {
            eprintln!("probe: {}:{}: {}", hit.file.display(), hit.line, hit.text);
        }
    }
}
