//! Parallel scoring of independent documents.

use rayon::prelude::*;

use prosemd_types::DocumentOutcome;

use crate::scorer::Scorer;

impl Scorer {
    /// Score `(id, text)` pairs in parallel.
    ///
    /// Outcomes come back in input order. A failed document never stops the
    /// others. Runs on the current rayon pool; wrap the call in
    /// `ThreadPool::install` to bound parallelism.
    pub fn score_batch<I, T>(&self, documents: &[(I, T)]) -> Vec<DocumentOutcome>
    where
        I: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
    {
        self.score_batch_with(documents, |_| {})
    }

    /// Like [`Scorer::score_batch`], calling `on_done` as each document
    /// finishes (in completion order, from worker threads).
    pub fn score_batch_with<I, T, F>(&self, documents: &[(I, T)], on_done: F) -> Vec<DocumentOutcome>
    where
        I: AsRef<str> + Sync,
        T: AsRef<str> + Sync,
        F: Fn(&DocumentOutcome) + Sync,
    {
        let span = tracing::debug_span!("score_batch", documents = documents.len());

        documents
            .par_iter()
            .map(|(id, text)| {
                span.in_scope(|| {
                    let outcome = self.score_document(id.as_ref(), text.as_ref());
                    on_done(&outcome);
                    outcome
                })
            })
            .collect()
    }
}
