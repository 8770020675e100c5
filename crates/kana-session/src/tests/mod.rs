mod proptest_fsm;

use std::cell::Cell;

use super::{InputResponse, KanaSession, ReadingField};

/// Reading field that counts how the session uses it.
#[derive(Default)]
pub(super) struct CountingField {
    pub(super) value: String,
    pub(super) reads: Cell<usize>,
    pub(super) commits: usize,
}

impl ReadingField for CountingField {
    fn reading(&self) -> String {
        self.reads.set(self.reads.get() + 1);
        self.value.clone()
    }

    fn commit_reading(&mut self, value: &str) {
        self.commits += 1;
        self.value = value.to_string();
    }
}

// Helper: feed successive raw input values, as the host would on each edit.
pub(super) fn type_inputs(
    session: &mut KanaSession,
    field: &mut String,
    inputs: &[&str],
) -> Vec<InputResponse> {
    inputs
        .iter()
        .map(|raw| session.handle_input_change(raw, field))
        .collect()
}
