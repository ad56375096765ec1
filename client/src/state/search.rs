//! Search box state for the header.
//!
//! DESIGN
//! ======
//! The input is controlled: every keystroke lands in `input`, and a submit
//! hands back exactly what is there. Nothing is trimmed, validated, or
//! cleared, so the box keeps showing the last query.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchDraft {
    pub input: String,
}

impl SearchDraft {
    pub fn set_input(&mut self, value: String) {
        self.input = value;
    }

    /// The term to search for on submit.
    #[must_use]
    pub fn submit(&self) -> String {
        self.input.clone()
    }
}
