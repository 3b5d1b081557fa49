//! Yes/no confirmation abstraction
//!
//! Every optional step asks through a [`Prompter`], so the interactive
//! terminal can be swapped for a scripted answer source.

use crate::error::ScaffoldError;

pub trait Prompter {
    /// Ask a yes/no question; `default` is the pre-selected answer
    fn confirm(&self, question: &str, default: bool) -> Result<bool, ScaffoldError>;
}

/// Accepts every question without asking (`--yes`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&self, _question: &str, _default: bool) -> Result<bool, ScaffoldError> {
        Ok(true)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers from a fixed script; falls back to the default when exhausted
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: RefCell<VecDeque<bool>>,
        pub asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[bool]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                asked: RefCell::new(Vec::new()),
            }
        }

        pub fn was_asked(&self, needle: &str) -> bool {
            self.asked.borrow().iter().any(|q| q.contains(needle))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn confirm(&self, question: &str, default: bool) -> Result<bool, ScaffoldError> {
            self.asked.borrow_mut().push(question.to_string());
            Ok(self.answers.borrow_mut().pop_front().unwrap_or(default))
        }
    }
}
