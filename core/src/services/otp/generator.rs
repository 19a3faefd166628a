//! Code generators

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::{rngs::OsRng, Rng};

use super::traits::CodeGenerator;
use crate::domain::entities::{CODE_LENGTH, CODE_SPACE};

/// Draws codes uniformly from `000000..=999999` using the OS CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let value: u32 = OsRng.gen_range(0..CODE_SPACE);
        format!("{:0width$}", value, width = CODE_LENGTH)
    }
}

/// Hands out a predetermined sequence of codes, cycling when exhausted
///
/// Lets tests and demos reproduce exact scenarios.
#[derive(Debug)]
pub struct FixedCodeGenerator {
    codes: Vec<String>,
    next: AtomicUsize,
}

impl FixedCodeGenerator {
    /// Always produce `code`
    pub fn new(code: impl Into<String>) -> Self {
        Self::sequence([code])
    }

    /// Produce `codes` in order, then start over
    pub fn sequence<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&self) -> String {
        if self.codes.is_empty() {
            return "0".repeat(CODE_LENGTH);
        }
        let index = self.next.fetch_add(1, Ordering::SeqCst) % self.codes.len();
        self.codes[index].clone()
    }
}
