//! Text-reduction steps.
//!
//! A parser configuration holds an ordered list of steps. Each step turns a list
//! of strings into another list of strings; the first step sees the whole file
//! content as a single-element list and the last step's output is the set of
//! raw import references.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::error::StepError;

/// One stage of the text-reduction pipeline.
pub trait ExtractionStep: Send + Sync + fmt::Debug {
    /// Short name used in logs and errors.
    fn name(&self) -> Cow<'_, str>;

    /// Reduce a single input string.
    fn reduce_one(&self, input: &str) -> Result<Vec<String>, StepError>;

    /// Reduce every input and concatenate the outputs in order.
    fn reduce(&self, inputs: &[String]) -> Result<Vec<String>, StepError> {
        let mut output = Vec::new();
        for input in inputs {
            output.extend(self.reduce_one(input)?);
        }
        Ok(output)
    }
}

/// Declarative step: collects every non-empty capture group of every match.
///
/// Groups are emitted in match order, and within a match in group order, so
/// alternations with one group per branch yield whichever branch matched.
#[derive(Debug, Clone)]
pub struct PatternStep {
    regex: Regex,
}

impl PatternStep {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl From<Regex> for PatternStep {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl ExtractionStep for PatternStep {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.regex.as_str())
    }

    fn reduce_one(&self, input: &str) -> Result<Vec<String>, StepError> {
        let mut captured = Vec::new();
        for caps in self.regex.captures_iter(input) {
            captured.extend(
                caps.iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str())
                    .filter(|text| !text.is_empty())
                    .map(str::to_string),
            );
        }
        Ok(captured)
    }
}

type Callback = dyn Fn(&str) -> Result<Vec<String>, StepError> + Send + Sync;

/// Arbitrary function from one string to a list of strings.
#[derive(Clone)]
pub struct CallbackStep {
    name: String,
    callback: Arc<Callback>,
}

impl CallbackStep {
    /// Wrap a fallible callback.
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<String>, StepError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            callback: Arc::new(callback),
        }
    }

    /// Wrap a callback that cannot fail.
    pub fn infallible<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&str) -> Vec<String> + Send + Sync + 'static,
    {
        Self::new(name, move |input| Ok(callback(input)))
    }
}

impl fmt::Debug for CallbackStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackStep")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl ExtractionStep for CallbackStep {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn reduce_one(&self, input: &str) -> Result<Vec<String>, StepError> {
        (self.callback)(input)
    }
}
