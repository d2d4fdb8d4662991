//! Terminal states of an attempt

/// How an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptState {
    /// The unit of work returned a value
    Success,
    /// The unit of work failed and the fallback was returned
    Substituted,
    /// The unit of work failed and its error was handed back
    Rethrown,
}

impl AttemptState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptState::Success => "success",
            AttemptState::Substituted => "substituted",
            AttemptState::Rethrown => "rethrown",
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, AttemptState::Success)
    }
}

/// Result of an attempt together with the state it ended in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome<T, E> {
    Success(T),
    Substituted(T),
    Rethrown(E),
}

impl<T, E> AttemptOutcome<T, E> {
    pub fn state(&self) -> AttemptState {
        match self {
            AttemptOutcome::Success(_) => AttemptState::Success,
            AttemptOutcome::Substituted(_) => AttemptState::Substituted,
            AttemptOutcome::Rethrown(_) => AttemptState::Rethrown,
        }
    }

    /// Whether the unit of work raised an error
    pub fn failed(&self) -> bool {
        self.state().is_failure()
    }

    /// The value handed to the caller, if the attempt produced one
    pub fn value(&self) -> Option<&T> {
        match self {
            AttemptOutcome::Success(value) | AttemptOutcome::Substituted(value) => Some(value),
            AttemptOutcome::Rethrown(_) => None,
        }
    }

    /// Collapse into the caller-facing result
    ///
    /// # Errors
    ///
    /// Returns the original error when the attempt ended `Rethrown`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            AttemptOutcome::Success(value) | AttemptOutcome::Substituted(value) => Ok(value),
            AttemptOutcome::Rethrown(err) => Err(err),
        }
    }
}
