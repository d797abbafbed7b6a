#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failed,
}

impl<E> From<&Result<(), E>> for SubmitOutcome {
    fn from(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => SubmitOutcome::Success,
            Err(_) => SubmitOutcome::Failed,
        }
    }
}

/// Lifecycle of one form's submit action
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Settled(SubmitOutcome),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    /// Move to `Submitting`; returns false if a submission is already in flight
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    pub fn settle(&mut self, outcome: SubmitOutcome) {
        *self = SubmitState::Settled(outcome);
    }
}
