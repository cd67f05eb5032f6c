use crate::ActuationResult;

/// Flattened result of one actuation attempt, for surfaces that render text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActuationOutcome {
    pub succeeded: bool,
    pub error_detail: Option<String>,
}

impl<T> From<&ActuationResult<T>> for ActuationOutcome {
    fn from(result: &ActuationResult<T>) -> Self {
        match result {
            Ok(_) => Self {
                succeeded: true,
                error_detail: None,
            },
            Err(e) => Self {
                succeeded: false,
                error_detail: Some(e.detail()),
            },
        }
    }
}
