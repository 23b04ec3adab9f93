use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("question list is empty")]
    EmptyQuestionList,

    #[error("question {index} is malformed: {reason}")]
    MalformedQuestion { index: usize, reason: String },

    #[error("feedback delay must be a finite number of seconds between 0 and 60 (got {0})")]
    InvalidDelay(f64),

    #[error("could not parse question bank: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl QuizError {
    /// True for errors caused by the question set or delay, as opposed to decoding.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            QuizError::EmptyQuestionList
                | QuizError::MalformedQuestion { .. }
                | QuizError::InvalidDelay(_)
        )
    }
}
