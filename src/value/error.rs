use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedRecordError {
    #[error("Field '{field}' expected '{expected}', found '{found}'")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("Missing field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Must specify improvement direction for value '{name}' (unit '{unit}')")]
    MissingImprovementDirection { name: String, unit: String },

    #[error("Unknown improvement direction '{token}' for value '{name}'")]
    UnknownImprovementDirection { name: String, token: String },
}

pub type Result<T> = std::result::Result<T, MalformedRecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_type_display() {
        let err = MalformedRecordError::UnexpectedType {
            field: "numeric.type",
            expected: "scalar",
            found: "histogram".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Field 'numeric.type' expected 'scalar', found 'histogram'"
        );
    }

    #[test]
    fn missing_field_display() {
        let err = MalformedRecordError::MissingField("numeric.unit");
        assert_eq!(err.to_string(), "Missing field 'numeric.unit'");
    }

    #[test]
    fn invalid_field_display() {
        let err = MalformedRecordError::InvalidField {
            field: "name",
            reason: "must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid field 'name': must not be empty");
    }

    #[test]
    fn missing_improvement_direction_display() {
        let err = MalformedRecordError::MissingImprovementDirection {
            name: "foo".to_string(),
            unit: "timeInMs".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Must specify improvement direction for value 'foo' (unit 'timeInMs')"
        );
    }

    #[test]
    fn unknown_improvement_direction_display() {
        let err = MalformedRecordError::UnknownImprovementDirection {
            name: "foo".to_string(),
            token: "sideways".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown improvement direction 'sideways' for value 'foo'"
        );
    }
}
