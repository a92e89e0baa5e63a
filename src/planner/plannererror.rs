/// Errors raised by the leave planning core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlannerError {
    /// A holiday table entry could not be parsed as a `%Y-%m-%d` date.
    #[error("malformed date '{value}' for holiday '{holiday}': {source}")]
    MalformedDate {
        holiday: String,
        value: String,
        source: chrono::ParseError
    },

    /// A holiday was declared with an empty date list.
    #[error("holiday '{holiday}' has no dates")]
    EmptyHoliday {
        holiday: String
    },

    /// A negative maximum leave count.
    #[error("invalid maximum leave count: {value} (must be >= 0)")]
    InvalidParameter {
        value: i64
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = PlannerError::EmptyHoliday { holiday: "Zafer Bayramı".to_owned() };
        assert_eq!(err.to_string(), "holiday 'Zafer Bayramı' has no dates");

        let err = PlannerError::InvalidParameter { value: -3 };
        assert_eq!(err.to_string(), "invalid maximum leave count: -3 (must be >= 0)");
    }

    #[test]
    fn malformed_date_keeps_its_source() {
        let source = chrono::NaiveDate::parse_from_str("2025-13-01", "%Y-%m-%d").unwrap_err();
        let err = PlannerError::MalformedDate {
            holiday: "Yılbaşı".to_owned(),
            value: "2025-13-01".to_owned(),
            source
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("malformed date '2025-13-01' for holiday 'Yılbaşı'"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<PlannerError>();
    }
}
