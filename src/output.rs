use crate::query::Query;

/// Renders the `query=value` line for shell consumption.
///
/// Both a missing resource (`None`) and an empty collection produce no line.
pub fn format_assignment(query: &Query, value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(format!("{}={}", query, v)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query() -> Query {
        Query::parse("aws_instance.web.id").unwrap()
    }

    #[test]
    fn test_format_assignment_with_value() {
        assert_eq!(
            format_assignment(&query(), Some("i-1234")),
            Some("aws_instance.web.id=i-1234".to_string())
        );
    }

    #[test]
    fn test_format_assignment_joined_values() {
        assert_eq!(
            format_assignment(&query(), Some("a,b,c")),
            Some("aws_instance.web.id=a,b,c".to_string())
        );
    }

    #[test]
    fn test_format_assignment_none_prints_nothing() {
        assert_eq!(format_assignment(&query(), None), None);
    }

    #[test]
    fn test_format_assignment_empty_prints_nothing() {
        assert_eq!(format_assignment(&query(), Some("")), None);
    }
}
