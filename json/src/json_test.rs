#[cfg(test)]
mod tests {
    use crate::json::loads;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        id: String,
        count: u32,
    }

    #[test]
    fn test_loads() {
        let value: Sample = loads(r#"{"id":"a1","count":3}"#).unwrap();
        assert_eq!(
            value,
            Sample {
                id: "a1".to_string(),
                count: 3
            }
        );
    }

    #[test]
    fn test_loads_invalid() {
        let result = loads::<Sample>(r#"{"id":"a1""#);
        assert!(result.is_err());
    }
}
