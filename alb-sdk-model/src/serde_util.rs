use serde::{Deserialize, Deserializer};

/// Decodes `null` as the type's default, so `"hosts": null` becomes an empty `Vec`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Holder {
        #[serde(deserialize_with = "super::null_as_default")]
        values: Vec<String>,
    }

    #[test]
    fn test_null_array() {
        let h: Holder = serde_json::from_str(r#"{"values": null}"#).unwrap();
        assert!(h.values.is_empty());
    }

    #[test]
    fn test_missing_array() {
        let h: Holder = serde_json::from_str("{}").unwrap();
        assert!(h.values.is_empty());
    }

    #[test]
    fn test_present_array() {
        let h: Holder = serde_json::from_str(r#"{"values": ["a", "b"]}"#).unwrap();
        assert_eq!(vec!["a", "b"], h.values);
    }
}
