use serde::{Deserialize, Deserializer};

pub fn deserialize_bool_flexible<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrInt {
        Bool(bool),
        Int(i64),
        String(String),
    }

    match BoolOrInt::deserialize(deserializer)? {
        BoolOrInt::Bool(b) => Ok(b),
        BoolOrInt::Int(i) => Ok(i != 0),
        BoolOrInt::String(s) => match s.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(serde::de::Error::custom(format!("Invalid boolean string: {}", s))),
        },
    }
}

/// Accepts identifiers sent either as JSON numbers or strings and yields
/// their canonical string form.
pub fn deserialize_id_flexible<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        String(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(i) => Ok(i.to_string()),
        IntOrString::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(serde::de::Error::custom("Identifier must not be empty"))
            } else {
                Ok(trimmed.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize_bool_flexible")]
        flag: bool,
        #[serde(deserialize_with = "deserialize_id_flexible")]
        id: String,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let a: Probe = serde_json::from_str(r#"{"flag": 1, "id": 42}"#).unwrap();
        assert!(a.flag);
        assert_eq!(a.id, "42");

        let b: Probe = serde_json::from_str(r#"{"flag": "false", "id": " 42 "}"#).unwrap();
        assert!(!b.flag);
        assert_eq!(b.id, "42");
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Probe>(r#"{"flag": "maybe", "id": 1}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"flag": true, "id": ""}"#).is_err());
    }
}
