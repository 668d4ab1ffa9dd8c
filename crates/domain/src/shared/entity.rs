use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier of a persisted reminder job, stable for the lifetime of
/// the job and usable for lookup and cancellation.
///
/// Generated ids are of the form `reminders-<8 hex chars>`. Callers may also
/// supply their own id, which the replace flow uses to overwrite a job in
/// place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ID(String);

impl ID {
    pub fn new() -> Self {
        let uuid = Uuid::new_v4().to_string();
        Self(format!("reminders-{}", &uuid[..8]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_string(&self) -> String {
        self.0.clone()
    }
}

impl Default for ID {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug)]
pub enum InvalidIDError {
    #[error("ID: {0} is malformed")]
    Malformed(String),
}

impl FromStr for ID {
    type Err = InvalidIDError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = !s.is_empty()
            && s.len() <= 64
            && s.chars().all(|c| !c.is_whitespace() && !c.is_control());
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidIDError::Malformed(s.to_string()))
        }
    }
}

impl Serialize for ID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IDVisitor;

        impl<'de> Visitor<'de> for IDVisitor {
            type Value = ID;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("A valid string id representation")
            }

            fn visit_str<E>(self, value: &str) -> Result<ID, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse::<ID>()
                    .map_err(|_| E::custom(format!("Malformed id: {}", value)))
            }
        }

        deserializer.deserialize_str(IDVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_prefixed_and_unique() {
        let id1 = ID::new();
        let id2 = ID::new();
        assert!(id1.as_str().starts_with("reminders-"));
        assert_ne!(id1, id2);
    }

    #[test]
    fn parses_caller_supplied_ids() {
        assert!("r1".parse::<ID>().is_ok());
        assert!("reminders-1a2b3c4d".parse::<ID>().is_ok());
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!("".parse::<ID>().is_err());
        assert!("has whitespace".parse::<ID>().is_err());
        assert!("x".repeat(65).parse::<ID>().is_err());
    }
}
