//! Candidates: other users' personas as shown in the deck.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::persona::{Persona, PersonaRecord};

/// Stable identifier of a candidate.
///
/// Backend ids are opaque strings (database object ids); bundled and
/// legacy payloads use small integers. Both decode to the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for CandidateId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CandidateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CandidateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Number(u64),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Text(id) => Self(id),
            Wire::Number(id) => Self::from(id),
        })
    }
}

/// Read-only snapshot of another user's persona.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub id: CandidateId,
    #[serde(flatten)]
    pub persona: Persona,
}

impl Candidate {
    pub fn new(id: CandidateId, persona: Persona) -> Self {
        Self { id, persona }
    }

    pub fn name(&self) -> &str {
        &self.persona.username
    }
}

/// Wire shape of a candidate: an id plus a loosely-typed persona record.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    #[serde(flatten)]
    pub persona: PersonaRecord,
}

impl From<CandidateRecord> for Candidate {
    fn from(record: CandidateRecord) -> Self {
        Self::new(record.id, Persona::from_record(record.persona))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_candidate_with_defaults() {
        let record: CandidateRecord =
            serde_json::from_str(r#"{"id": 3, "username": "VelvetThunder", "age": 22, "red_flags": ""}"#).unwrap();
        let c = Candidate::from(record);
        assert_eq!(c.id, CandidateId::new("3"));
        assert_eq!(c.name(), "VelvetThunder");
        assert_eq!(c.persona.age, Some(22));
        assert_eq!(c.persona.red_flags, None);
    }

    #[test]
    fn decode_backend_object_id() {
        let record: CandidateRecord =
            serde_json::from_str(r#"{"id": "65f0c2a1b2c3d4e5f6a7b8c9", "username": "NeonGhost"}"#).unwrap();
        assert_eq!(record.id.as_str(), "65f0c2a1b2c3d4e5f6a7b8c9");
        assert_eq!(serde_json::to_string(&record.id).unwrap(), r#""65f0c2a1b2c3d4e5f6a7b8c9""#);
    }

    #[test]
    fn numeric_and_textual_ids_agree() {
        let n: CandidateId = serde_json::from_str("7").unwrap();
        let t: CandidateId = serde_json::from_str(r#""7""#).unwrap();
        assert_eq!(n, t);
        assert_eq!(n, CandidateId::from(7u64));
        assert!(serde_json::from_str::<CandidateId>("-1").is_err());
    }
}
