//! Activity Catalog
//!
//! Wire types for the `GET /activities` payload.
//!
//! The server answers with a JSON object keyed by activity name. Entries are
//! kept in document order so the rendered list matches what the server sent.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single activity as described by the server.
///
/// Missing or `null` fields decode to their empty value so one sloppy entry
/// does not fail the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schedule: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_participants: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Activity {
    pub fn new(description: impl Into<String>, schedule: impl Into<String>, max_participants: u64) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder: add a participant
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Remaining capacity.
    ///
    /// Not clamped: an over-subscribed activity yields a negative count and
    /// the view shows it as-is.
    pub fn spots_left(&self) -> i64 {
        let max = i64::try_from(self.max_participants).unwrap_or(i64::MAX);
        max.saturating_sub(self.participants.len() as i64)
    }
}

/// Full catalog, in the order the server listed it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, Activity)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append an activity
    pub fn with(mut self, name: impl Into<String>, activity: Activity) -> Self {
        self.insert(name, activity);
        self
    }

    /// Insert or replace an activity. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries.iter_mut().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Catalog, M::Error> {
                let mut catalog = Catalog {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    catalog.insert(name, activity);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spots_left() {
        let activity = Activity::new("d", "s", 2).participant("a@x.com");
        assert_eq!(activity.spots_left(), 1);

        let full = Activity::new("d", "s", 1)
            .participant("a@x.com")
            .participant("b@x.com");
        assert_eq!(full.spots_left(), -1);
    }

    #[test]
    fn test_deserialize_keeps_server_order() {
        let json = r#"{
            "Programming Class": {"description": "p", "schedule": "Tue", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "c", "schedule": "Fri", "max_participants": 12, "participants": ["a@x.com"]},
            "Art Studio": {"description": "a", "schedule": "Mon", "max_participants": 15, "participants": []}
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
        assert_eq!(catalog.get("Chess Club").unwrap().participants, vec!["a@x.com"]);
    }

    #[test]
    fn test_missing_participants_defaults_to_empty() {
        let json = r#"{"Gym": {"description": "g", "schedule": "daily", "max_participants": 5}}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.get("Gym").unwrap().spots_left(), 5);
    }

    #[test]
    fn test_large_capacity_decodes() {
        let json = r#"{"Assembly": {"description": "a", "schedule": "Mon", "max_participants": 5000000000, "participants": ["a@x.com"]}}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.get("Assembly").unwrap().spots_left(), 4_999_999_999);
    }

    #[test]
    fn test_null_fields_do_not_fail_catalog() {
        let json = r#"{
            "Drama Club": {"description": null, "schedule": null, "max_participants": 10, "participants": null},
            "Chess Club": {"description": "c", "schedule": "Fri", "max_participants": 12, "participants": []}
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        let drama = catalog.get("Drama Club").unwrap();
        assert_eq!(drama.description, "");
        assert_eq!(drama.schedule, "");
        assert_eq!(drama.spots_left(), 10);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<Catalog>("[]").is_err());
    }

    #[test]
    fn test_serialize_roundtrip_order() {
        let catalog = Catalog::new()
            .with("B", Activity::new("b", "s", 1))
            .with("A", Activity::new("a", "s", 1));

        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.find("\"B\"").unwrap() < json.find("\"A\"").unwrap());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut catalog = Catalog::new()
            .with("A", Activity::new("a", "s", 1))
            .with("B", Activity::new("b", "s", 1));
        catalog.insert("A", Activity::new("a2", "s", 3));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().next(), Some("A"));
        assert_eq!(catalog.get("A").unwrap().description, "a2");
    }
}
