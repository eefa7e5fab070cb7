use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::taxonomy::Taxonomy;

/// Keywords of one matched category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Detection {
    /// English display label of the category.
    pub english: String,
    /// Every keyword that literally occurred in the text, in keyword
    /// declaration order.
    pub detected: Vec<String>,
}

/// Detection output: matched categories in taxonomy declaration order.
///
/// Serializes as a JSON object keyed by category name, so API consumers
/// see `{"우유": {"english": "Milk & Dairy", "detected": ["우유"]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectionResult {
    entries: Vec<(String, Detection)>,
}

impl DetectionResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == category)
    }

    pub fn get(&self, category: &str) -> Option<&Detection> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, detection)| detection)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Detection)> {
        self.entries
            .iter()
            .map(|(name, detection)| (name.as_str(), detection))
    }
}

impl Serialize for DetectionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, detection) in &self.entries {
            map.serialize_entry(name, detection)?;
        }
        map.end()
    }
}

impl Taxonomy {
    /// Scan `text` for every keyword of every category.
    ///
    /// Matching is literal, case-sensitive substring containment with no
    /// tokenization or stemming: a keyword inside an unrelated word still
    /// counts.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let mut entries = Vec::new();

        for category in self.categories() {
            let detected: Vec<String> = category
                .keywords
                .iter()
                .filter(|keyword| text.contains(keyword.as_str()))
                .cloned()
                .collect();

            if !detected.is_empty() {
                entries.push((
                    category.name.clone(),
                    Detection {
                        english: category.english.clone(),
                        detected,
                    },
                ));
            }
        }

        DetectionResult { entries }
    }
}
