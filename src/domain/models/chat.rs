#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use serde::ser::SerializeMap;
use serde::Serialize;
use serde::Serializer;
use serde_derive::Deserialize;
use serde_derive::Serialize;

/// Question key to answer, kept in the order answers were given. Keys are
/// `q1..qN`, matching question positions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Answers {
    entries: Vec<(String, String)>,
}

impl Answers {
    pub fn key_for(position: usize) -> String {
        return format!("q{position}");
    }

    /// Records an answer for the next unanswered question and returns its key.
    pub fn push(&mut self, text: &str) -> String {
        let key = Answers::key_for(self.entries.len() + 1);
        self.entries.push((key.to_string(), text.to_string()));
        return key;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        return self
            .entries
            .iter()
            .find(|(k, _)| return k == key)
            .map(|(_, v)| return v.as_str());
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        return self
            .entries
            .iter()
            .map(|(k, v)| return (k.as_str(), v.as_str()));
    }
}

impl<K: ToString, V: ToString> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Answers {
        return Answers {
            entries: iter
                .into_iter()
                .map(|(k, v)| return (k.to_string(), v.to_string()))
                .collect(),
        };
    }
}

impl Serialize for Answers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        return map.end();
    }
}

/// Body posted to the generation backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub text: String,
    pub feature: Option<String>,
    pub answers: Option<Answers>,
    pub session_id: String,
}

impl ChatRequest {
    pub fn is_guided(&self) -> bool {
        return self.feature.is_some();
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: Option<String>,
    pub done: Option<bool>,
}

impl ChatResponse {
    /// Reply text normalized to `\n` line breaks, or a placeholder when the
    /// backend answered without one.
    pub fn reply_text(&self, guided: bool) -> String {
        let reply = self.reply.as_deref().unwrap_or("").trim();
        if reply.is_empty() {
            if guided {
                return "No result received".to_string();
            }
            return "No reply received".to_string();
        }

        return reply.replace("\r\n", "\n");
    }
}
