/*---------- Imports ----------*/
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    pub status_code: u16,
    pub body: String,
}

/// Payload carried in `ResponseDescriptor::body`. Fields serialize in
/// declaration order, `message` first.
#[derive(Serialize, Debug)]
pub struct ResponseBody<'a, T> {
    pub message: String,
    pub input: &'a T,
}

impl<'a, T: Serialize> ResponseBody<'a, T> {
    pub fn new(message: String, input: &'a T) -> Self {
        Self { message, input }
    }

    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
