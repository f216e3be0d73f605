use serde::{Deserialize, Serialize};

/// One feed entry extracted from the listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub score: i64,
}

/// Raw decode target matching the feed's JSON shape:
/// `{ "data": { "children": [ { "data": <Entry> } ] } }`.
#[derive(Debug, Deserialize)]
pub struct FeedEnvelope {
    pub data: FeedListing,
}

#[derive(Debug, Deserialize)]
pub struct FeedListing {
    pub children: Vec<FeedChild>,
}

#[derive(Debug, Deserialize)]
pub struct FeedChild {
    pub data: Entry,
}

impl FeedEnvelope {
    /// Flattens the envelope into entries, preserving feed order.
    pub fn into_entries(self) -> Vec<Entry> {
        self.data
            .children
            .into_iter()
            .map(|child| child.data)
            .collect()
    }
}

/// One outbound email. Built once per run, submitted once, then discarded.
/// Field names follow the mail API's wire format.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    #[serde(rename = "toname")]
    pub to_name: String,
    pub subject: String,
    #[serde(rename = "html")]
    pub html_body: String,
}
