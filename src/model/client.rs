use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An onboarded client, selectable in the quote-maker dropdown while
/// `status` is "active".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub status: String,
}

/// An unconverted prospect. Selectable while status is one of
/// "new", "contacted" or "qualified".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: Option<String>,
    pub source: Option<String>,
    pub status: String,
}
