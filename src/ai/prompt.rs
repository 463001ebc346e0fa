use crate::ai::GatewayError;
use crate::domain::Listing;
use serde::Serialize;

pub const SYSTEM_INSTRUCTION: &str = "\
You are an expert travel agent for 'StayEase'.
Your goal is to match a user's natural language request to the provided list of properties.

Rules:
1. Analyze the user's request for vibe, location, amenities, and group size.
2. Select up to 4 properties that best match.
3. Return a JSON object with a list of matching IDs and a friendly summary explaining why you picked them.
4. If nothing matches perfectly, pick the closest alternatives and mention that.";

/// The slice of a listing the model gets to see. Price, rating and host
/// are left out to keep the payload small.
#[derive(Debug, Serialize)]
struct CatalogEntry<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    location: &'a str,
    amenities: &'a [String],
    #[serde(rename = "type")]
    kind: &'a str,
}

impl<'a> From<&'a Listing> for CatalogEntry<'a> {
    fn from(l: &'a Listing) -> Self {
        Self {
            id: &l.id,
            title: &l.title,
            description: &l.description,
            location: &l.location,
            amenities: &l.amenities,
            kind: &l.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPrompt {
    pub system_instruction: &'static str,
    pub user_prompt: String,
}

impl SearchPrompt {
    pub fn build(query: &str, catalog: &[Listing]) -> Result<Self, GatewayError> {
        let entries: Vec<CatalogEntry<'_>> = catalog.iter().map(CatalogEntry::from).collect();
        let catalog_json = serde_json::to_string(&entries)?;

        Ok(Self {
            system_instruction: SYSTEM_INSTRUCTION,
            user_prompt: format!(
                "Available Properties: {catalog_json}\n\nUser Request: \"{query}\""
            ),
        })
    }
}
