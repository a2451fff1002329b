//! Generative-text client: destination briefings and trip itineraries.
//!
//! Talks to a Gemini-style `generateContent` REST endpoint. Prompts ask
//! for raw HTML; any code-fence markup the model emits anyway is
//! stripped before the text is used. Callers substitute the fixed
//! fallback strings on any error.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use wayfarer_core::export::TripExportContext;

use crate::error::{ensure_success, EnrichError};

/// Shown when destination info generation fails.
pub const INFO_FALLBACK: &str =
    "Could not generate information at this time. Please try again later.";

/// Shown when itinerary generation fails.
pub const ITINERARY_FALLBACK: &str =
    "Could not generate itinerary at this time. Please try again later.";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Client for the generative-text endpoint.
pub struct TextClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl TextClient {
    /// * `base_url` - e.g. `https://generativelanguage.googleapis.com`.
    /// * `model`    - e.g. `gemini-2.0-flash`.
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Generate a traveler briefing for a destination and date window.
    pub async fn describe(
        &self,
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<String, EnrichError> {
        let prompt = build_describe_prompt(destination, start_date, end_date);
        self.generate(&prompt).await
    }

    /// Generate a day-by-day itinerary from a resolved trip context.
    pub async fn itinerary(&self, context: &TripExportContext) -> Result<String, EnrichError> {
        let prompt = build_itinerary_prompt(context);
        self.generate(&prompt).await
    }

    async fn generate(&self, prompt: &str) -> Result<String, EnrichError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let generated: GenerateResponse = ensure_success(response).await?.json().await?;
        let text = generated
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| EnrichError::Shape("response contained no candidates".to_string()))?;

        Ok(strip_code_fences(text))
    }
}

/// Remove Markdown code-fence markup from generated text.
///
/// The model is instructed to answer in raw HTML but sometimes wraps
/// its answer in ```` ```html ```` fences anyway.
static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```html|```").expect("valid regex"));

pub fn strip_code_fences(text: &str) -> String {
    FENCE_RE.replace_all(text, "").into_owned()
}

/// Prompt for the destination briefing.
pub fn build_describe_prompt(destination: &str, start_date: NaiveDate, end_date: NaiveDate) -> String {
    format!(
        "Provide concise and helpful information for travelers planning a trip to {destination} \
         from {} to {}. Include:\n\
         \n\
         Necessary Precautions: (e.g., vaccinations, safety tips, visa requirements)\n\
         Local Customs: (e.g., greetings, dining etiquette, dress code)\n\
         Must-See Attractions: (e.g., iconic monuments, historical sites, recommended tours)\n\
         Other Relevant Information: (e.g., currency exchange, transportation tips, language basics)\n\
         Answer in raw HTML. NO MARKDOWN SYNTAX ALLOWED.",
        start_date.format("%B %d, %Y"),
        end_date.format("%B %d, %Y"),
    )
}

/// Prompt for the day-by-day itinerary, structured around the trip's
/// reason for visit.
pub fn build_itinerary_prompt(context: &TripExportContext) -> String {
    let reason = context.reason_for_visit.as_deref().unwrap_or("leisure");
    let notes = context.notes.as_deref().unwrap_or("none");
    let places = context
        .selected_places
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Create a comprehensive travel itinerary for a trip to {} from {} to {} for {} \
         travelers. Structure the itinerary around the primary reason for the visit: {reason}.\n\
         \n\
         Accommodation: {}\n\
         Transportation: {}\n\
         Key places to visit: {places}\n\
         Estimated total cost: ${}\n\
         Additional notes: {notes}\n\
         Provide a day-by-day schedule from arrival to departure, balancing structured \
         activities and free time. Answer in raw HTML. NO MARKDOWN SYNTAX ALLOWED.",
        context.destination,
        context.start_date,
        context.end_date,
        context.travelers,
        context.accommodation,
        context.transportation.join(", "),
        context.estimated_cost,
    )
}
