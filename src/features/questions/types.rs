//! Request payloads for the question-generation endpoints.
//!
//! Wire names are camelCase to match the backend. Numeric bounds are the
//! only client-side validation: the overall count is clamped to 1..=20 and
//! per-type counts in mixed papers to 1..=10. Everything else is checked
//! authoritatively by the backend.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const COUNT_MIN: u8 = 1;
pub const COUNT_MAX: u8 = 20;
pub const TYPE_COUNT_MIN: u8 = 1;
pub const TYPE_COUNT_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("invalid difficulty: {other}")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(label)
    }
}

/// AI provider behind the generation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    Openai,
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::Openai),
            other => Err(format!("invalid provider: {other}")),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Gemini => "gemini",
            Self::Openai => "openai",
        };
        f.write_str(label)
    }
}

pub(crate) fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parameters for a single-type question set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub subject: String,
    pub chapter: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: String,
    pub count: u8,
    pub class_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_commands: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

impl GenerationRequest {
    /// Build a request with the count clamped and blank optionals dropped.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        subject: String,
        chapter: String,
        difficulty: Difficulty,
        question_type: String,
        count: u8,
        class_level: String,
        extra_commands: Option<String>,
        title: Option<String>,
        provider: Option<Provider>,
    ) -> Self {
        Self {
            subject,
            chapter,
            difficulty,
            question_type,
            count: count.clamp(COUNT_MIN, COUNT_MAX),
            class_level,
            extra_commands: none_if_blank(extra_commands),
            title: none_if_blank(title),
            provider,
        }
    }

    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }
}

/// Extra switches for the PDF rendering endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfOptions {
    pub include_answers: bool,
    pub include_explanations: bool,
}

/// Payload for the question-paper PDF endpoint.
///
/// The PDF endpoints take the custom title as `customTitle`, unlike the JSON
/// endpoint's `title`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfRequest {
    pub subject: String,
    pub chapter: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: String,
    pub count: u8,
    pub class_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_commands: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub include_answers: bool,
    pub include_explanations: bool,
}

impl PdfRequest {
    #[must_use]
    pub fn from_request(request: GenerationRequest, options: PdfOptions) -> Self {
        Self {
            subject: request.subject,
            chapter: request.chapter,
            difficulty: request.difficulty,
            question_type: request.question_type,
            count: request.count,
            class_level: request.class_level,
            extra_commands: request.extra_commands,
            custom_title: request.title,
            provider: request.provider,
            include_answers: options.include_answers,
            include_explanations: options.include_explanations,
        }
    }
}

/// Payload for the answer-key PDF endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerKeyRequest {
    pub subject: String,
    pub chapter: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub question_type: String,
    pub count: u8,
    pub class_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_commands: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

impl From<GenerationRequest> for AnswerKeyRequest {
    fn from(request: GenerationRequest) -> Self {
        Self {
            subject: request.subject,
            chapter: request.chapter,
            difficulty: request.difficulty,
            question_type: request.question_type,
            count: request.count,
            class_level: request.class_level,
            extra_commands: request.extra_commands,
            custom_title: request.title,
            provider: request.provider,
        }
    }
}

/// One entry of a mixed paper: a question type and how many of it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionTypeCount {
    #[serde(rename = "type")]
    pub question_type: String,
    pub count: u8,
}

impl QuestionTypeCount {
    #[must_use]
    pub fn new(question_type: String, count: u8) -> Self {
        Self {
            question_type,
            count: count.clamp(TYPE_COUNT_MIN, TYPE_COUNT_MAX),
        }
    }
}

impl FromStr for QuestionTypeCount {
    type Err = String;

    /// Parse a `TYPE:COUNT` spec such as `multiple-choice:3`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (question_type, count) = spec
            .split_once(':')
            .ok_or_else(|| format!("expected TYPE:COUNT, got {spec}"))?;

        let question_type = question_type.trim();
        if question_type.is_empty() {
            return Err(format!("expected TYPE:COUNT, got {spec}"));
        }

        let count = count
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("invalid count in {spec}"))?;

        Ok(Self::new(question_type.to_string(), count))
    }
}

/// Parameters for a mixed-type question set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedRequest {
    pub subject: String,
    pub chapter: String,
    pub difficulty: Difficulty,
    pub class_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_commands: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub question_types: Vec<QuestionTypeCount>,
}

impl MixedRequest {
    /// Total questions across all types.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.question_types
            .iter()
            .map(|entry| u32::from(entry.count))
            .sum()
    }
}

/// Payload for the mixed-paper PDF endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedPdfRequest {
    pub subject: String,
    pub chapter: String,
    pub difficulty: Difficulty,
    pub class_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_commands: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub question_types: Vec<QuestionTypeCount>,
    pub include_answers: bool,
    pub include_explanations: bool,
}

impl MixedPdfRequest {
    #[must_use]
    pub fn from_request(request: MixedRequest, options: PdfOptions) -> Self {
        Self {
            subject: request.subject,
            chapter: request.chapter,
            difficulty: request.difficulty,
            class_level: request.class_level,
            extra_commands: request.extra_commands,
            custom_title: request.title,
            provider: request.provider,
            question_types: request.question_types,
            include_answers: options.include_answers,
            include_explanations: options.include_explanations,
        }
    }
}

/// Payload for the mixed answer-key PDF endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MixedAnswerKeyRequest {
    pub subject: String,
    pub chapter: String,
    pub difficulty: Difficulty,
    pub class_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_commands: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub question_types: Vec<QuestionTypeCount>,
}

impl From<MixedRequest> for MixedAnswerKeyRequest {
    fn from(request: MixedRequest) -> Self {
        Self {
            subject: request.subject,
            chapter: request.chapter,
            difficulty: request.difficulty,
            class_level: request.class_level,
            extra_commands: request.extra_commands,
            custom_title: request.title,
            provider: request.provider,
            question_types: request.question_types,
        }
    }
}

/// One provider's result in an A/B comparison.
#[derive(Debug, Clone)]
pub struct ProviderRun {
    pub provider: Provider,
    pub elapsed: Duration,
    pub result: Value,
}

/// Side-by-side results from both providers for the same request.
#[derive(Debug, Clone)]
pub struct AbTestReport {
    pub runs: Vec<ProviderRun>,
}

impl AbTestReport {
    /// Provider with the lowest wall-clock time, if any runs exist.
    #[must_use]
    pub fn fastest(&self) -> Option<Provider> {
        self.runs
            .iter()
            .min_by_key(|run| run.elapsed)
            .map(|run| run.provider)
    }
}
