//! Types for the diagram-template and image-generation endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "simple" => Ok(Self::Simple),
            "medium" => Ok(Self::Medium),
            "complex" => Ok(Self::Complex),
            other => Err(format!("invalid complexity: {other}")),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Complex => "complex",
        };
        f.write_str(label)
    }
}

/// Whether to render from a stored template, an AI model, or whichever the
/// backend picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredType {
    Template,
    Ai,
    Auto,
}

impl FromStr for PreferredType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "template" => Ok(Self::Template),
            "ai" => Ok(Self::Ai),
            "auto" => Ok(Self::Auto),
            other => Err(format!("invalid preferred type: {other}")),
        }
    }
}

impl fmt::Display for PreferredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Template => "template",
            Self::Ai => "ai",
            Self::Auto => "auto",
        };
        f.write_str(label)
    }
}

/// Parameters for generating an image from question content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub question_content: String,
    pub subject: String,
    pub complexity: Complexity,
    pub preferred_type: PreferredType,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TemplateCategory {
    pub id: String,
    pub name: String,
}

/// A diagram template as listed by the backend.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<TemplateCategory>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}
