pub mod auth;
pub mod images;
pub mod questions;

use crate::api::ApiClient;
use crate::cli::globals::GlobalArgs;
use crate::features::images::types::ImageRequest;
use crate::features::questions::types::{
    AnswerKeyRequest, GenerationRequest, MixedAnswerKeyRequest, MixedPdfRequest, MixedRequest,
    PdfRequest,
};
use crate::session::SessionStore;
use anyhow::Result;
use secrecy::SecretString;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Action {
    Auth(AuthAction),
    Questions(QuestionsAction),
    Images(ImagesAction),
}

#[derive(Debug)]
pub enum AuthAction {
    Login {
        email: String,
        password: SecretString,
    },
    Signup {
        name: String,
        email: String,
        password: SecretString,
    },
    Logout,
    Profile,
}

#[derive(Debug)]
pub enum QuestionsAction {
    Generate(GenerationRequest),
    Pdf {
        request: PdfRequest,
        output: PathBuf,
    },
    AnswerKey {
        request: AnswerKeyRequest,
        output: PathBuf,
    },
    Mixed(MixedRequest),
    MixedPdf {
        request: MixedPdfRequest,
        output: PathBuf,
    },
    MixedAnswerKey {
        request: MixedAnswerKeyRequest,
        output: PathBuf,
    },
    Download {
        filename: String,
        output: PathBuf,
    },
    AbTest(GenerationRequest),
}

#[derive(Debug)]
pub enum ImagesAction {
    Generate(ImageRequest),
    Templates {
        subject: String,
        keywords: Vec<String>,
    },
    Preview {
        template_id: String,
    },
}

// The stored token, when present, becomes the client's bearer credential.
pub(crate) fn api_client(globals: &GlobalArgs) -> Result<ApiClient> {
    let token = SessionStore::new()
        .load()?
        .map(|session| SecretString::from(session.token));
    Ok(ApiClient::new(&globals.api_url, token)?)
}
