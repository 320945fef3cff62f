use crate::cli::actions::{Action, AuthAction, ImagesAction, QuestionsAction};
use crate::cli::commands::DEFAULT_API_URL;
use crate::cli::globals::GlobalArgs;
use crate::features::auth::client as auth;
use crate::features::images::types::ImageRequest;
use crate::features::questions::types::{
    none_if_blank, Difficulty, GenerationRequest, MixedPdfRequest, MixedRequest, PdfOptions,
    PdfRequest, Provider, QuestionTypeCount,
};
use anyhow::{anyhow, Context, Result};
use secrecy::SecretString;
use std::path::PathBuf;

/// Turn parsed arguments into the action to run.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<(GlobalArgs, Action)> {
    let api_url = matches
        .get_one::<String>("api-url")
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let globals = GlobalArgs::new(api_url);

    let (name, sub) = matches.subcommand().context("missing subcommand")?;
    let action = match name {
        "login" => Action::Auth(AuthAction::Login {
            email: required(sub, "email")?,
            password: SecretString::from(required(sub, "password")?),
        }),
        "signup" => {
            let password = required(sub, "password")?;
            let confirm = sub
                .get_one::<String>("confirm-password")
                .map(String::as_str);
            auth::validate_password(&password, confirm).map_err(|message| anyhow!(message))?;

            Action::Auth(AuthAction::Signup {
                name: required(sub, "name")?,
                email: required(sub, "email")?,
                password: SecretString::from(password),
            })
        }
        "logout" => Action::Auth(AuthAction::Logout),
        "profile" => Action::Auth(AuthAction::Profile),
        "generate" => Action::Questions(QuestionsAction::Generate(generation_request(sub)?)),
        "pdf" => Action::Questions(QuestionsAction::Pdf {
            request: PdfRequest::from_request(generation_request(sub)?, pdf_options(sub)),
            output: output_dir(sub)?,
        }),
        "answer-key" => Action::Questions(QuestionsAction::AnswerKey {
            request: generation_request(sub)?.into(),
            output: output_dir(sub)?,
        }),
        "mixed" => Action::Questions(QuestionsAction::Mixed(mixed_request(sub)?)),
        "mixed-pdf" => Action::Questions(QuestionsAction::MixedPdf {
            request: MixedPdfRequest::from_request(mixed_request(sub)?, pdf_options(sub)),
            output: output_dir(sub)?,
        }),
        "mixed-answer-key" => Action::Questions(QuestionsAction::MixedAnswerKey {
            request: mixed_request(sub)?.into(),
            output: output_dir(sub)?,
        }),
        "download" => Action::Questions(QuestionsAction::Download {
            filename: required(sub, "filename")?,
            output: output_dir(sub)?,
        }),
        "ab-test" => Action::Questions(QuestionsAction::AbTest(generation_request(sub)?)),
        "images" => images_action(sub)?,
        other => return Err(anyhow!("unknown subcommand: {other}")),
    };

    Ok((globals, action))
}

fn required(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn difficulty(matches: &clap::ArgMatches) -> Result<Difficulty> {
    required(matches, "difficulty")?
        .parse()
        .map_err(|message: String| anyhow!(message))
}

fn provider(matches: &clap::ArgMatches) -> Result<Option<Provider>> {
    matches
        .get_one::<String>("provider")
        .map(|value| value.parse())
        .transpose()
        .map_err(|message: String| anyhow!(message))
}

fn generation_request(matches: &clap::ArgMatches) -> Result<GenerationRequest> {
    Ok(GenerationRequest::new(
        required(matches, "subject")?,
        required(matches, "chapter")?,
        difficulty(matches)?,
        required(matches, "type")?,
        matches.get_one::<u8>("count").copied().unwrap_or(5),
        required(matches, "class-level")?,
        matches.get_one::<String>("extra").cloned(),
        matches.get_one::<String>("title").cloned(),
        provider(matches)?,
    ))
}

fn mixed_request(matches: &clap::ArgMatches) -> Result<MixedRequest> {
    let question_types: Vec<QuestionTypeCount> = matches
        .get_many::<QuestionTypeCount>("questions")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if question_types.is_empty() {
        return Err(anyhow!(
            "add at least one question type with --questions TYPE:COUNT"
        ));
    }

    Ok(MixedRequest {
        subject: required(matches, "subject")?,
        chapter: required(matches, "chapter")?,
        difficulty: difficulty(matches)?,
        class_level: required(matches, "class-level")?,
        extra_commands: none_if_blank(matches.get_one::<String>("extra").cloned()),
        title: none_if_blank(matches.get_one::<String>("title").cloned()),
        provider: provider(matches)?,
        question_types,
    })
}

fn pdf_options(matches: &clap::ArgMatches) -> PdfOptions {
    PdfOptions {
        include_answers: matches.get_flag("include-answers"),
        include_explanations: matches.get_flag("include-explanations"),
    }
}

fn output_dir(matches: &clap::ArgMatches) -> Result<PathBuf> {
    Ok(PathBuf::from(required(matches, "output")?))
}

fn images_action(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub) = matches
        .subcommand()
        .context("missing images subcommand")?;

    let action = match name {
        "generate" => ImagesAction::Generate(ImageRequest {
            question_content: required(sub, "content")?,
            subject: required(sub, "subject")?,
            complexity: required(sub, "complexity")?
                .parse()
                .map_err(|message: String| anyhow!(message))?,
            preferred_type: required(sub, "preferred-type")?
                .parse()
                .map_err(|message: String| anyhow!(message))?,
        }),
        "templates" => ImagesAction::Templates {
            subject: required(sub, "subject")?,
            keywords: sub
                .get_many::<String>("keyword")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        },
        "preview" => ImagesAction::Preview {
            template_id: required(sub, "template-id")?,
        },
        other => return Err(anyhow!("unknown images subcommand: {other}")),
    };

    Ok(Action::Images(action))
}
