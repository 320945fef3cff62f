mod auth;
mod images;
mod questions;

use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

/// Backend address used when neither the flag nor the env variable is set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let command = Command::new("questiongen")
        .about("Question paper generation client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .help("Backend API base address")
                .default_value(DEFAULT_API_URL)
                .env("QUESTIONGEN_API_URL")
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("QUESTIONGEN_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        );

    let command = auth::with_commands(command);
    let command = questions::with_commands(command);
    images::with_commands(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::questions::types::QuestionTypeCount;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "questiongen");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Question paper generation client".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_generate_defaults() {
        let matches = new().get_matches_from(vec!["questiongen", "generate"]);
        let sub = matches
            .subcommand_matches("generate")
            .expect("generate matches");

        assert_eq!(
            sub.get_one::<String>("subject").map(String::as_str),
            Some("Mathematics")
        );
        assert_eq!(
            sub.get_one::<String>("chapter").map(String::as_str),
            Some("Algebra")
        );
        assert_eq!(
            sub.get_one::<String>("difficulty").map(String::as_str),
            Some("medium")
        );
        assert_eq!(
            sub.get_one::<String>("type").map(String::as_str),
            Some("multiple-choice")
        );
        assert_eq!(sub.get_one::<u8>("count").copied(), Some(5));
        assert_eq!(
            sub.get_one::<String>("class-level").map(String::as_str),
            Some("class 11")
        );
    }

    #[test]
    fn test_count_rejects_out_of_range_values() {
        let result = new().try_get_matches_from(vec!["questiongen", "generate", "--count", "21"]);
        assert!(result.is_err());

        let result = new().try_get_matches_from(vec!["questiongen", "generate", "--count", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_mixed_question_specs_parse() {
        let matches = new().get_matches_from(vec![
            "questiongen",
            "mixed",
            "--questions",
            "multiple-choice:3",
            "--questions",
            "short-answer:2",
        ]);
        let sub = matches.subcommand_matches("mixed").expect("mixed matches");
        let specs: Vec<QuestionTypeCount> = sub
            .get_many::<QuestionTypeCount>("questions")
            .expect("specs present")
            .cloned()
            .collect();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].question_type, "multiple-choice");
        assert_eq!(specs[0].count, 3);
        assert_eq!(specs[1].question_type, "short-answer");
        assert_eq!(specs[1].count, 2);
    }

    #[test]
    fn test_mixed_rejects_malformed_specs() {
        let result =
            new().try_get_matches_from(vec!["questiongen", "mixed", "--questions", "essay"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("QUESTIONGEN_API_URL", Some("https://api.questiongen.dev")),
                ("QUESTIONGEN_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["questiongen", "profile"]);
                assert_eq!(
                    matches.get_one::<String>("api-url").map(String::as_str),
                    Some("https://api.questiongen.dev")
                );
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("QUESTIONGEN_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["questiongen", "profile"]);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("QUESTIONGEN_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["questiongen".to_string(), "profile".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let matches = new().get_matches_from(args);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_login_requires_credentials() {
        temp_env::with_vars(
            [
                ("QUESTIONGEN_EMAIL", None::<String>),
                ("QUESTIONGEN_PASSWORD", None::<String>),
            ],
            || {
                let result = new().try_get_matches_from(vec!["questiongen", "login"]);
                assert!(result.is_err());
            },
        );
    }

    #[test]
    fn test_images_requires_a_subcommand() {
        let result = new().try_get_matches_from(vec!["questiongen", "images"]);
        assert!(result.is_err());
    }
}
