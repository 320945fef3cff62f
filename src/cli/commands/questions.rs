use crate::features::questions::types::QuestionTypeCount;
use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub fn validator_type_count() -> ValueParser {
    ValueParser::from(
        move |spec: &str| -> std::result::Result<QuestionTypeCount, String> { spec.parse() },
    )
}

fn paper_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("subject")
                .long("subject")
                .help("Subject of the paper")
                .default_value("Mathematics"),
        )
        .arg(
            Arg::new("chapter")
                .long("chapter")
                .help("Chapter or topic")
                .default_value("Algebra"),
        )
        .arg(
            Arg::new("difficulty")
                .long("difficulty")
                .help("Question difficulty")
                .value_parser(["easy", "medium", "hard"])
                .default_value("medium"),
        )
        .arg(
            Arg::new("class-level")
                .long("class-level")
                .help("Class level, e.g. \"class 11\"")
                .default_value("class 11"),
        )
        .arg(
            Arg::new("extra")
                .long("extra")
                .help("Extra instructions for the generator"),
        )
        .arg(Arg::new("title").long("title").help("Custom paper title"))
        .arg(
            Arg::new("provider")
                .long("provider")
                .help("AI provider")
                .value_parser(["gemini", "openai"]),
        )
}

fn single_type_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("type")
                .long("type")
                .help("Question type, e.g. multiple-choice, short-answer, true-false")
                .default_value("multiple-choice"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .short('n')
                .help("Number of questions (1-20)")
                .default_value("5")
                .value_parser(clap::value_parser!(u8).range(1..=20)),
        )
}

fn mixed_args(command: Command) -> Command {
    command.arg(
        Arg::new("questions")
            .long("questions")
            .short('q')
            .help("Question type spec as TYPE:COUNT, repeatable")
            .action(ArgAction::Append)
            .required(true)
            .value_parser(validator_type_count()),
    )
}

fn output_args(command: Command) -> Command {
    command.arg(
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Directory for the downloaded PDF")
            .default_value("."),
    )
}

fn pdf_args(command: Command) -> Command {
    output_args(command)
        .arg(
            Arg::new("include-answers")
                .long("include-answers")
                .help("Include answers in the PDF")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("include-explanations")
                .long("include-explanations")
                .help("Include explanations in the PDF")
                .action(ArgAction::SetTrue),
        )
}

pub fn with_commands(command: Command) -> Command {
    command
        .subcommand(single_type_args(paper_args(
            Command::new("generate").about("Generate a question set"),
        )))
        .subcommand(pdf_args(single_type_args(paper_args(
            Command::new("pdf").about("Generate a question paper PDF"),
        ))))
        .subcommand(output_args(single_type_args(paper_args(
            Command::new("answer-key").about("Generate an answer key PDF"),
        ))))
        .subcommand(mixed_args(paper_args(
            Command::new("mixed").about("Generate a mixed-type question set"),
        )))
        .subcommand(pdf_args(mixed_args(paper_args(
            Command::new("mixed-pdf").about("Generate a mixed-type question paper PDF"),
        ))))
        .subcommand(output_args(mixed_args(paper_args(
            Command::new("mixed-answer-key").about("Generate a mixed-type answer key PDF"),
        ))))
        .subcommand(output_args(
            Command::new("download")
                .about("Download a previously generated PDF")
                .arg(
                    Arg::new("filename")
                        .help("Server-side PDF filename")
                        .required(true),
                ),
        ))
        .subcommand(single_type_args(paper_args(
            Command::new("ab-test").about("Run the same request against gemini and openai"),
        )))
}
