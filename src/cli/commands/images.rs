use clap::{Arg, ArgAction, Command};

pub fn with_commands(command: Command) -> Command {
    command.subcommand(
        Command::new("images")
            .about("Diagram templates and image generation")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(
                Command::new("generate")
                    .about("Generate an image for a question")
                    .arg(
                        Arg::new("content")
                            .long("content")
                            .help("Question content to illustrate")
                            .required(true),
                    )
                    .arg(
                        Arg::new("subject")
                            .long("subject")
                            .help("Subject")
                            .default_value("mathematics"),
                    )
                    .arg(
                        Arg::new("complexity")
                            .long("complexity")
                            .help("Image complexity")
                            .value_parser(["simple", "medium", "complex"])
                            .default_value("medium"),
                    )
                    .arg(
                        Arg::new("preferred-type")
                            .long("preferred-type")
                            .help("Rendering source")
                            .value_parser(["template", "ai", "auto"])
                            .default_value("auto"),
                    ),
            )
            .subcommand(
                Command::new("templates")
                    .about("List diagram templates")
                    .arg(
                        Arg::new("subject")
                            .long("subject")
                            .help("Subject")
                            .default_value("mathematics"),
                    )
                    .arg(
                        Arg::new("keyword")
                            .long("keyword")
                            .short('k')
                            .help("Filter keyword, repeatable")
                            .action(ArgAction::Append),
                    ),
            )
            .subcommand(
                Command::new("preview")
                    .about("Render a template preview and print its image URL")
                    .arg(
                        Arg::new("template-id")
                            .help("Template identifier")
                            .required(true),
                    ),
            ),
    )
}
