use clap::{Arg, Command};

pub fn with_commands(command: Command) -> Command {
    command
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session token")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Account email")
                        .env("QUESTIONGEN_EMAIL")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Account password")
                        .env("QUESTIONGEN_PASSWORD")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("signup")
                .about("Create an account and store the session token")
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help("Full name")
                        .required(true),
                )
                .arg(
                    Arg::new("email")
                        .long("email")
                        .help("Account email")
                        .env("QUESTIONGEN_EMAIL")
                        .required(true),
                )
                .arg(
                    Arg::new("password")
                        .long("password")
                        .help("Account password")
                        .env("QUESTIONGEN_PASSWORD")
                        .required(true),
                )
                .arg(
                    Arg::new("confirm-password")
                        .long("confirm-password")
                        .help("Repeat the password to confirm"),
                ),
        )
        .subcommand(Command::new("logout").about("Clear the stored session"))
        .subcommand(Command::new("profile").about("Show the stored account details"))
}
