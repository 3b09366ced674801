extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;

use cf_contest::api;
use clap::{
    builder::{PossibleValuesParser, RangedU64ValueParser},
    crate_description, crate_name, value_parser, Arg, ArgAction, Command,
};
use pretty_env_logger::init_timed;
use std::{error::Error as StdError, io::Write, path::PathBuf, process::exit};
use termcolor::{ColorChoice, StandardStream};

#[macro_use]
mod color;
mod command {
    pub mod new;
}

use command::new::{new_contest, Options};

fn cli() -> Command<'static> {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("new")
                .about("Prepare a directory for a contest")
                .arg(
                    Arg::new("contest")
                        .help("Contest ID")
                        .required(true)
                        .value_parser(RangedU64ValueParser::<u64>::new().range(1..)),
                )
                .arg(
                    Arg::new("dir")
                        .short('d')
                        .long("dir")
                        .takes_value(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory to create the contest in"),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .takes_value(true)
                        .help("Package name passed to the toolchain"),
                )
                .arg(
                    Arg::new("template")
                        .short('t')
                        .long("template")
                        .takes_value(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Template file rendered for every problem"),
                )
                .arg(
                    Arg::new("lang")
                        .short('l')
                        .long("lang")
                        .takes_value(true)
                        .value_parser(PossibleValuesParser::new(["cpp", "rust"]))
                        .default_value("rust")
                        .help("Language to use"),
                )
                .arg(
                    Arg::new("update")
                        .short('u')
                        .long("update")
                        .action(ArgAction::SetTrue)
                        .help("Fetch contest info even if it is cached"),
                ),
        )
}

fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let matches = cli().get_matches();
    let result = match matches.subcommand() {
        Some(("new", args)) => match api::client() {
            Ok(http) => new_contest(&mut stdout, &http, &Options::from_matches(args)),
            Err(e) => Err(e.into()),
        },
        _ => unreachable!("subcommand is required"),
    };
    if let Err(e) = result {
        let mut msg = e.to_string();
        let mut source = StdError::source(e.as_ref());
        while let Some(s) = source {
            msg.push_str(&format!("\n  caused by: {}", s));
            source = s.source();
        }
        write_error!(&mut stdout, "Error", "{}", msg);
        exit(1);
    }
}
