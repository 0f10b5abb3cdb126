#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Answers;
use crate::domain::services::actions::help_text;
use crate::domain::services::catalog_text;
use crate::domain::services::LogoSynthesizer;

/// Logo flags in question order. Each one answers the question at its
/// position.
const LOGO_ARGS: [&str; 5] = ["name", "style", "colors", "symbol", "layout"];

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn logo_answers(matches: &ArgMatches) -> Answers {
    return LOGO_ARGS
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| {
            let val = matches.get_one::<String>(name)?;
            return Some((Answers::key_for(idx + 1), val.to_string()));
        })
        .collect();
}

async fn write_logo(matches: &ArgMatches) -> Result<()> {
    let image = LogoSynthesizer::synthesize(&logo_answers(matches));
    let svg = image.to_svg();

    if let Some(output) = matches.get_one::<String>("output") {
        fs::write(output, svg.as_bytes()).await?;
        println!("Saved {} logo to {output}", image.design.brand);
        return Ok(());
    }

    println!("{svg}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for BrandCraft")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running BrandCraft with environment variable RUST_LOG=brandcraft")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_logo() -> Command {
    let mut cmd = Command::new("logo")
        .about("Draws a logo from the given answers without opening the chat. Flags left out fall back to defaults.");

    let helps = [
        "Brand name written on the logo.",
        "Style, such as minimal, bold or vintage.",
        "Favorite colors. The first known color becomes the primary color.",
        "Symbols that represent the idea, such as leaf or camera.",
        "Layout: text-only, icon+text or symbol-only.",
    ];
    for (name, help) in LOGO_ARGS.iter().zip(helps) {
        cmd = cmd.arg(Arg::new(*name).long(*name).num_args(1).help(help));
    }

    return cmd.arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .num_args(1)
            .help("File to write the SVG to. Prints to stdout when omitted."),
    );
}

fn arg_backend_url() -> Arg {
    return Arg::new(ConfigKey::BackendURL.to_string())
        .short('u')
        .long(ConfigKey::BackendURL.to_string())
        .env("BRANDCRAFT_BACKEND_URL")
        .num_args(1)
        .help(format!(
            "BrandCraft backend API URL. [default: {}]",
            Config::default(ConfigKey::BackendURL)
        ));
}

fn arg_backend_timeout() -> Arg {
    return Arg::new(ConfigKey::BackendTimeout.to_string())
        .long(ConfigKey::BackendTimeout.to_string())
        .env("BRANDCRAFT_BACKEND_TIMEOUT")
        .num_args(1)
        .help(format!(
            "Time to wait in milliseconds for a reply from the backend. [default: {}]",
            Config::default(ConfigKey::BackendTimeout)
        ));
}

fn arg_backend_health_check_timeout() -> Arg {
    return Arg::new(ConfigKey::BackendHealthCheckTimeout.to_string())
        .long(ConfigKey::BackendHealthCheckTimeout.to_string())
        .env("BRANDCRAFT_BACKEND_HEALTH_CHECK_TIMEOUT")
        .num_args(1)
        .help(
            format!("Time to wait in milliseconds before timing out when doing a healthcheck for the backend. [default: {}]", Config::default(ConfigKey::BackendHealthCheckTimeout)),
        );
}

fn arg_feature() -> Arg {
    return Arg::new(ConfigKey::Feature.to_string())
        .short('f')
        .long(ConfigKey::Feature.to_string())
        .env("BRANDCRAFT_FEATURE")
        .num_args(1)
        .help("Feature to start a guided brief with when the chat opens. Run `brandcraft features` to list them.");
}

fn arg_logo_dir() -> Arg {
    return Arg::new(ConfigKey::LogoDir.to_string())
        .long(ConfigKey::LogoDir.to_string())
        .env("BRANDCRAFT_LOGO_DIR")
        .num_args(1)
        .help(format!(
            "Directory generated logos are saved to. [default: {}]",
            Config::default(ConfigKey::LogoDir)
        ));
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start a new chat session.")
        .arg(arg_backend_url())
        .arg(arg_backend_timeout())
        .arg(arg_backend_health_check_timeout())
        .arg(arg_feature())
        .arg(arg_logo_dir());
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("brandcraft")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("features").about("Lists every feature with its id and number of questions."))
        .subcommand(subcommand_logo())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(arg_backend_url())
        .arg(arg_backend_timeout())
        .arg(arg_backend_health_check_timeout())
        .arg(arg_feature())
        .arg(arg_logo_dir())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("BRANDCRAFT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        );
}

/// Parses the command line. Returns true when the chat should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = Config::log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("features", _)) => {
            println!("{}", catalog_text());
            return Ok(false);
        }
        Some(("logo", logo_matches)) => {
            write_logo(logo_matches).await?;
            return Ok(false);
        }
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
