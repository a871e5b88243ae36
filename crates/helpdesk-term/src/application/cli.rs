use clap::Arg;
use clap::ArgAction;
use clap::Command;

use crate::configuration::{Config, ConfigKey};

// Long arg names must match the ConfigKey strings so Config::load can read
// the matches generically.
pub fn build() -> Command {
    Command::new("helpdesk-term")
        .about("Terminal chat client for the helpdesk assistant")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(ConfigKey::BackendUrl.to_string())
                .long(ConfigKey::BackendUrl.to_string())
                .help(format!(
                    "Base address of the assistant backend [default: {}]",
                    Config::default(ConfigKey::BackendUrl)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::UserId.to_string())
                .long(ConfigKey::UserId.to_string())
                .help(format!(
                    "Opaque user identifier sent on session creation [default: {}]",
                    Config::default(ConfigKey::UserId)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .help("Path to the configuration file")
                .num_args(1),
        )
        .arg(
            Arg::new("print-default-config")
                .long("print-default-config")
                .help("Print the default config file to stdout and exit")
                .action(ArgAction::SetTrue),
        )
}
