use clap::{Parser, Subcommand, ValueEnum};

use crate::{config::DEFAULT_BASE_URL, json_codec::field_naming::FieldNaming};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(short, long, default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(short, long, value_enum, default_value_t = Naming::Underscores)]
    pub naming: Naming,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the query parameters of a URI as JSON
    Query { uri: String },

    /// Normalize a Cache-Control header value
    CacheControl {
        value: String,

        /// Also accept responses stale by up to this many seconds
        #[arg(long)]
        max_stale: Option<u64>,
    },

    /// GET a path relative to the base URL, printing the API error on failure
    Fetch {
        path: String,

        #[arg(short, long, env = "VIMEO_ACCESS_TOKEN")]
        access_token: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum Naming {
    Identity,
    Underscores,
}

impl From<Naming> for FieldNaming {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Identity => FieldNaming::Identity,
            Naming::Underscores => FieldNaming::LowerCaseWithUnderscores,
        }
    }
}
