use std::path::PathBuf;

use aperture_core::SearchConfig;
use aperture_model::chrono::NaiveDate;
use aperture_model::{MediaTypeName, PersonId};
use clap::{Args, Parser, Subcommand};

/// Browse a PhotoPrism library from the command line
#[derive(Parser, Debug)]
#[command(name = "aperturectl", version)]
pub struct Cli {
    /// Configuration file (defaults to ./aperture.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Environment file loaded before reading configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the server search query for the given filters and exit
    Query(SearchArgs),
    /// Search the library and print matching media as JSON lines
    Search {
        #[command(flatten)]
        search: SearchArgs,

        /// Stop after this many results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List albums as JSON lines
    Albums {
        /// Album type to list; repeat for several (defaults to config)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Free-text query passed to the server as is
    #[arg(long, value_name = "QUERY")]
    pub text: Option<String>,

    /// Only show media of this type; repeat for several
    #[arg(long = "type", value_name = "TYPE")]
    pub media_types: Vec<MediaTypeName>,

    /// Only show media in this album
    #[arg(long, value_name = "UID")]
    pub album: Option<String>,

    /// Only show media with this person (subject UID or face ID); repeat
    /// to require several
    #[arg(long = "person", value_name = "ID", value_parser = PersonId::parse)]
    pub persons: Vec<PersonId>,

    /// Only show media taken before this local day
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub before: Option<NaiveDate>,

    /// Include private media
    #[arg(long)]
    pub include_private: bool,
}

impl SearchArgs {
    pub fn to_search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::default()
            .including_private(self.include_private);

        if let Some(text) = &self.text {
            config = config.with_user_query(text.clone());
        }
        if !self.media_types.is_empty() {
            config =
                config.with_media_types(self.media_types.iter().copied());
        }
        if let Some(album) = &self.album {
            config = config.in_album(album.clone());
        }
        for person in &self.persons {
            config = config.with_person(person.clone());
        }
        if let Some(before) = self.before {
            config = config.taken_before(before);
        }

        config
    }
}
