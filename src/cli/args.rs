use std::path::PathBuf;

use clap::Parser;

use tfstate_query::{DEFAULT_STATE_FILE, LookupConfig};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Attribute to print, as resource_type.name.property
    #[arg(allow_hyphen_values = true)]
    pub query: String,

    /// Terraform state file to read
    #[arg(long, env = "TFSTATE_QUERY_STATE", default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,
}

impl Cli {
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig::new(self.state.clone())
    }
}
