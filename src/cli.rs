use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  #[arg(
    short,
    long,
    value_name = "URL",
    help = "Base URL of the students API, overrides REACT_APP_API_BASE_URL and the config file"
  )]
  pub api_base_url: Option<String>,
}
