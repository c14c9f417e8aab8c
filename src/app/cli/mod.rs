//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::app::commands::install::{InstallOptions, RunTimer};
use crate::domain::{AppError, ExplicitParameters, ModxVersion};

const LOG_ENV: &str = "MODX_INSTALL_LOG";

#[derive(Parser)]
#[command(name = "modx-install")]
#[command(version)]
#[command(about = "Download, configure and install a fresh MODX site", long_about = None)]
struct Cli {
    /// MODX version to install, e.g. 2.8.5-pl, or "latest" for the last stable release
    #[arg(value_name = "VERSION", default_value = "latest")]
    modx_version: String,
    /// Force download the MODX package even if it already exists in the cache folder
    #[arg(short = 'd', long)]
    download: bool,
    /// Name of the database to use
    #[arg(short = 'N', long, value_parser = NonEmptyStringValueParser::new())]
    name: Option<String>,
    /// Database user for the install script
    #[arg(short = 'u', long, value_parser = NonEmptyStringValueParser::new())]
    user: Option<String>,
    /// Database password for the install script
    #[arg(short = 'p', long, value_parser = NonEmptyStringValueParser::new())]
    password: Option<String>,
    /// Database host for the install script
    #[arg(short = 'H', long, value_parser = NonEmptyStringValueParser::new())]
    host: Option<String>,
    /// Base URL of the MODX install
    #[arg(short = 'b', long, value_parser = NonEmptyStringValueParser::new())]
    base: Option<String>,
    /// Manager language to install
    #[arg(short = 'l', long, value_parser = NonEmptyStringValueParser::new())]
    language: Option<String>,
    /// Manager user created by the install script
    #[arg(short = 'U', long, value_parser = NonEmptyStringValueParser::new())]
    manager_user: Option<String>,
    /// Password for the new manager user; "generate" creates a random one
    #[arg(short = 'P', long, value_parser = NonEmptyStringValueParser::new())]
    manager_password: Option<String>,
    /// Email address for the new manager user
    #[arg(short = 'E', long, value_parser = NonEmptyStringValueParser::new())]
    manager_email: Option<String>,
    /// PHP interpreter used to run the setup
    #[arg(long, env = "MODX_INSTALL_PHP", default_value = "php")]
    php: String,
    /// Install into this directory instead of the current one
    #[arg(long)]
    dir: Option<PathBuf>,
}

impl Cli {
    fn into_options(self) -> Result<(InstallOptions, String, Option<PathBuf>), AppError> {
        let version: ModxVersion = self.modx_version.parse()?;
        let explicit = ExplicitParameters {
            db_name: self.name,
            db_user: self.user,
            db_password: self.password,
            db_host: self.host,
            base_url: self.base,
            language: self.language,
            manager_user: self.manager_user,
            manager_password: self.manager_password,
            manager_email: self.manager_email,
        };
        let options = InstallOptions { version, force_download: self.download, explicit };
        Ok((options, self.php, self.dir))
    }
}

pub fn run() {
    let timer = RunTimer::start();
    let cli = Cli::parse();
    init_logging();

    let result = cli.into_options().and_then(|(options, php, dir)| {
        let settings = api::settings_for(dir, php)?;
        api::install(&settings, options, &timer)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
