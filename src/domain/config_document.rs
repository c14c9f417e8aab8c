use secrecy::ExposeSecret;
use serde::Serialize;

use crate::domain::InstallParameters;

pub const DATABASE_TYPE: &str = "mysql";
pub const DATABASE_SERVER: &str = "localhost";
pub const DATABASE_CHARSET: &str = "utf8";
pub const DATABASE_COLLATION: &str = "utf8_general_ci";
pub const TABLE_PREFIX: &str = "modx_";
pub const HTTPS_PORT: u16 = 443;

/// Values consumed by the MODX command-line setup, one per schema element.
///
/// Borrowed from [`InstallParameters`]; secrets are exposed only here.
#[derive(Debug, Serialize)]
pub struct InstallConfigDocument<'a> {
    pub database_type: &'static str,
    pub database_server: &'static str,
    pub database: &'a str,
    pub database_user: &'a str,
    pub database_password: &'a str,
    pub database_connection_charset: &'static str,
    pub database_charset: &'static str,
    pub database_collation: &'static str,
    pub table_prefix: &'static str,
    pub https_port: u16,
    pub http_host: &'a str,
    pub cache_disabled: u8,
    pub inplace: u8,
    pub unpacked: u8,
    pub language: &'a str,
    pub cmsadmin: &'a str,
    pub cmspassword: &'a str,
    pub cmsadminemail: &'a str,
    pub core_path: String,
    pub context_mgr_path: String,
    pub context_mgr_url: String,
    pub context_connectors_path: String,
    pub context_connectors_url: String,
    pub context_web_path: String,
    pub context_web_url: String,
    pub remove_setup_directory: u8,
}

impl<'a> InstallConfigDocument<'a> {
    /// Build the document for `params`, installing into `dir_prefix`
    /// (a directory path ending in `/`).
    pub fn new(params: &'a InstallParameters, dir_prefix: &str) -> Self {
        let base_url = params.base_url.as_str();
        Self {
            database_type: DATABASE_TYPE,
            database_server: DATABASE_SERVER,
            database: &params.db_name,
            database_user: &params.db_user,
            database_password: params.db_password.expose_secret(),
            database_connection_charset: DATABASE_CHARSET,
            database_charset: DATABASE_CHARSET,
            database_collation: DATABASE_COLLATION,
            table_prefix: TABLE_PREFIX,
            https_port: HTTPS_PORT,
            http_host: &params.db_host,
            cache_disabled: 0,
            inplace: 1,
            unpacked: 0,
            language: &params.language,
            cmsadmin: &params.manager_user,
            cmspassword: params.manager_password.expose_secret(),
            cmsadminemail: &params.manager_email,
            core_path: format!("{}core/", dir_prefix),
            context_mgr_path: format!("{}manager/", dir_prefix),
            context_mgr_url: format!("{}manager/", base_url),
            context_connectors_path: format!("{}connectors/", dir_prefix),
            context_connectors_url: format!("{}connectors/", base_url),
            context_web_path: dir_prefix.to_string(),
            context_web_url: base_url.to_string(),
            remove_setup_directory: 1,
        }
    }
}
