use secrecy::SecretString;

/// The nine installer fields, in the order they are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DbName,
    DbUser,
    DbPassword,
    DbHost,
    BaseUrl,
    Language,
    ManagerUser,
    ManagerPassword,
    ManagerEmail,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::DbName,
        Field::DbUser,
        Field::DbPassword,
        Field::DbHost,
        Field::BaseUrl,
        Field::Language,
        Field::ManagerUser,
        Field::ManagerPassword,
        Field::ManagerEmail,
    ];

    /// Label used when asking for the field interactively.
    pub fn prompt_label(self) -> &'static str {
        match self {
            Field::DbName => "Database Name",
            Field::DbUser => "Database User",
            Field::DbPassword => "Database Password",
            Field::DbHost => "Hostname",
            Field::BaseUrl => "Base URL",
            Field::Language => "Manager Language",
            Field::ManagerUser => "Manager User",
            Field::ManagerPassword => "Manager User Password",
            Field::ManagerEmail => "Manager Email",
        }
    }

    /// Label used when echoing an explicitly supplied value.
    pub fn echo_label(self) -> &'static str {
        match self {
            Field::DbName => "DB Name:",
            Field::DbUser => "DB User:",
            Field::DbPassword => "DB Password:",
            Field::DbHost => "DB Host:",
            Field::BaseUrl => "Base URL:",
            Field::Language => "Language:",
            Field::ManagerUser => "Manager User:",
            Field::ManagerPassword => "Manager Password:",
            Field::ManagerEmail => "Manager Email:",
        }
    }

    /// Whether typed characters must stay hidden.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::DbPassword | Field::ManagerPassword)
    }
}

/// Values supplied on the command line. `None` means "not supplied".
#[derive(Debug, Clone, Default)]
pub struct ExplicitParameters {
    pub db_name: Option<String>,
    pub db_user: Option<String>,
    pub db_password: Option<String>,
    pub db_host: Option<String>,
    pub base_url: Option<String>,
    pub language: Option<String>,
    pub manager_user: Option<String>,
    pub manager_password: Option<String>,
    pub manager_email: Option<String>,
}

impl ExplicitParameters {
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::DbName => &self.db_name,
            Field::DbUser => &self.db_user,
            Field::DbPassword => &self.db_password,
            Field::DbHost => &self.db_host,
            Field::BaseUrl => &self.base_url,
            Field::Language => &self.language,
            Field::ManagerUser => &self.manager_user,
            Field::ManagerPassword => &self.manager_password,
            Field::ManagerEmail => &self.manager_email,
        };
        value.as_deref()
    }

    /// True when every field was supplied, so no prompt will be shown.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_some())
    }
}

/// Resolved, validated configuration for one installation attempt.
#[derive(Debug)]
pub struct InstallParameters {
    pub db_name: String,
    pub db_user: String,
    pub db_password: SecretString,
    pub db_host: String,
    pub base_url: String,
    pub language: String,
    pub manager_user: String,
    pub manager_password: SecretString,
    pub manager_email: String,
}
