//! Resolve each installer field from flags, prompts and computed defaults.

use secrecy::SecretString;

use crate::domain::normalize::{normalize_base_url, normalize_host};
use crate::domain::secret::{GENERATE_SENTINEL, generate_secret};
use crate::domain::validation::{require_non_empty, validate_password};
use crate::domain::{AppError, ExplicitParameters, Field, InstallParameters, ValidationError};
use crate::ports::{AnswerValidator, ConsolePort, Question};

const PROMPT_NOTICE: &str =
    "Please complete following details to install MODX. Leave empty to use the [default].";
const MASKED: &str = "********";

/// Ambient values the defaults are computed from.
#[derive(Debug, Clone)]
pub struct ResolutionDefaults {
    /// Working directory basename.
    pub project_name: String,
    /// Local hostname.
    pub hostname: String,
}

/// Resolve all nine fields in order.
///
/// Explicit values are echoed and used without prompting; missing values are
/// asked for with their default in brackets. Normalization runs on both paths.
/// A flag value that fails validation aborts resolution; an interactive answer
/// that fails is asked for again by the console.
pub fn resolve<C: ConsolePort + ?Sized>(
    explicit: &ExplicitParameters,
    defaults: &ResolutionDefaults,
    console: &mut C,
) -> Result<InstallParameters, AppError> {
    if !explicit.is_complete() {
        console.say(PROMPT_NOTICE);
    }

    let mut resolver = Resolver { explicit, console };
    let admin_default = format!("{}_admin", defaults.project_name);

    let db_name = resolver.text(Field::DbName, Some(defaults.project_name.as_str()), None)?;
    let db_user = resolver.text(Field::DbUser, Some("root"), None)?;
    let db_password = resolver.secret(Field::DbPassword, None)?;
    let db_host = resolver.text(Field::DbHost, Some(defaults.hostname.as_str()), Some(HOST))?;
    let base_url = resolver.text(Field::BaseUrl, Some("/"), Some(BASE_URL))?;
    let language = resolver.text(Field::Language, Some("en"), None)?;
    let manager_user = resolver.text(Field::ManagerUser, Some(admin_default.as_str()), None)?;

    let mut manager_password = resolver.secret(Field::ManagerPassword, Some(GENERATE_SENTINEL))?;
    if manager_password == GENERATE_SENTINEL {
        manager_password = generate_secret();
        resolver.console.say(&format!("Generated Manager Password: {}", manager_password));
    }

    let manager_email = resolver.text(Field::ManagerEmail, None, None)?;

    Ok(InstallParameters {
        db_name,
        db_user,
        db_password: SecretString::from(db_password),
        db_host,
        base_url,
        language,
        manager_user,
        manager_password: SecretString::from(manager_password),
        manager_email,
    })
}

/// Field-specific rewrite plus the check that applies to its result.
struct Normalizer {
    apply: fn(&str) -> String,
    validate: AnswerValidator,
}

const HOST: Normalizer = Normalizer { apply: normalize_host, validate: validate_host };
const BASE_URL: Normalizer = Normalizer { apply: normalize_base_url, validate: accept_any };

fn accept_any(_: &str) -> Result<(), ValidationError> {
    Ok(())
}

fn validate_host(value: &str) -> Result<(), ValidationError> {
    require_non_empty(Field::DbHost.prompt_label(), &normalize_host(value))
}

fn validate_db_name(value: &str) -> Result<(), ValidationError> {
    require_non_empty(Field::DbName.prompt_label(), value)
}

fn validate_db_user(value: &str) -> Result<(), ValidationError> {
    require_non_empty(Field::DbUser.prompt_label(), value)
}

fn validate_language(value: &str) -> Result<(), ValidationError> {
    require_non_empty(Field::Language.prompt_label(), value)
}

fn validate_manager_user(value: &str) -> Result<(), ValidationError> {
    require_non_empty(Field::ManagerUser.prompt_label(), value)
}

fn validate_manager_email(value: &str) -> Result<(), ValidationError> {
    require_non_empty(Field::ManagerEmail.prompt_label(), value)
}

fn presence_validator(field: Field) -> AnswerValidator {
    match field {
        Field::DbName => validate_db_name,
        Field::DbUser => validate_db_user,
        Field::DbHost => validate_host,
        Field::Language => validate_language,
        Field::ManagerUser => validate_manager_user,
        Field::ManagerEmail => validate_manager_email,
        Field::BaseUrl | Field::DbPassword | Field::ManagerPassword => accept_any,
    }
}

struct Resolver<'a, C: ConsolePort + ?Sized> {
    explicit: &'a ExplicitParameters,
    console: &'a mut C,
}

impl<C: ConsolePort + ?Sized> Resolver<'_, C> {
    fn text(
        &mut self,
        field: Field,
        default: Option<&str>,
        normalizer: Option<Normalizer>,
    ) -> Result<String, AppError> {
        let validator = match &normalizer {
            Some(normalizer) => normalizer.validate,
            None => presence_validator(field),
        };

        let explicit = self.explicit;
        let value = match explicit.get(field) {
            Some(value) => {
                self.echo(field, value);
                validator(value)?;
                value.to_string()
            }
            None => {
                let mut question = Question::new(field.prompt_label()).validate_with(validator);
                if let Some(default) = default.filter(|d| !d.is_empty()) {
                    question = question.with_default(default);
                }
                self.console.ask(&question)?
            }
        };

        Ok(match normalizer {
            Some(normalizer) => (normalizer.apply)(&value),
            None => value,
        })
    }

    fn secret(&mut self, field: Field, default: Option<&str>) -> Result<String, AppError> {
        let explicit = self.explicit;
        if let Some(value) = explicit.get(field) {
            self.echo(field, value);
            validate_password(value)?;
            return Ok(value.to_string());
        }

        let mut question =
            Question::new(field.prompt_label()).hidden().validate_with(validate_password);
        if let Some(default) = default {
            question = question.with_default(default);
        }
        self.console.ask(&question)
    }

    fn echo(&mut self, field: Field, value: &str) {
        let shown = if field.is_secret() && value != GENERATE_SENTINEL { MASKED } else { value };
        self.console.say(&format!("{:<18}{}", field.echo_label(), shown));
    }
}
