//! Render the setup configuration document and hand it to the store.

use std::path::PathBuf;

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::domain::{AppError, InstallConfigDocument, InstallParameters};
use crate::ports::ConfigDocumentStore;

static SETUP_TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/setup");

const CONFIG_TEMPLATE: &str = "config.xml.j2";

/// Render `params` into the setup XML for an install rooted at `dir_prefix`.
pub fn render(params: &InstallParameters, dir_prefix: &str) -> Result<String, AppError> {
    let template = SETUP_TEMPLATES_DIR
        .get_file(CONFIG_TEMPLATE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::Template(format!("{} is missing", CONFIG_TEMPLATE)))?;

    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    // Escaping is done per value by the `xml` filter.
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("xml", xml_text);
    env.add_template(CONFIG_TEMPLATE, template)
        .map_err(|err| AppError::Template(format!("failed to load template: {}", err)))?;

    let document = InstallConfigDocument::new(params, dir_prefix);
    env.get_template(CONFIG_TEMPLATE)
        .and_then(|tmpl| tmpl.render(&document))
        .map_err(|err| AppError::Template(err.to_string()))
}

/// Render and write the document, returning its path.
pub fn write<S: ConfigDocumentStore + ?Sized>(
    store: &S,
    params: &InstallParameters,
    dir_prefix: &str,
) -> Result<PathBuf, AppError> {
    let contents = render(params, dir_prefix)?;
    store.write(&contents)
}

fn xml_text(value: String) -> String {
    html_escape::encode_text(&value).into_owned()
}
