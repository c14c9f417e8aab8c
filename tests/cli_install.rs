mod common;

use common::{FAKE_SETUP_OUTPUT, TestContext};
use predicates::prelude::*;

#[cfg(unix)]
#[test]
fn install_with_all_flags_runs_setup_without_prompting() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(TestContext::all_fields())
        .assert()
        .success()
        .stdout(predicate::str::contains("Please complete").not())
        .stdout(predicate::str::contains("DB Password:      ********"))
        .stdout(predicate::str::contains("Manager Password: generate"))
        .stdout(predicate::str::contains("Generated Manager Password: "))
        .stdout(predicate::str::contains("Running MODX Setup..."))
        .stdout(predicate::str::contains(FAKE_SETUP_OUTPUT))
        .stdout(predicate::str::contains("second line").not())
        .stdout(predicate::str::contains("Done! Time: "));

    assert!(!ctx.site_dir().join("config.xml").exists(), "config.xml should be cleaned up");
}

#[cfg(unix)]
#[test]
fn setup_receives_normalized_config_document() {
    let ctx = TestContext::new();
    ctx.cli().args(TestContext::all_fields()).assert().success();

    let config = ctx.captured_config().expect("installer should have seen the config");
    let site = ctx.site_dir().canonicalize().unwrap();
    let prefix = format!("{}/", site.display());

    assert!(config.contains("<database>shop</database>"));
    assert!(config.contains("<database_user>root</database_user>"));
    assert!(config.contains("<database_password>longenoughpw</database_password>"));
    assert!(config.contains("<language>en</language>"));
    assert!(config.contains("<cmsadmin>admin</cmsadmin>"));
    assert!(config.contains("<cmsadminemail>ops@example.com</cmsadminemail>"));
    assert!(config.contains("<http_host>127.0.0.1</http_host>"));
    assert!(config.contains("<context_web_url>/store/</context_web_url>"));
    assert!(config.contains("<context_mgr_url>/store/manager/</context_mgr_url>"));
    assert!(config.contains(&format!("<core_path>{}core/</core_path>", prefix)));
    assert!(config.contains(&format!("<context_web_path>{}</context_web_path>", prefix)));
    assert!(!config.contains("<cmspassword>generate</cmspassword>"));
}

#[cfg(unix)]
#[test]
fn setup_is_invoked_in_new_install_mode_with_timezone() {
    let ctx = TestContext::new();
    ctx.cli().args(TestContext::all_fields()).assert().success();

    let args = ctx.captured_args().expect("installer should have been invoked");
    assert_eq!(args[0], "-d");
    assert_eq!(args[1], "date.timezone=Europe/Amsterdam");
    assert!(args[2].ends_with("setup/index.php"));
    assert_eq!(args[3], "--installmode=new");
    assert!(args[4].starts_with("--config=") && args[4].ends_with("config.xml"));
}

#[cfg(unix)]
#[test]
fn short_database_password_aborts_before_setup() {
    let ctx = TestContext::new();
    let mut args = TestContext::all_fields();
    let position = args.iter().position(|arg| *arg == "longenoughpw").unwrap();
    args[position] = "short";

    ctx.cli()
        .args(args)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at least 8 characters"));

    assert!(!ctx.installer_ran());
    assert!(!ctx.site_dir().join("config.xml").exists());
}

#[test]
fn missing_php_interpreter_still_reports_done() {
    let ctx = TestContext::new();
    let missing_php = ctx.site_dir().join("no-such-php");

    ctx.cli_with_php(&missing_php)
        .args(TestContext::all_fields())
        .assert()
        .success()
        .stdout(predicate::str::contains("MODX Setup produced no output."))
        .stdout(predicate::str::contains("Done! Time: "))
        .stderr(predicate::str::contains("Could not run MODX Setup"));

    assert!(!ctx.site_dir().join("config.xml").exists(), "config.xml should be cleaned up");
}

#[test]
fn unknown_version_fails_with_exit_code_one() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("not-a-version")
        .args(TestContext::all_fields())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to prepare MODX"));

    assert!(!ctx.installer_ran());
}

#[test]
fn empty_flag_value_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli().args(["--name", ""]).assert().failure();

    assert!(!ctx.installer_ran());
}

#[test]
fn missing_working_directory_is_reported() {
    let ctx = TestContext::new();
    let missing = ctx.site_dir().join("does-not-exist");

    ctx.cli_in(&missing)
        .args(TestContext::all_fields())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Working directory"));
}

#[test]
fn help_lists_field_flags() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--manager-password"))
        .stdout(predicate::str::contains("--download"));
}
