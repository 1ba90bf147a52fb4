// tests/cli_and_confirm.rs

use std::io::Cursor;
use std::path::PathBuf;

use clap::Parser;
use devprep::cli::{CliArgs, LogLevel};
use devprep::confirm::{PROMPT, wait_for_ack};
use devprep::exec::CommandSpec;
use devprep::logging::resolve_level;

#[test]
fn defaults_need_no_flags() {
    let args = CliArgs::try_parse_from(["devprep"]).unwrap();
    assert!(!args.confirm);
    assert!(!args.dry_run);
    assert!(!args.strict);
    assert!(!args.no_editor);
    assert!(args.project_root.is_none());
    assert!(args.config.is_none());
}

#[test]
fn flags_are_parsed() {
    let args = CliArgs::try_parse_from([
        "devprep",
        "--project-root",
        "web",
        "--confirm",
        "--no-editor",
        "--strict",
        "--log-prefix",
        "prep",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert_eq!(args.project_root, Some(PathBuf::from("web")));
    assert!(args.confirm);
    assert!(args.no_editor);
    assert!(args.strict);
    assert_eq!(args.log_prefix.as_deref(), Some("prep"));
    assert!(matches!(args.log_level, Some(LogLevel::Debug)));
}

#[test]
fn unknown_log_level_is_rejected() {
    assert!(CliArgs::try_parse_from(["devprep", "--log-level", "loud"]).is_err());
}

#[test]
fn log_level_priority() {
    assert_eq!(resolve_level(Some(LogLevel::Trace), Some("error")), tracing::Level::TRACE);
    assert_eq!(resolve_level(None, Some(" Debug ")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some("nonsense")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, None), tracing::Level::WARN);
}

#[test]
fn confirm_waits_for_a_line() {
    let mut input = Cursor::new(b"\nleftover\n".to_vec());
    let mut output = Vec::new();

    wait_for_ack(&mut input, &mut output).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    assert_eq!(input.position(), 1);
}

#[test]
fn confirm_accepts_closed_input() {
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    assert!(wait_for_ack(&mut input, &mut output).is_ok());
}

#[test]
fn command_display_quotes_whitespace() {
    let cmd = CommandSpec::new("code").arg("/home/me/My Project");
    assert_eq!(cmd.to_string(), "code \"/home/me/My Project\"");

    let argv: Vec<String> = ["npm", "run", "lint", "--", "--fix"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let cmd = CommandSpec::from_argv(&argv).unwrap();
    assert_eq!(cmd.to_string(), "npm run lint -- --fix");
    assert!(CommandSpec::from_argv(&[]).is_none());
}
