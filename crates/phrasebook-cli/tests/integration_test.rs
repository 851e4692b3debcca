//! Integration tests for the phrasebook command line.

use clap::Parser;
use phrasebook_cli::{build_localizer, render, Args, Command};
use phrasebook_common::test_utils::init_test_logging;
use phrasebook_config::ConfigLoader;
use phrasebook_i18n::CountNoun;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_count_command() {
    let args = Args::try_parse_from(["phrasebook", "--culture", "ru-RU", "count", "-3", "file"]).unwrap();
    assert_eq!(args.culture.unwrap().name(), "ru-RU");
    assert_eq!(
        args.command,
        Command::Count {
            count: -3,
            noun: CountNoun::File
        }
    );
}

#[test]
fn test_parse_rejects_unknown_noun_and_bad_instant() {
    assert!(Args::try_parse_from(["phrasebook", "count", "2", "widget"]).is_err());
    assert!(Args::try_parse_from(["phrasebook", "ago", "yesterday"]).is_err());
    assert!(Args::try_parse_from(["phrasebook", "yes-no", "maybe"]).is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = Args::try_parse_from(["phrasebook", "ordinal", "22", "--log-level", "debug"]).unwrap();
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.command, Command::Ordinal { value: 22 });
}

#[test]
fn test_config_file_drives_rendering() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let resources = dir.path().join("locales");
    fs::create_dir(&resources).unwrap();
    fs::write(resources.join("yes_no.toml"), "[it]\nYes = \"Certo\"\n").unwrap();

    let path = dir.path().join("phrasebook.yaml");
    fs::write(
        &path,
        format!(
            "localization:\n  default_culture: it-IT\n  resources_dir: \"{}\"\n",
            resources.display()
        ),
    )
    .unwrap();

    let path_arg = path.to_str().unwrap();
    let args = Args::try_parse_from(["phrasebook", "--config", path_arg, "yes-no", "true"]).unwrap();

    let config = ConfigLoader::load_config(args.config.as_ref().unwrap()).unwrap();
    let localizer = build_localizer(&config).unwrap();

    assert_eq!(render(&localizer, &args.command, None).unwrap(), "Certo");
    assert_eq!(
        render(&localizer, &Command::YesNo { value: false }, None).unwrap(),
        "No"
    );
}

#[test]
fn test_until_with_reference() {
    let args = Args::try_parse_from([
        "phrasebook",
        "--culture",
        "fr",
        "until",
        "2024-06-15T12:45:00Z",
        "--reference",
        "2024-06-15T12:00:00Z",
    ])
    .unwrap();

    let localizer = build_localizer(&phrasebook_config::Config::default()).unwrap();
    let phrase = render(&localizer, &args.command, args.culture.as_ref()).unwrap();
    assert!(phrase.contains("45"), "unexpected phrase {phrase}");
}
