//! # Registry Integration Tests
//!
//! Registration, discovery, filtering, parser assembly and dispatch through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgGroup, Command};
use serde_json::json;

use gel_core::registration::{
    register_command, CommandEntry, CommandRegistry, Entry, Module, ModuleSource, ModuleTable,
    GEL_NAMESPACE,
};
use gel_core::{Arguments, CommandConfig, CommandOutput, Config, RegistrationError};

/// Counts package imports on top of a module table
struct CountingSource {
    table: ModuleTable<CommandEntry>,
    imports: Arc<AtomicUsize>,
}

impl ModuleSource<CommandEntry> for CountingSource {
    fn import_package(&self, package: &str) -> anyhow::Result<Vec<Module<CommandEntry>>> {
        self.imports.fetch_add(1, Ordering::SeqCst);
        self.table.import_package(package)
    }
}

fn empty_registry() -> CommandRegistry {
    CommandRegistry::new(ModuleTable::<CommandEntry>::new().with_package("gel.commands"))
}

fn foo_config() -> Box<dyn Config> {
    Box::new(
        CommandConfig::new("cmd", "Command with a defaulted flag")
            .with_arguments(|parser| parser.arg(Arg::new("foo").long("foo").default_value("bar"))),
    )
}

fn build_config() -> Box<dyn Config> {
    Box::new(
        CommandConfig::new("build", "Build artifacts")
            .with_subparser("build-target", Some("What to build"))
            .with_arguments(|parser| {
                parser
                    .arg(Arg::new("release").long("release").action(ArgAction::SetTrue))
                    .arg(Arg::new("debug").long("debug").action(ArgAction::SetTrue))
                    .group(ArgGroup::new("profile").args(["release", "debug"]).multiple(false))
                    .subcommand(
                        Command::new("docs")
                            .arg(Arg::new("format").long("format").default_value("html")),
                    )
                    .subcommand(Command::new("lib"))
            }),
    )
}

fn noop(_: &Arguments) -> anyhow::Result<CommandOutput> {
    Ok(CommandOutput::Success)
}

fn parse(parser: &Command, argv: &[&str]) -> Arguments {
    let matches = parser.clone().try_get_matches_from(argv).unwrap();
    Arguments::from_matches(parser, &matches)
}

#[test]
fn test_distinct_ids_register_and_duplicates_fail() {
    let mut registry = empty_registry();
    registry.register(CommandEntry::new("a", GEL_NAMESPACE)).unwrap();
    registry.register(CommandEntry::new("b", GEL_NAMESPACE)).unwrap();

    let err = registry
        .register(CommandEntry::new("a", GEL_NAMESPACE))
        .unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::DuplicateEntry { ref entry_id, .. } if entry_id == "a"
    ));
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_list_returns_registration_order() {
    let mut registry = empty_registry();
    for id in ["zeta", "alpha", "mid"] {
        registry.register(CommandEntry::new(id, GEL_NAMESPACE)).unwrap();
    }

    assert_eq!(registry.list(&[]).unwrap(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_list_filter_uses_and_semantics() {
    let mut registry = empty_registry();
    registry
        .register(CommandEntry::new("both", GEL_NAMESPACE).with_tags(["t1", "t2"]))
        .unwrap();
    registry
        .register(CommandEntry::new("one", GEL_NAMESPACE).with_tags(["t1"]))
        .unwrap();
    registry
        .register(CommandEntry::new("more", GEL_NAMESPACE).with_tags(["t2", "t3", "t1"]))
        .unwrap();

    assert_eq!(registry.list(&["t1", "t2"]).unwrap(), vec!["both", "more"]);
    assert_eq!(registry.list(&["t1"]).unwrap(), vec!["both", "one", "more"]);
    assert!(registry.list(&["t4"]).unwrap().is_empty());
}

#[test]
fn test_missing_entry_triggers_single_discovery() {
    let imports = Arc::new(AtomicUsize::new(0));
    let source = CountingSource {
        table: ModuleTable::<CommandEntry>::new().with_package("gel.commands"),
        imports: Arc::clone(&imports),
    };
    let mut registry = CommandRegistry::new(source);

    let err = registry.get_entry("missing").unwrap_err();
    assert!(matches!(err, RegistrationError::EntryNotFound { .. }));
    assert_eq!(imports.load(Ordering::SeqCst), 1);

    assert!(registry.get_entry("missing").is_err());
    registry.list(&[]).unwrap();
    registry.load_all().unwrap();
    assert_eq!(imports.load(Ordering::SeqCst), 1);
    assert!(registry.is_loaded());
}

#[test]
fn test_dispatch_passes_exact_arguments() {
    let mut registry = empty_registry();
    registry
        .register(
            CommandEntry::new("echo", GEL_NAMESPACE)
                .with_entry_point(|args: &Arguments| Ok(CommandOutput::Data(args["x"].clone()))),
        )
        .unwrap();

    let mut args = Arguments::new();
    args.insert("x", 42);

    assert_eq!(
        registry.dispatch("echo", &args).unwrap(),
        CommandOutput::Data(json!(42))
    );
}

#[test]
fn test_dispatch_unconfigured_and_unknown() {
    let mut registry = empty_registry();
    registry.register(CommandEntry::new("bare", GEL_NAMESPACE)).unwrap();

    let err = registry.dispatch("bare", &Arguments::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RegistrationError>(),
        Some(RegistrationError::EntryPointNotConfigured { .. })
    ));

    let err = registry.dispatch("nope", &Arguments::new()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RegistrationError>(),
        Some(RegistrationError::EntryNotFound { .. })
    ));
}

#[test]
fn test_attach_parser_without_config() {
    let entry = CommandEntry::new("bare", GEL_NAMESPACE);
    let err = entry.attach_parser(Command::new("gel")).unwrap_err();
    assert!(matches!(err, RegistrationError::ParserNotConfigured { .. }));
}

#[test]
fn test_attached_parser_keeps_flag_defaults() {
    let mut registry = empty_registry();
    registry
        .register(CommandEntry::new("cmd", GEL_NAMESPACE).with_config(foo_config))
        .unwrap();

    let gel = Command::new("gel").subcommand_value_name("gel-command");
    let parser = registry.register_parsers(gel, Some(GEL_NAMESPACE)).unwrap();

    let args = parse(&parser, &["gel", "cmd"]);
    assert_eq!(args.get_str("gel_command"), Some("cmd"));
    assert_eq!(args.get_str("foo"), Some("bar"));

    let args = parse(&parser, &["gel", "cmd", "--foo", "baz"]);
    assert_eq!(args.get_str("foo"), Some("baz"));
}

#[test]
fn test_attached_parser_keeps_groups_and_nested_subcommands() {
    let mut registry = empty_registry();
    registry
        .register(CommandEntry::new("build", GEL_NAMESPACE).with_config(build_config))
        .unwrap();

    let parser = registry
        .register_parsers(Command::new("gel").subcommand_value_name("gel-command"), None)
        .unwrap();

    let args = parse(&parser, &["gel", "build", "--release", "docs"]);
    assert_eq!(args.get_str("gel_command"), Some("build"));
    assert_eq!(args.get_bool("release"), Some(true));
    assert_eq!(args.get_str("build_target"), Some("docs"));
    assert_eq!(args.get_str("format"), Some("html"));

    let err = parser
        .clone()
        .try_get_matches_from(["gel", "build", "--release", "--debug", "lib"])
        .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_conflicting_parser_ids_are_rejected() {
    fn shadow_config() -> Box<dyn Config> {
        Box::new(CommandConfig::new("CMD", "Same parser id, different entry"))
    }

    let mut registry = empty_registry();
    registry
        .register(CommandEntry::new("cmd", GEL_NAMESPACE).with_config(foo_config))
        .unwrap();
    registry
        .register(CommandEntry::new("shadow", GEL_NAMESPACE).with_config(shadow_config))
        .unwrap();

    let err = registry.register_parsers(Command::new("gel"), None).unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::DuplicateEntry { ref entry_id, .. } if entry_id == "cmd"
    ));
}

#[test]
fn test_discovery_tolerates_failing_module() {
    let modules = ModuleTable::<CommandEntry>::new()
        .with_module("gel.commands.a", |registry| {
            register_command(registry, "a", foo_config, noop)?;
            Ok(())
        })
        .with_module("gel.commands.b", |_| Err(anyhow!("No module named 'numpy'")));

    let mut registry = CommandRegistry::new(modules);
    registry.load_all().unwrap();

    assert!(registry.is_loaded());
    assert!(registry.contains("a"));
    assert!(!registry.contains("b"));
    assert_eq!(registry.list(&[]).unwrap(), vec!["a"]);
}

#[test]
fn test_discovery_visits_modules_in_path_order() {
    let modules = ModuleTable::<CommandEntry>::new()
        .with_module("gel.commands.zeta", |registry| {
            register_command(registry, "zeta", foo_config, noop).map(|_| ())?;
            Ok(())
        })
        .with_module("gel.commands.alpha.nested", |registry| {
            registry.register(CommandEntry::new("nested", GEL_NAMESPACE))?;
            Ok(())
        })
        .with_module("gel.commands.alpha", |registry| {
            registry.register(CommandEntry::new("alpha", GEL_NAMESPACE))?;
            Ok(())
        })
        .with_module("gel.other.skipped", |registry| {
            registry.register(CommandEntry::new("skipped", GEL_NAMESPACE))?;
            Ok(())
        });

    let mut registry = CommandRegistry::new(modules);
    assert_eq!(registry.list(&[]).unwrap(), vec!["alpha", "nested", "zeta"]);
}

#[test]
fn test_missing_package_leaves_registry_loaded_and_empty() {
    let modules = ModuleTable::<CommandEntry>::new().with_module("gel.widgets.a", |registry| {
        registry.register(CommandEntry::new("a", GEL_NAMESPACE))?;
        Ok(())
    });

    let mut registry = CommandRegistry::new(modules);
    assert!(registry.list(&[]).unwrap().is_empty());
    assert!(registry.is_loaded());
}

#[test]
fn test_duplicate_during_discovery_is_fatal() {
    let modules = ModuleTable::<CommandEntry>::new()
        .with_module("gel.commands.first", |registry| {
            registry.register(CommandEntry::new("same", GEL_NAMESPACE))?;
            Ok(())
        })
        .with_module("gel.commands.second", |registry| {
            registry.register(CommandEntry::new("same", GEL_NAMESPACE))?;
            Ok(())
        });

    let mut registry = CommandRegistry::new(modules);
    let err = registry.load_all().unwrap_err();
    assert!(matches!(err, RegistrationError::DuplicateEntry { .. }));
    assert!(!registry.is_loaded());
}

#[test]
fn test_aborted_discovery_does_not_reload_imported_modules() {
    let loads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&loads);

    let modules = ModuleTable::<CommandEntry>::new()
        .with_module("gel.commands.a", move |registry| {
            counter.fetch_add(1, Ordering::SeqCst);
            registry.register(CommandEntry::new("a", GEL_NAMESPACE))?;
            Ok(())
        })
        .with_module("gel.commands.b", |registry| {
            registry.register(CommandEntry::new("b", GEL_NAMESPACE))?;
            registry.register(CommandEntry::new("b", GEL_NAMESPACE))?;
            Ok(())
        });

    let mut registry = CommandRegistry::new(modules);

    let first = registry.load_all().unwrap_err();
    assert!(matches!(
        first,
        RegistrationError::DuplicateEntry { ref entry_id, .. } if entry_id == "b"
    ));

    let second = registry.list(&[]).unwrap_err();
    assert!(matches!(
        second,
        RegistrationError::DuplicateEntry { ref entry_id, .. } if entry_id == "b"
    ));

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(!registry.is_loaded());
    assert!(registry.contains("a"));
}

#[test]
fn test_registration_after_load_is_allowed() {
    let mut registry = empty_registry();
    registry.load_all().unwrap();

    registry.register(CommandEntry::new("late", GEL_NAMESPACE)).unwrap();
    assert_eq!(registry.get_entry("late").unwrap().id(), "late");
}
