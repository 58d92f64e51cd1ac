//! Unit tests for database management statements

use pretty_assertions::assert_eq;

use crate::database::{
    CloneOptions, LIST_DATABASES_QUERY, clone_call, create_database_statement,
    drop_database_statement, purge_dropped_call, undrop_call, use_database_statement,
};

#[test]
fn test_create_database_statement() {
    assert_eq!(
        create_database_statement("app"),
        "CREATE DATABASE IF NOT EXISTS `app`"
    );
}

#[test]
fn test_drop_database_statement() {
    assert_eq!(drop_database_statement("app"), "DROP DATABASE IF EXISTS `app`");
}

#[test]
fn test_database_names_are_backtick_quoted() {
    assert_eq!(
        create_database_statement("customer`db"),
        "CREATE DATABASE IF NOT EXISTS `customer``db`"
    );
    assert_eq!(use_database_statement("my-app"), "USE `my-app`");
}

#[test]
fn test_list_databases_query() {
    assert_eq!(LIST_DATABASES_QUERY, "SHOW DATABASES");
}

#[test]
fn test_clone_with_defaults() {
    let call = clone_call("file:///backup/app/.dolt/noms", &CloneOptions::default());
    assert_eq!(
        call.into_statement(),
        "CALL DOLT_CLONE('file:///backup/app/.dolt/noms')"
    );
}

#[test]
fn test_clone_with_all_options() {
    let options = CloneOptions::default()
        .branch("main")
        .remote("backup")
        .depth(1)
        .target_name("app_copy");
    let call = clone_call("https://doltremoteapi.dolthub.com/org/app", &options);
    assert_eq!(
        call.into_statement(),
        "CALL DOLT_CLONE('--branch', 'main', '--remote', 'backup', '--depth', '1', \
         'https://doltremoteapi.dolthub.com/org/app', 'app_copy')"
    );
}

#[test]
fn test_undrop_call() {
    assert_eq!(undrop_call("app").into_statement(), "CALL DOLT_UNDROP('app')");
}

#[test]
fn test_purge_dropped_call() {
    assert_eq!(
        purge_dropped_call().into_statement(),
        "CALL DOLT_PURGE_DROPPED_DATABASES()"
    );
}
