//! Unit tests for remote synchronization statements

use pretty_assertions::assert_eq;

use crate::sync::{
    FetchOptions, LIST_REMOTES_QUERY, PullOptions, PushOptions, add_remote_call, fetch_call,
    pull_call, push_call, remove_remote_call,
};

#[test]
fn test_push_defaults_to_upstream() {
    assert_eq!(
        push_call(&PushOptions::default()).into_statement(),
        "CALL DOLT_PUSH()"
    );
}

#[test]
fn test_push_with_remote_and_branch() {
    let options = PushOptions::default().remote("origin").branch("main");
    assert_eq!(
        push_call(&options).into_statement(),
        "CALL DOLT_PUSH('origin', 'main')"
    );
}

#[test]
fn test_push_set_upstream_and_force_precede_positionals() {
    let options = PushOptions::default()
        .remote("origin")
        .branch("feature/tags")
        .set_upstream(true)
        .force(true);
    assert_eq!(
        push_call(&options).into_statement(),
        "CALL DOLT_PUSH('--set-upstream', '--force', 'origin', 'feature/tags')"
    );
}

#[test]
fn test_pull_defaults() {
    assert_eq!(
        pull_call(&PullOptions::default()).into_statement(),
        "CALL DOLT_PULL()"
    );
}

#[test]
fn test_pull_with_flags_and_remote() {
    let options = PullOptions::default()
        .remote("origin")
        .branch("main")
        .no_fast_forward(true);
    assert_eq!(
        pull_call(&options).into_statement(),
        "CALL DOLT_PULL('--no-ff', 'origin', 'main')"
    );
}

#[test]
fn test_fetch_defaults() {
    assert_eq!(
        fetch_call(&FetchOptions::default()).into_statement(),
        "CALL DOLT_FETCH()"
    );
}

#[test]
fn test_fetch_with_refspec() {
    let options = FetchOptions::default()
        .remote("origin")
        .ref_spec("refs/heads/main");
    assert_eq!(
        fetch_call(&options).into_statement(),
        "CALL DOLT_FETCH('origin', 'refs/heads/main')"
    );
}

#[test]
fn test_add_remote() {
    assert_eq!(
        add_remote_call("origin", "https://doltremoteapi.dolthub.com/org/app").into_statement(),
        "CALL DOLT_REMOTE('add', 'origin', 'https://doltremoteapi.dolthub.com/org/app')"
    );
}

#[test]
fn test_remove_remote() {
    assert_eq!(
        remove_remote_call("origin").into_statement(),
        "CALL DOLT_REMOTE('remove', 'origin')"
    );
}

#[test]
fn test_list_remotes_query() {
    assert_eq!(LIST_REMOTES_QUERY, "SELECT name FROM dolt_remotes");
}
