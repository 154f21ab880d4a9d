//! End-to-end tests for the `websites` binary
//!
//! Every invocation uses `--print` so no browser is launched.

use assert_cmd::Command;
use predicates::prelude::*;

fn websites() -> Command {
    Command::cargo_bin("websites").unwrap()
}

/// Runs with `--print` and returns stdout with the trailing newline removed
fn printed_url(args: &[&str]) -> String {
    let output = websites()
        .args(["--print", "--color", "never"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "websites {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim_end().to_string()
}

#[test]
fn test_github_urls() {
    let cases: &[(&[&str], &str)] = &[
        (&["gh", "df"], "df"),
        (&["gh", "df", "commits"], "df/commits"),
        (&["gh", "df", "commits", "abc123"], "df/commit/abc123"),
        (&["gh", "df", "pulls", "7"], "df/pull/7"),
        (&["gh", "df", "pulls", "alice"], "df/pulls/alice"),
        (&["gh", "df", "pulls", "0"], "df/pulls/0"),
        (&["gh", "df", "path", "foo/bar.rb"], "df/tree/master/foo/bar.rb"),
        (
            &["gh", "df", "path", "foo/bar.rb", "history"],
            "df/commits/master/foo/bar.rb",
        ),
        (&["gh", "df", "file", "ref1", "foo.rb", "blame"], "df/blame/ref1/foo.rb"),
        (&["gh", "df", "diff", "start", "end"], "df/compare/start...end"),
        (&["gh", "df", "diff", "onlyone"], "df/compare/onlyone"),
        (&["gh", "df", "zzz999"], "df/commit/zzz999"),
        (&["github", "df", "ref", "v1.0"], "df/tree/v1.0"),
    ];

    for (args, expected) in cases {
        assert_eq!(printed_url(args), *expected, "websites {:?}", args);
    }
}

#[test]
fn test_apidock_urls() {
    assert_eq!(
        printed_url(&["apidock", "rb", "q", "each_slice"]),
        "http://apidock.com/ruby/search?query=each_slice"
    );
    assert_eq!(
        printed_url(&["apidock", "rails", "ActiveRecord/Base"]),
        "http://apidock.com/rails/ActiveRecord/Base"
    );
    assert_eq!(printed_url(&["ad", "rspec", "stub"]), "http://apidock.com/rspec/stub");
    assert_eq!(printed_url(&["apidock"]), "http://apidock.com");
    assert_eq!(printed_url(&["apidock", "elixir", "Enum"]), "http://apidock.com");
}

#[test]
fn test_web_urls() {
    assert_eq!(printed_url(&["web"]), "http://eqdw.net");
    assert_eq!(
        printed_url(&["web", "https://example.com"]),
        "https://example.com"
    );
}

#[test]
fn test_jsonl_output() {
    websites()
        .args(["--print", "--format", "jsonl", "gh", "df", "file", "a.rb", "blame"])
        .assert()
        .success()
        .stdout(
            "{\"type\":\"command\",\"site\":\"github\",\"action\":\"blame\",\"url\":\"df/blame/master/a.rb\"}\n",
        );
}

#[test]
fn test_missing_repo_is_usage_error() {
    websites()
        .args(["--print", "gh"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing repository abbreviation"));
}

#[test]
fn test_wrong_argument_count_is_usage_error() {
    websites()
        .args(["--print", "gh", "df", "history", "a", "b", "c"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("github history expects 1 or 2 argument(s), got 3"));

    websites()
        .args(["--print", "apidock", "ruby"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("apidock lookup"));
}

#[test]
fn test_flags_after_tokens_still_apply() {
    websites()
        .args(["gh", "df", "abc123", "--print", "--format", "jsonl"])
        .assert()
        .success()
        .stdout(
            "{\"type\":\"command\",\"site\":\"github\",\"action\":\"commit\",\"url\":\"df/commit/abc123\"}\n",
        );
}

#[test]
fn test_hyphenated_tokens_after_separator() {
    assert_eq!(
        printed_url(&["gh", "df", "diff", "--", "-x"]),
        "df/compare/-x"
    );
}

#[test]
fn test_pull_number_with_underscore_separator() {
    assert_eq!(printed_url(&["gh", "df", "pulls", "0_5"]), "df/pull/0_5");
}

#[test]
fn test_failed_open_is_reported() {
    websites()
        .args(["--opener", "websites-no-such-opener-program", "gh", "df"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("websites-no-such-opener-program"));
}

#[test]
fn test_subcommand_required() {
    websites().assert().failure();
}
