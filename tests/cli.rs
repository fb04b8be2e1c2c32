mod common;

use assert_cmd::Command;
use common::{dump, post, HEADER};
use predicates::prelude::*;

#[test]
fn single_runs_lengths_job() {
    Command::cargo_bin("forum_single")
        .unwrap()
        .args(["--task", "lengths"])
        .write_stdin(dump())
        .assert()
        .success()
        .stdout("10\t25\t9.0\n20\t5\t0\n");
}

#[test]
fn single_honours_top_k() {
    Command::cargo_bin("forum_single")
        .unwrap()
        .args(["--task", "top-tags", "--top-k", "1"])
        .write_stdin(dump())
        .assert()
        .success()
        .stdout("rust\t2\n");
}

#[test]
fn reducer_reads_grouped_pairs() {
    Command::cargo_bin("forum_reducer")
        .unwrap()
        .args(["--task", "threads"])
        .write_stdin("q1\ta\nq1\tb\nq1\ta\n")
        .assert()
        .success()
        .stdout("q1\t[\"a\", \"b\", \"a\"]\n");
}

#[test]
fn reducer_verification_fails_on_unsorted_input() {
    Command::cargo_bin("forum_reducer")
        .unwrap()
        .args(["--task", "busiest-hour", "--verify-sorted"])
        .write_stdin("a\t1\nb\t2\na\t3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reappeared"));
}

#[test]
fn unknown_task_is_rejected() {
    Command::cargo_bin("forum_single")
        .unwrap()
        .args(["--task", "wordcount"])
        .assert()
        .failure();
}

#[test]
fn mapper_writes_bare_tag_keys() {
    Command::cargo_bin("forum_mapper")
        .unwrap()
        .args(["--task", "top-tags"])
        .write_stdin(dump())
        .assert()
        .success()
        .stdout(predicate::str::contains("io\t\n").and(predicate::str::contains("rust\t\n")))
        .stdout(predicate::str::contains("tagnames").not());
}

#[test]
fn mapper_reassembles_multiline_body() {
    let assert = Command::cargo_bin("forum_mapper")
        .unwrap()
        .args(["--task", "lengths"])
        .write_stdin(dump())
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}[").not());
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["10\t-25", "10\t11", "10\t7", "20\t-5"]);
}

#[test]
fn mapper_fails_on_bad_timestamp() {
    let input = format!("{HEADER}\n{}\n", post("1", "", "1", "b", "question", "", "yesterday"));
    Command::cargo_bin("forum_mapper")
        .unwrap()
        .args(["--task", "busiest-hour"])
        .write_stdin(input)
        .assert()
        .failure();
}
