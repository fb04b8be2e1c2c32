mod common;

use common::{dump, post, HEADER};
use forum_stats::{run_local, run_map, run_reduce, Config, Task};

fn local(task: Task, input: &str) -> String {
    let mut out = Vec::new();
    run_local(task, &Config::default(), input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn map(task: Task, input: &str) -> String {
    let mut out = Vec::new();
    run_map(task, &Config::default(), input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn busiest_hour_per_author() {
    // author 1 posted at 08, 08 and 08 (comment included); author 2 at 09; author 3 at 21
    assert_eq!(local(Task::BusiestHour, &dump()), "1\t8\n2\t9\n3\t21\n");
}

#[test]
fn thread_lengths() {
    // "How do I\nread \"stdin\"\nfast?" = 27 chars, 2 quotes -> 25
    assert_eq!(local(Task::Lengths, &dump()), "10\t25\t9.0\n20\t5\t0\n");
}

#[test]
fn top_tags_across_questions() {
    assert_eq!(local(Task::TopTags, &dump()), "rust\t2\ncli\t1\nio\t1\n");
}

#[test]
fn thread_members_in_arrival_order() {
    assert_eq!(local(Task::Threads, &dump()), "10\t[\"1\", \"2\", \"1\"]\n11\t[\"1\"]\n20\t[\"3\"]\n");
}

#[test]
fn mapper_output_reassembles_multiline_body() {
    let out = map(Task::Lengths, &dump());
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["10\t-25", "10\t11", "10\t7", "20\t-5"]);
}

#[test]
fn split_stages_match_local_run() {
    for task in [Task::BusiestHour, Task::Lengths, Task::TopTags, Task::Threads] {
        let mapped = map(task, &dump());
        let mut lines: Vec<&str> = mapped.lines().collect();
        lines.sort_by_key(|l| l.split('\t').next().unwrap_or("").to_string());
        let shuffled = lines.join("\n") + "\n";

        let mut out = Vec::new();
        run_reduce(task, &Config::default(), shuffled.as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), local(task, &dump()), "{task}");
    }
}

#[test]
fn truncated_record_is_dropped() {
    let mut input = dump();
    input.push_str("30\ttitle\tgo\t4\tunfinished body");
    let mut out = Vec::new();
    let stats = run_local(Task::TopTags, &Config::default(), input.as_bytes(), &mut out).unwrap();
    assert_eq!(stats.records, 5);
    assert_eq!(stats.malformed, 1);
    assert!(!String::from_utf8(out).unwrap().contains("go"));
}

#[test]
fn bad_timestamp_is_fatal() {
    let input = format!("{HEADER}\n{}\n", post("1", "", "1", "b", "question", "", "yesterday"));
    let mut out = Vec::new();
    assert!(run_map(Task::BusiestHour, &Config::default(), input.as_bytes(), &mut out).is_err());
}

#[test]
fn top_tags_keeps_ten() {
    let mut input = String::from(HEADER);
    input.push('\n');
    let mut id = 0;
    for t in 0..15 {
        for _ in 0..=t {
            id += 1;
            input.push_str(&post(&id.to_string(), &format!("tag{t:02}"), "1", "b", "question", "", "2012-01-01 00:00:00"));
            input.push('\n');
        }
    }
    let out = local(Task::TopTags, &input);
    let rows: Vec<(String, u64)> = out
        .lines()
        .map(|l| {
            let (tag, count) = l.split_once('\t').unwrap();
            (tag.to_string(), count.parse().unwrap())
        })
        .collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0], ("tag14".to_string(), 15));
    assert_eq!(rows[9], ("tag05".to_string(), 6));
    assert!(rows.windows(2).all(|w| w[0].1 > w[1].1));
}
