use assert_cmd::Command;

fn voyage() -> Command {
    let mut cmd = Command::cargo_bin("voyage-cli").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn feed_filters_by_tag() {
    let out = stdout_of(voyage().args(["feed", "--tag", "Greece"]));
    assert!(out.contains("Mystical Mornings in Santorini"));
    assert!(!out.contains("Tokyo After Dark"));
    assert!(out.contains("1 of 6 stories"));
}

#[test]
fn feed_reports_unknown_tag() {
    let out = stdout_of(voyage().args(["feed", "--tag", "Italy"]));
    assert!(out.contains("No stories found for \"Italy\""));
}

#[test]
fn generated_posts_lead_the_feed() {
    let out = stdout_of(voyage().args([
        "feed",
        "--generate",
        "2",
        "--seed",
        "11",
        "--tag",
        "AI Generated",
    ]));
    assert!(out.contains("2 of 8 stories"));
    assert!(!out.contains("Santorini"));
}

#[test]
fn generate_prints_json_posts() {
    let out = stdout_of(voyage().args(["generate", "--count", "3", "--seed", "5"]));
    let posts: serde_json::Value = serde_json::from_str(&out).unwrap();
    let posts = posts.as_array().unwrap();
    assert_eq!(posts.len(), 3);
    for post in posts {
        assert_eq!(post["aiGenerated"], true);
        assert_eq!(post["country"], "Various");
        let read_time = post["readTime"].as_u64().unwrap();
        assert!((5..=12).contains(&read_time));
    }
    assert_ne!(posts[0]["id"], posts[1]["id"]);
}

#[test]
fn tags_include_generator_sentinel_after_generation() {
    let out = stdout_of(voyage().args(["tags", "--generate", "1", "--seed", "2"]));
    let tags: Vec<&str> = out.lines().collect();
    assert_eq!(tags[0], "AI Generated");
    assert_eq!(tags[1], "Exploration");
    assert!(tags.contains(&"Greece"));
}
