//! End-to-end CLI test suite.
//!
//! Tests organized by command group. Each test runs against an isolated
//! temporary database through the public CLI.

mod common;

use common::harness::TestEnv;
use predicates::prelude::*;

// ===========================================
// add command tests
// ===========================================
mod add_tests {
    use super::*;

    #[test]
    fn test_add_creates_database_file() {
        let env = TestEnv::new();

        env.cmd()
            .args(["add", "First", "Some content", "--category", "General"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added entry"));

        assert!(env.db_path().exists(), "database file should be created");
    }

    #[test]
    fn test_add_json_output_includes_assigned_id() {
        let env = TestEnv::new();

        let value: serde_json::Value = env
            .cmd()
            .args([
                "add",
                "First",
                "Some content",
                "--category",
                "General",
                "--format",
                "json",
            ])
            .output_json();

        assert_eq!(value["data"]["title"], "First");
        assert_eq!(value["data"]["category"], "General");
        assert_eq!(value["data"]["views"], 0);
        assert!(value["data"]["id"].as_i64().unwrap() >= 1);
    }

    #[test]
    fn test_add_with_author_and_tags() {
        let env = TestEnv::new();

        let value: serde_json::Value = env
            .cmd()
            .args([
                "add",
                "Tagged",
                "content",
                "--category",
                "General",
                "--author",
                "alice",
                "--tag",
                "one",
                "--tag",
                "two",
                "--format",
                "json",
            ])
            .output_json();

        assert_eq!(value["data"]["author"], "alice");
        let tags = value["data"]["tags"].as_array().unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_add_rejects_empty_content() {
        let env = TestEnv::new();

        env.cmd()
            .args(["add", "Title", "   ", "--category", "General"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("content cannot be empty"));
    }

    #[test]
    fn test_add_rejects_empty_category() {
        let env = TestEnv::new();

        env.cmd()
            .args(["add", "Title", "content", "--category", "  "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid category"));
    }
}

// ===========================================
// show command tests
// ===========================================
mod show_tests {
    use super::*;

    #[test]
    fn test_show_prints_full_entry() {
        let env = TestEnv::new();
        let id = env.add_entry("Horus Heresy", "A civil war.", "Warhammer 40k");

        env.cmd()
            .show(id)
            .assert()
            .success()
            .stdout(predicate::str::contains("Horus Heresy"))
            .stdout(predicate::str::contains("Warhammer 40k"))
            .stdout(predicate::str::contains("A civil war."));
    }

    #[test]
    fn test_show_increments_views_per_call() {
        let env = TestEnv::new();
        let id = env.add_entry("Viewed", "content", "General");

        for expected in 1..=3i64 {
            let value: serde_json::Value = env
                .cmd()
                .show(id)
                .args(["--format", "json"])
                .output_json();
            assert_eq!(value["data"]["views"], expected);
        }
    }

    #[test]
    fn test_show_unknown_id_fails() {
        let env = TestEnv::new();

        env.cmd()
            .show(99)
            .assert()
            .failure()
            .stderr(predicate::str::contains("no entry with id 99"));
    }
}

// ===========================================
// ls command tests
// ===========================================
mod ls_tests {
    use super::*;

    #[test]
    fn test_ls_lists_entries() {
        let env = TestEnv::new();
        env.add_entry("Alpha", "a", "One");
        env.add_entry("Beta", "b", "Two");

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("Alpha"))
            .stdout(predicate::str::contains("Beta"))
            .stdout(predicate::str::contains("2 entries"));
    }

    #[test]
    fn test_ls_empty_database() {
        let env = TestEnv::new();

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("No entries found."));
    }

    #[test]
    fn test_ls_filters_by_category() {
        let env = TestEnv::new();
        env.add_entry("Alpha", "a", "One");
        env.add_entry("Beta", "b", "Two");

        env.cmd()
            .ls()
            .args(["--category", "One"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Alpha"))
            .stdout(predicate::str::contains("Beta").not());
    }

    #[test]
    fn test_ls_filters_by_tag() {
        let env = TestEnv::new();
        let id = env.add_entry("Tagged", "a", "One");
        env.add_entry("Plain", "b", "One");
        env.cmd()
            .args(["tag", &id.to_string(), "keep"])
            .assert()
            .success();

        env.cmd()
            .ls()
            .args(["--tag", "keep"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Tagged"))
            .stdout(predicate::str::contains("Plain").not());
    }

    #[test]
    fn test_ls_newest_first() {
        let env = TestEnv::new();
        env.add_entry("Older", "a", "One");
        env.add_entry("Newer", "b", "One");

        let output = env.cmd().ls().output_success();
        let older_pos = output.find("Older").unwrap();
        let newer_pos = output.find("Newer").unwrap();
        assert!(newer_pos < older_pos, "newest entry should be listed first");
    }

    #[test]
    fn test_ls_rejects_combined_filters() {
        let env = TestEnv::new();

        env.cmd()
            .ls()
            .args(["--category", "One", "--tag", "x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be combined"));
    }

    #[test]
    fn test_ls_json_output() {
        let env = TestEnv::new();
        env.add_entry("Alpha", "a", "One");

        let value: serde_json::Value = env.cmd().ls().args(["--format", "json"]).output_json();
        let entries = value["data"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["title"], "Alpha");
    }
}

// ===========================================
// search command tests
// ===========================================
mod search_tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let env = TestEnv::new();
        env.add_entry("Horus Heresy", "A civil war.", "Warhammer 40k");

        for keyword in ["heresy", "HERESY"] {
            env.cmd()
                .search(keyword)
                .assert()
                .success()
                .stdout(predicate::str::contains("Horus Heresy"));
        }
    }

    #[test]
    fn test_search_matches_category_and_content() {
        let env = TestEnv::new();
        env.add_entry("Title", "unusual phrase here", "Obscure Category");

        env.cmd()
            .search("unusual phrase")
            .assert()
            .success()
            .stdout(predicate::str::contains("Title"));

        env.cmd()
            .search("obscure")
            .assert()
            .success()
            .stdout(predicate::str::contains("Title"));
    }

    #[test]
    fn test_search_no_match() {
        let env = TestEnv::new();
        env.add_entry("Title", "content", "General");

        env.cmd()
            .search("zzzzz")
            .assert()
            .success()
            .stdout(predicate::str::contains("No entries matching"));
    }

    #[test]
    fn test_search_does_not_count_as_read() {
        let env = TestEnv::new();
        let id = env.add_entry("Title", "content", "General");

        env.cmd().search("title").assert().success();

        let value: serde_json::Value = env
            .cmd()
            .show(id)
            .args(["--format", "json"])
            .output_json();
        assert_eq!(value["data"]["views"], 1, "only the show itself counts");
    }
}

// ===========================================
// edit command tests
// ===========================================
mod edit_tests {
    use super::*;

    #[test]
    fn test_edit_changes_only_supplied_fields() {
        let env = TestEnv::new();
        let id = env.add_entry("Original", "old content", "General");

        let value: serde_json::Value = env
            .cmd()
            .args([
                "edit",
                &id.to_string(),
                "--content",
                "new content",
                "--format",
                "json",
            ])
            .output_json();

        assert_eq!(value["data"]["title"], "Original");
        assert_eq!(value["data"]["content"], "new content");
        assert_eq!(value["data"]["category"], "General");
    }

    #[test]
    fn test_edit_moves_entry_to_new_category() {
        let env = TestEnv::new();
        let id = env.add_entry("Entry", "content", "Old");

        env.cmd()
            .args(["edit", &id.to_string(), "--category", "New"])
            .assert()
            .success();

        env.cmd()
            .ls()
            .args(["--category", "New"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Entry"));

        // The old category survives as an orphan.
        env.cmd()
            .args(["categories"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Old"));
    }

    #[test]
    fn test_edit_without_fields_fails() {
        let env = TestEnv::new();
        let id = env.add_entry("Entry", "content", "General");

        env.cmd()
            .args(["edit", &id.to_string()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nothing to update"));
    }

    #[test]
    fn test_edit_unknown_id_fails() {
        let env = TestEnv::new();

        env.cmd()
            .args(["edit", "404", "--title", "X"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no entry with id 404"));
    }

    #[test]
    fn test_edit_replaces_tags() {
        let env = TestEnv::new();
        let id = env.add_entry("Entry", "content", "General");
        env.cmd()
            .args(["tag", &id.to_string(), "old"])
            .assert()
            .success();

        let value: serde_json::Value = env
            .cmd()
            .args([
                "edit",
                &id.to_string(),
                "--tag",
                "fresh",
                "--format",
                "json",
            ])
            .output_json();

        let tags = value["data"]["tags"].as_array().unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0], "fresh");
    }
}

// ===========================================
// rm command tests
// ===========================================
mod rm_tests {
    use super::*;

    #[test]
    fn test_rm_force_deletes() {
        let env = TestEnv::new();
        let id = env.add_entry("Doomed", "content", "General");

        env.cmd()
            .args(["rm", &id.to_string(), "--force"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Deleted entry"));

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("No entries found."));
    }

    #[test]
    fn test_rm_prompts_and_aborts_on_no() {
        let env = TestEnv::new();
        let id = env.add_entry("Kept", "content", "General");

        env.cmd()
            .args(["rm", &id.to_string()])
            .stdin("n\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Aborted."));

        env.cmd()
            .ls()
            .assert()
            .success()
            .stdout(predicate::str::contains("Kept"));
    }

    #[test]
    fn test_rm_prompts_and_deletes_on_yes() {
        let env = TestEnv::new();
        let id = env.add_entry("Doomed", "content", "General");

        env.cmd()
            .args(["rm", &id.to_string()])
            .stdin("yes\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Deleted entry"));
    }

    #[test]
    fn test_rm_unknown_id_fails() {
        let env = TestEnv::new();

        env.cmd()
            .args(["rm", "12", "--force"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no entry with id 12"));
    }

    #[test]
    fn test_rm_keeps_category_and_tag_rows() {
        let env = TestEnv::new();
        let id = env.add_entry("Doomed", "content", "Orphaned");
        env.cmd()
            .args(["tag", &id.to_string(), "survivor"])
            .assert()
            .success();

        env.cmd()
            .args(["rm", &id.to_string(), "--force"])
            .assert()
            .success();

        env.cmd()
            .args(["categories"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Orphaned"));

        env.cmd()
            .args(["tags"])
            .assert()
            .success()
            .stdout(predicate::str::contains("survivor"));
    }
}

// ===========================================
// tag / categories / tags command tests
// ===========================================
mod metadata_tests {
    use super::*;

    #[test]
    fn test_tag_attaches_to_entry() {
        let env = TestEnv::new();
        let id = env.add_entry("Entry", "content", "General");

        env.cmd()
            .args(["tag", &id.to_string(), "marked"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Tagged entry"));

        let value: serde_json::Value = env
            .cmd()
            .show(id)
            .args(["--format", "json"])
            .output_json();
        assert_eq!(value["data"]["tags"][0], "marked");
    }

    #[test]
    fn test_tag_custom_color_shows_in_listing() {
        let env = TestEnv::new();
        let id = env.add_entry("Entry", "content", "General");

        env.cmd()
            .args(["tag", &id.to_string(), "hot", "--color", "#ff0000"])
            .assert()
            .success();

        env.cmd()
            .args(["tags"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#ff0000"));
    }

    #[test]
    fn test_tag_rejects_malformed_color() {
        let env = TestEnv::new();
        let id = env.add_entry("Entry", "content", "General");

        env.cmd()
            .args(["tag", &id.to_string(), "bad", "--color", "red"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid color"));
    }

    #[test]
    fn test_categories_with_counts() {
        let env = TestEnv::new();
        env.add_entry("A", "a", "Busy");
        env.add_entry("B", "b", "Busy");

        env.cmd()
            .args(["categories", "--counts"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Busy  (2)"));
    }

    #[test]
    fn test_tags_default_color_shown() {
        let env = TestEnv::new();
        let id = env.add_entry("Entry", "content", "General");
        env.cmd()
            .args(["tag", &id.to_string(), "plain"])
            .assert()
            .success();

        env.cmd()
            .args(["tags"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#3498db"));
    }
}

// ===========================================
// stats command tests
// ===========================================
mod stats_tests {
    use super::*;

    #[test]
    fn test_stats_counts_rows() {
        let env = TestEnv::new();
        env.add_entry("A", "a", "One");
        env.add_entry("B", "b", "One");
        env.add_entry("C", "c", "Two");

        env.cmd()
            .stats()
            .assert()
            .success()
            .stdout(predicate::str::contains("Entries:    3"))
            .stdout(predicate::str::contains("Categories: 2"))
            .stdout(predicate::str::contains("One: 2"));
    }

    #[test]
    fn test_stats_json_output() {
        let env = TestEnv::new();
        env.add_entry("A", "a", "One");

        let value: serde_json::Value = env
            .cmd()
            .stats()
            .args(["--format", "json"])
            .output_json();
        assert_eq!(value["data"]["entries"], 1);
        assert_eq!(value["data"]["categories"], 1);
        assert_eq!(value["data"]["tags"], 0);
    }

    #[test]
    fn test_stats_empty_database() {
        let env = TestEnv::new();

        env.cmd()
            .stats()
            .assert()
            .success()
            .stdout(predicate::str::contains("Entries:    0"));
    }
}

// ===========================================
// completions command tests
// ===========================================
mod completions_tests {
    use super::*;

    #[test]
    fn test_completions_bash() {
        let env = TestEnv::new();

        env.cmd()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("lore"));
    }
}
