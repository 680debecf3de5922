use std::path::PathBuf;

use super::*;
use crate::aggregate::aggregate;
use crate::output::test_support::{report, sample};

#[test]
fn summary_csv() {
    let (_, summary) = sample();
    let output = CsvFormatter.format_summary(&summary).unwrap();

    assert_eq!(
        output,
        "Language,Files,Lines,Code,Comments,Blanks\n\
         Rust,2,150,120,20,10\n\
         Python,1,25,20,2,3\n\
         Total,3,175,140,22,13\n"
    );
}

#[test]
fn files_csv() {
    let (files, summary) = sample();
    let output = CsvFormatter.format_files(&files, &summary).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "File,Language,Lines,Code,Comments,Blanks");
    assert_eq!(lines[1], "src/main.rs,Rust,100,80,15,5");
    assert_eq!(lines[4], "Total (3 files),,175,140,22,13");
}

#[test]
fn fields_with_separators_are_quoted() {
    assert_eq!(quote("plain"), "plain");
    assert_eq!(quote("a,b"), "\"a,b\"");
    assert_eq!(quote("say \"hi\""), "\"say \"\"hi\"\"\"");

    let mut files = IndexMap::new();
    files.insert(PathBuf::from("dir,with,commas/a.rs"), report("Rust", 1, 0, 0));
    let summary = aggregate(&files);
    let output = CsvFormatter.format_files(&files, &summary).unwrap();
    assert!(output.contains("\"dir,with,commas/a.rs\",Rust,1,1,0,0"));
}
