//! Tag file rendering: classic ctags format and JSON lines.

use vtags_scanner::Tag;
use vtags_source::SourceDb;

/// Renders tags in the classic ctags file format.
///
/// Each entry is `name<TAB>file<TAB>line;"<TAB>kind-letter`. The file is
/// sorted by entry, as the `!_TAG_FILE_SORTED 1` header promises; within a
/// name, entries keep their relative source order.
pub fn render_ctags(tags: &[Tag], db: &SourceDb) -> String {
    let mut entries: Vec<String> = tags
        .iter()
        .map(|t| {
            format!(
                "{}\t{}\t{};\"\t{}",
                t.name,
                db.get_file(t.file).path.display(),
                t.line,
                t.kind.letter()
            )
        })
        .collect();
    entries.sort();

    let mut out = String::new();
    out.push_str("!_TAG_FILE_FORMAT\t2\t/extended format/\n");
    out.push_str("!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted/\n");
    for entry in &entries {
        out.push_str(entry);
        out.push('\n');
    }
    out
}

/// Renders tags as one JSON object per line, in source order.
pub fn render_json(tags: &[Tag], db: &SourceDb) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for t in tags {
        let record = serde_json::json!({
            "name": t.name.as_str(),
            "path": db.get_file(t.file).path.display().to_string(),
            "line": t.line,
            "kind": t.kind.name(),
        });
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtags_scanner::{TagKind, TagSink};
    use vtags_source::FileId;

    fn sample() -> (Vec<Tag>, SourceDb) {
        let mut db = SourceDb::new();
        let id = db.add_source("rtl/top.v", String::new());
        let mut tags: Vec<Tag> = Vec::new();
        tags.tag(Tag {
            name: "zed".to_string(),
            kind: TagKind::Net,
            file: id,
            line: 3,
        });
        tags.tag(Tag {
            name: "alpha".to_string(),
            kind: TagKind::Module,
            file: id,
            line: 1,
        });
        (tags, db)
    }

    #[test]
    fn ctags_headers_and_sorting() {
        let (tags, db) = sample();
        let rendered = render_ctags(&tags, &db);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "!_TAG_FILE_FORMAT\t2\t/extended format/");
        assert_eq!(lines[1], "!_TAG_FILE_SORTED\t1\t/0=unsorted, 1=sorted/");
        // Entries are sorted by name even though "zed" was emitted first.
        assert_eq!(lines[2], "alpha\trtl/top.v\t1;\"\tm");
        assert_eq!(lines[3], "zed\trtl/top.v\t3;\"\tn");
    }

    #[test]
    fn ctags_empty_input_has_headers_only() {
        let db = SourceDb::new();
        let rendered = render_ctags(&[], &db);
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn json_lines_keep_source_order() {
        let (tags, db) = sample();
        let rendered = render_json(&tags, &db).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["name"], "zed");
        assert_eq!(first["kind"], "net");
        assert_eq!(first["line"], 3);
        assert_eq!(first["path"], "rtl/top.v");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["name"], "alpha");
        assert_eq!(second["kind"], "module");
    }

    #[test]
    fn duplicate_names_each_rendered() {
        let mut db = SourceDb::new();
        let id = db.add_source("dup.v", String::new());
        let make = |line| Tag {
            name: "dup".to_string(),
            kind: TagKind::Net,
            file: id,
            line,
        };
        let rendered = render_ctags(&[make(1), make(2)], &db);
        assert_eq!(
            rendered.lines().filter(|l| l.starts_with("dup\t")).count(),
            2
        );
    }
}
