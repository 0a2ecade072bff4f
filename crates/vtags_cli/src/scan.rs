//! The scan pipeline: input collection, per-file scanning, and reporting.
//!
//! 1. Load `vtags.toml` (explicit `--config` path, else the current
//!    directory, else defaults)
//! 2. Collect inputs: listed files as given, directories walked for `.v`
//! 3. Load everything into a [`SourceDb`]
//! 4. Run one scanner per file, in parallel (the keyword table is
//!    immutable and shared; all mutable scan state is per-scanner)
//! 5. Filter by enabled kinds and render the tag file

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use vtags_config::{TagFormat, VtagsConfig};
use vtags_scanner::{Tag, TagKind};
use vtags_source::{is_verilog_path, FileId, SourceDb};

use crate::output;
use crate::{Cli, TagFileFormat};

/// Runs the scan and writes the tag file.
///
/// Returns the process exit code: 0 on success (including "nothing found").
pub fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(cli)?;
    let enabled = resolve_kinds(cli, &config)?;

    let inputs = collect_inputs(&cli.paths)?;
    if inputs.is_empty() {
        if !cli.quiet {
            eprintln!("warning: no Verilog source files found");
        }
        return Ok(0);
    }

    let mut db = SourceDb::new();
    let mut ids: Vec<FileId> = Vec::new();
    for path in &inputs {
        ids.push(db.load_file(path)?);
    }

    let per_file: Vec<Vec<Tag>> = ids
        .par_iter()
        .map(|&id| {
            let mut sink: Vec<Tag> = Vec::new();
            vtags_scanner::scan(&db.get_file(id).content, id, &mut sink);
            sink
        })
        .collect();

    let mut tags: Vec<Tag> = per_file.into_iter().flatten().collect();
    tags.retain(|t| enabled.contains(&t.kind));

    let format = match cli.format {
        Some(TagFileFormat::Ctags) => TagFormat::Ctags,
        Some(TagFileFormat::Json) => TagFormat::Json,
        None => config.output.format,
    };
    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.file.clone());

    let rendered = match format {
        TagFormat::Ctags => output::render_ctags(&tags, &db),
        TagFormat::Json => output::render_json(&tags, &db)?,
    };
    if out_path == "-" {
        print!("{rendered}");
    } else {
        std::fs::write(&out_path, rendered)?;
    }

    if !cli.quiet {
        eprintln!(
            "   Tagged {} declaration(s) across {} file(s)",
            tags.len(),
            inputs.len()
        );
    }
    Ok(0)
}

/// Loads the configuration for this invocation.
///
/// `--config` points at a specific file; otherwise `./vtags.toml` is used
/// when present, and built-in defaults when not.
fn resolve_config(cli: &Cli) -> Result<VtagsConfig, Box<dyn std::error::Error>> {
    if let Some(ref path) = cli.config {
        let content = std::fs::read_to_string(path)?;
        Ok(vtags_config::load_config_from_str(&content)?)
    } else if Path::new("vtags.toml").is_file() {
        Ok(vtags_config::load_config(Path::new("."))?)
    } else {
        Ok(VtagsConfig::default())
    }
}

/// Determines the kinds to record. CLI `--kinds` overrides the config file.
fn resolve_kinds(cli: &Cli, config: &VtagsConfig) -> Result<Vec<TagKind>, Box<dyn std::error::Error>> {
    if cli.kinds.is_empty() {
        return Ok(config.scan.enabled_kinds()?);
    }
    cli.kinds
        .iter()
        .map(|name| {
            TagKind::from_name(name).ok_or_else(|| format!("unknown tag kind '{name}'").into())
        })
        .collect()
}

/// Collects scan inputs from the command line.
///
/// Explicitly listed files are taken as given; directories are walked
/// recursively and contribute their `.v` files in sorted order.
fn collect_inputs(paths: &[String]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut inputs = Vec::new();
    for raw in paths {
        let path = PathBuf::from(raw);
        if path.is_dir() {
            let mut found = Vec::new();
            walk_dir(&path, &mut found)?;
            found.sort();
            inputs.extend(found);
        } else {
            inputs.push(path);
        }
    }
    Ok(inputs)
}

/// Recursively walks a directory collecting Verilog source files.
fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if is_verilog_path(&path) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(paths: &[&str]) -> Cli {
        Cli {
            paths: paths.iter().map(|s| s.to_string()).collect(),
            output: None,
            format: None,
            kinds: Vec::new(),
            config: None,
            quiet: true,
        }
    }

    #[test]
    fn walk_collects_only_verilog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.v"), "wire a;").unwrap();
        std::fs::write(dir.path().join("b.sv"), "logic b;").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "n/a").unwrap();
        let sub = dir.path().join("rtl");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("c.v"), "wire c;").unwrap();

        let inputs = collect_inputs(&[dir.path().to_string_lossy().into_owned()]).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.v", "c.v"]);
    }

    #[test]
    fn explicit_file_kept_even_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("design.verilog");
        std::fs::write(&path, "wire a;").unwrap();
        let inputs = collect_inputs(&[path.to_string_lossy().into_owned()]).unwrap();
        assert_eq!(inputs, vec![path]);
    }

    #[test]
    fn kinds_flag_overrides_config() {
        let mut c = cli(&["x.v"]);
        c.kinds = vec!["module".to_string(), "task".to_string()];
        let kinds = resolve_kinds(&c, &VtagsConfig::default()).unwrap();
        assert_eq!(kinds, vec![TagKind::Module, TagKind::Task]);
    }

    #[test]
    fn unknown_kind_flag_errors() {
        let mut c = cli(&["x.v"]);
        c.kinds = vec!["entity".to_string()];
        let err = resolve_kinds(&c, &VtagsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("entity"));
    }

    #[test]
    fn end_to_end_tags_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("top.v"),
            "module top;\nwire a, b;\nendmodule\n",
        )
        .unwrap();
        let out = dir.path().join("tags");

        let mut c = cli(&[&dir.path().to_string_lossy()]);
        c.output = Some(out.to_string_lossy().into_owned());
        assert_eq!(run(&c).unwrap(), 0);

        let rendered = std::fs::read_to_string(&out).unwrap();
        assert!(rendered.starts_with("!_TAG_FILE_FORMAT"));
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.iter().any(|l| l.starts_with("a\t") && l.ends_with("\tn")));
        assert!(lines.iter().any(|l| l.starts_with("b\t") && l.ends_with("\tn")));
        assert!(lines.iter().any(|l| l.starts_with("top\t") && l.ends_with("\tm")));
    }

    #[test]
    fn end_to_end_kind_filter() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("top.v"),
            "module top;\nwire a;\nendmodule\n",
        )
        .unwrap();
        let out = dir.path().join("tags");

        let mut c = cli(&[&dir.path().to_string_lossy()]);
        c.output = Some(out.to_string_lossy().into_owned());
        c.kinds = vec!["module".to_string()];
        assert_eq!(run(&c).unwrap(), 0);

        let rendered = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.iter().any(|l| l.starts_with("top\t")));
        assert!(!lines.iter().any(|l| l.starts_with("a\t")));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut c = cli(&["/nonexistent/missing.v"]);
        c.output = Some("-".to_string());
        assert!(run(&c).is_err());
    }

    #[test]
    fn empty_dir_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let c = cli(&[&dir.path().to_string_lossy()]);
        assert_eq!(run(&c).unwrap(), 0);
    }
}
