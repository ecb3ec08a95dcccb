//! Gitignore-style filtering of candidate file lists.
//!
//! Ignore-spec files may sit anywhere under a scan root, and each one only
//! governs its own subtree using paths relative to its own location. The
//! matcher, on the other hand, works against a single root-relative
//! namespace. So the pipeline here rewrites every rule to be root-relative
//! before compiling all of them into one matcher, and strips/restores the
//! root prefix around the match itself so callers can pass and receive
//! fully-qualified paths.
//!
//! The rule set is rebuilt on every call: discover, read, rewrite, compile,
//! filter, discard. No caching.

use crate::error::{Error, Result};
use crate::path::{expand, relative_to};
use crate::pattern::{glob_with, GlobOptions};
use crate::text::read_lines;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::debug;
use std::path::{Path, PathBuf};

/// Filter `files` through every `ignore_file_name` spec file found under
/// `root`, honoring gitignore semantics: later rules override earlier
/// ones, `!` re-includes, directory patterns cover their contents.
///
/// Survivors come back as their original paths, in their original order.
/// With zero spec files discovered this is the identity function. Every
/// file in `files` is assumed to live under `root`.
pub fn ignore_filter(
    files: &[PathBuf],
    root: impl AsRef<Path>,
    ignore_file_name: &str,
) -> Result<Vec<PathBuf>> {
    let root = expand(root);
    let specs = discover(&root, ignore_file_name)?;
    debug!(
        "ignore_filter: {} spec file(s) named {} under {}",
        specs.len(),
        ignore_file_name,
        root.display()
    );

    let mut rules: Vec<String> = vec![];
    for spec in &specs {
        let rel_dir = spec
            .parent()
            .and_then(|dir| relative_to(dir, &root))
            .unwrap_or_default();
        for line in read_lines(spec)? {
            if line.is_empty() {
                continue;
            }
            rules.push(anchor(&line, &rel_dir));
        }
    }

    let matcher = compile(&root, &rules)?;
    Ok(files
        .iter()
        .filter(|file| match relative_to(file, &root) {
            Some(rel) => !matcher.matched_path_or_any_parents(&rel, false).is_ignore(),
            None => true,
        })
        .cloned()
        .collect())
}

/// Find every spec file named `name` under `root`, hidden entries included.
fn discover(root: &Path, name: &str) -> Result<Vec<PathBuf>> {
    let base = root.display().to_string();
    let pattern = format!("{}/**/{}", base.trim_end_matches('/'), name);
    let hits = glob_with(
        &pattern,
        &GlobOptions {
            include_hidden: true,
        },
    )?;
    // The glob can over-match when `name` contains metacharacters; only
    // exact basename hits count.
    Ok(hits
        .into_iter()
        .filter(|hit| hit.file_name().is_some_and(|n| n == name))
        .collect())
}

/// Rewrite one rule so it applies under `rel_dir` when matched from the
/// scan root: `*.log` found in `<root>/sub/` becomes `sub/*.log`.
///
/// A leading `!` stays in front of the rewritten pattern, otherwise the
/// negation would end up buried mid-pattern and stop negating. Slash runs
/// from the concatenation collapse to one, and a leading `./` is stripped.
fn anchor(rule: &str, rel_dir: &Path) -> String {
    let (negated, body) = match rule.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, rule),
    };

    let mut joined = if rel_dir.as_os_str().is_empty() {
        body.to_owned()
    } else {
        format!("{}/{}", rel_dir.display(), body)
    };
    while joined.contains("//") {
        joined = joined.replace("//", "/");
    }
    let joined = joined.strip_prefix("./").unwrap_or(&joined);

    match negated {
        true => format!("!{joined}"),
        false => joined.to_owned(),
    }
}

/// Concatenate all rules, in discovery order, into one compiled matcher.
fn compile(root: &Path, rules: &[String]) -> Result<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);
    for rule in rules {
        builder.add_line(None, rule).map_err(|e| Error::Match {
            pattern: rule.clone(),
            reason: e.to_string(),
        })?;
    }
    builder.build().map_err(|e| Error::Match {
        pattern: rules.join("\n"),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pattern::glob;
    use crate::text::{write_text, WriteOptions};
    use tempfile::tempdir;

    fn write(path: impl AsRef<Path>, content: &str) {
        write_text(path, content, &WriteOptions::default()).unwrap();
    }

    #[test]
    fn anchor_prefixes_with_rel_dir() {
        assert_eq!(anchor("*.log", Path::new("sub")), "sub/*.log");
        assert_eq!(anchor("*.log", Path::new("a/b")), "a/b/*.log");
        assert_eq!(anchor("*.log", Path::new("")), "*.log");
    }

    #[test]
    fn anchor_keeps_negation_in_front() {
        assert_eq!(anchor("!keep.log", Path::new("sub")), "!sub/keep.log");
        assert_eq!(anchor("!keep.log", Path::new("")), "!keep.log");
    }

    #[test]
    fn anchor_collapses_slash_runs() {
        // A spec-file rule rooted with `/` concatenates into a double slash
        assert_eq!(anchor("/build", Path::new("sub")), "sub/build");
        assert_eq!(anchor("/build", Path::new("")), "/build");
    }

    #[test]
    fn anchor_strips_leading_dot_slash() {
        assert_eq!(anchor("./foo.txt", Path::new("")), "foo.txt");
    }

    #[test]
    fn fixture_end_to_end() -> Result<()> {
        let candidates = glob("fixture/ignore/**/*.txt")?;
        let mut kept = ignore_filter(&candidates, "fixture/ignore", ".testignore")?;
        kept.sort();
        assert_eq!(
            kept,
            vec![
                PathBuf::from("fixture/ignore/bar/bar.txt"),
                PathBuf::from("fixture/ignore/foo.txt"),
                PathBuf::from("fixture/ignore/muk.txt"),
            ]
        );
        Ok(())
    }

    #[test]
    fn deeper_negation_reincludes() -> Result<()> {
        let dir = tempdir().unwrap();
        let root = dir.path().join("r");
        write(root.join(".ig"), "*.log");
        write(root.join("sub/.ig"), "!keep.log");
        write(root.join("a.log"), "");
        write(root.join("sub/keep.log"), "");
        write(root.join("sub/other.log"), "");
        write(root.join("b.txt"), "");

        let candidates = vec![
            root.join("a.log"),
            root.join("sub/keep.log"),
            root.join("sub/other.log"),
            root.join("b.txt"),
        ];
        let kept = ignore_filter(&candidates, &root, ".ig")?;
        // Original order preserved, full paths preserved
        assert_eq!(kept, vec![root.join("sub/keep.log"), root.join("b.txt")]);
        Ok(())
    }

    #[test]
    fn directory_patterns_cover_contents() -> Result<()> {
        let dir = tempdir().unwrap();
        let root = dir.path().join("r");
        write(root.join(".ig"), "build/");
        write(root.join("build/out.txt"), "");
        write(root.join("src.txt"), "");

        let candidates = vec![root.join("build/out.txt"), root.join("src.txt")];
        let kept = ignore_filter(&candidates, &root, ".ig")?;
        assert_eq!(kept, vec![root.join("src.txt")]);
        Ok(())
    }

    #[test]
    fn no_spec_files_is_identity() -> Result<()> {
        let dir = tempdir().unwrap();
        let root = dir.path().join("r");
        write(root.join("z.txt"), "");
        write(root.join("a.txt"), "");

        let candidates = vec![root.join("z.txt"), root.join("a.txt")];
        let kept = ignore_filter(&candidates, &root, ".ig")?;
        assert_eq!(kept, candidates);
        Ok(())
    }

    #[test]
    fn blank_lines_are_dropped() -> Result<()> {
        let dir = tempdir().unwrap();
        let root = dir.path().join("r");
        write(root.join(".ig"), "\n*.log\n\n");
        write(root.join("a.log"), "");
        write(root.join("b.txt"), "");

        let candidates = vec![root.join("a.log"), root.join("b.txt")];
        let kept = ignore_filter(&candidates, &root, ".ig")?;
        assert_eq!(kept, vec![root.join("b.txt")]);
        Ok(())
    }

    #[test]
    fn spec_files_inside_hidden_dirs_are_found() -> Result<()> {
        let dir = tempdir().unwrap();
        let root = dir.path().join("r");
        write(root.join(".hidden/.ig"), "*.tmp");
        write(root.join(".hidden/scratch.tmp"), "");
        write(root.join(".hidden/keep.txt"), "");

        let candidates = vec![
            root.join(".hidden/scratch.tmp"),
            root.join(".hidden/keep.txt"),
        ];
        let kept = ignore_filter(&candidates, &root, ".ig")?;
        assert_eq!(kept, vec![root.join(".hidden/keep.txt")]);
        Ok(())
    }
}
