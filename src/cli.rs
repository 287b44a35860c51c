//! Minimal CLI: resolve inputs → run the pipeline → render.
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// read `{"people": [...]}` documents and greet everyone in them
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., default_value = "file.txt")]
    input: Vec<String>,

    /// emit the mapped records as a pretty-printed JSON array instead of sentences
    #[arg(long, default_value_t = false)]
    json: bool,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    /// Errors here are CLI-level plumbing (bad glob, unwritable `--out`);
    /// the pipeline itself masks its own failures and cannot fail this.
    pub fn run(&self) -> anyhow::Result<()> {
        let source_paths = resolve_file_path_patterns(&self.input)
            .context("failed to resolve input file paths")?;

        let mut reports = Vec::new();
        for source_path in source_paths {
            reports.push(crate::pipeline::run(&source_path));
        }

        let rendered = if self.json {
            let everyone: Vec<_> = reports.into_iter().flat_map(|r| r.people).collect();
            let mut src = serde_json::to_string_pretty(&everyone)?;
            src.push('\n');
            src
        } else {
            let mut src = String::new();
            for report in &reports {
                src.push_str(&format!("The file contained: {}\n", report.raw));
                for person in &report.people {
                    src.push_str(&person.greeting());
                    src.push('\n');
                }
            }
            src
        };

        if let Some(out) = self.out.as_ref() {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, &rendered)
                .with_context(|| format!("failed to write {}", out.display()))?;
        } else {
            print!("{rendered}");
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Literal paths pass through untouched; a missing file is the
            // pipeline's masked read failure, not a CLI error.
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_paths_pass_through_even_when_missing() {
        let paths = resolve_file_path_patterns(["no/such/file.txt"]).unwrap();
        assert_eq!(paths, [PathBuf::from("no/such/file.txt")]);
    }

    #[test]
    fn globs_expand_to_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("c.txt"), "{}").unwrap();

        let pattern = format!("{}/*.json", dir.path().display());
        let paths = resolve_file_path_patterns([pattern.as_str()]).unwrap();
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn empty_glob_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.json", dir.path().display());
        let err = resolve_file_path_patterns([pattern.as_str()]).unwrap_err();
        assert!(err.to_string().contains("matched no files"));
    }
}
