use crate::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expands each input path and renders every contained text file as an
/// attachment fragment. Directories are recursed depth-inclusive with
/// entries visited in sorted order, so fragment order is stable across runs.
/// Files that do not decode as UTF-8 are skipped, not reported.
pub fn collect_fragments(input_paths: &[PathBuf]) -> Result<Vec<String>, Error> {
    let mut fragments = Vec::new();
    for input_path in input_paths {
        collect_path(&expand_home(input_path), &mut fragments)?;
    }
    Ok(fragments)
}

fn collect_path(path: &Path, fragments: &mut Vec<String>) -> Result<(), Error> {
    if path.is_dir() {
        let entries = fs::read_dir(path)
            .and_then(|dir| dir.collect::<Result<Vec<_>, _>>())
            .map_err(|source| Error::InputRead {
                path: path.to_path_buf(),
                source,
            })?;

        let mut paths: Vec<PathBuf> = entries.iter().map(|entry| entry.path()).collect();
        paths.sort();

        for entry_path in paths {
            collect_path(&entry_path, fragments)?;
        }
        return Ok(());
    }

    match fs::read_to_string(path) {
        Ok(contents) => fragments.push(fragment_from_file(path, &contents)),
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            debug!(path = %path.display(), "skipping non-text file");
        }
        Err(source) => {
            return Err(Error::InputRead {
                path: path.to_path_buf(),
                source,
            })
        }
    }
    Ok(())
}

/// Labeled block naming the source path followed by its contents.
fn fragment_from_file(path: &Path, contents: &str) -> String {
    format!("### {}\n===\n{}\n", path.display(), contents)
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_in_input_then_enumeration_order() {
        let dir = tempfile::tempdir().unwrap();
        let file_a = dir.path().join("fileA.txt");
        fs::write(&file_a, "hello").unwrap();

        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("fileB.txt"), "world").unwrap();
        fs::write(sub.join("fileC.txt"), "again").unwrap();

        let fragments = collect_fragments(&[file_a.clone(), sub.clone()]).unwrap();

        assert_eq!(
            fragments,
            vec![
                format!("### {}\n===\nhello\n", file_a.display()),
                format!("### {}\n===\nworld\n", sub.join("fileB.txt").display()),
                format!("### {}\n===\nagain\n", sub.join("fileC.txt").display()),
            ]
        );
    }

    #[test]
    fn test_non_utf8_file_skipped_silently() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "ok").unwrap();
        fs::write(dir.path().join("zbad.bin"), [0xff, 0xfe, 0x00, 0x01]).unwrap();

        let fragments = collect_fragments(&[dir.path().to_path_buf()]).unwrap();

        assert_eq!(
            fragments,
            vec![format!("### {}\n===\nok\n", good.display())]
        );
    }

    #[test]
    fn test_empty_input_paths() {
        assert!(collect_fragments(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = collect_fragments(&[PathBuf::from("/nonexistent/file.txt")]);
        assert!(matches!(result, Err(Error::InputRead { .. })));
    }
}
