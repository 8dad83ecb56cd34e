//! Path handling that works the same for POSIX and Windows-style paths.
//!
//! Frontends may run on a different OS than the engine, so paths are
//! compared as segment lists split on both `/` and `\`, never through
//! `Path::strip_prefix`.

use std::path::{Path, PathBuf};

/// Split a path on either separator, dropping empty and `.` segments and
/// letting `..` cancel the segment before it. A `..` with nothing left to
/// cancel is kept.
pub fn segments(path: &str) -> Vec<&str> {
    let mut result: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." if result.last().is_some_and(|last| *last != "..") => {
                result.pop();
            }
            _ => result.push(segment),
        }
    }
    result
}

/// True for `/x`, `\x` and drive-letter paths such as `C:\x`.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(['/', '\\']) || has_drive_letter(path)
}

fn has_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Segments of `path` below `root`.
///
/// A relative `path` is taken as already root-relative. Returns `None` when
/// `path` lies outside `root`. Drive-letter paths compare case-insensitively.
pub fn relative_segments<'a>(path: &'a str, root: &str) -> Option<Vec<&'a str>> {
    let path_segments = segments(path);
    if !is_absolute(path) {
        return match path_segments.first() {
            Some(&"..") => None,
            _ => Some(path_segments),
        };
    }

    let ignore_case = has_drive_letter(path) || has_drive_letter(root);
    let same = |p: &&str, r: &&str| {
        if ignore_case {
            p.eq_ignore_ascii_case(r)
        } else {
            p == r
        }
    };

    let root_segments = segments(root);
    if path_segments.len() < root_segments.len()
        || !path_segments
            .iter()
            .zip(&root_segments)
            .all(|(p, r)| same(p, r))
    {
        return None;
    }
    Some(path_segments[root_segments.len()..].to_vec())
}

/// Forward-slash, root-relative form of `file`. Files outside the root keep
/// their full path with separators normalized.
pub fn normalize_path(file: &Path, root: &Path) -> String {
    let file = file.to_string_lossy();
    let root = root.to_string_lossy();
    match relative_segments(&file, &root) {
        Some(relative) => relative.join("/"),
        None => file.replace('\\', "/"),
    }
}

/// Absolute form of a scan root given on the command line, relative to the
/// working directory. Symlinks are left alone so the root still prefixes the
/// paths the frontend reported.
pub fn absolute_root(root: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_posix_path_under_root() {
        assert_eq!(
            normalize_path(
                &PathBuf::from("/repo/src/Ordering.Domain/Order.cs"),
                &PathBuf::from("/repo")
            ),
            "src/Ordering.Domain/Order.cs"
        );
    }

    #[test]
    fn test_normalize_windows_path_under_root() {
        assert_eq!(
            normalize_path(
                &PathBuf::from(r"C:\repo\Services\Basket.API\Startup.cs"),
                &PathBuf::from(r"C:\repo\")
            ),
            "Services/Basket.API/Startup.cs"
        );
    }

    #[test]
    fn test_drive_letter_paths_ignore_case() {
        assert_eq!(
            relative_segments(r"c:\repo\X\A.cs", r"C:\Repo"),
            Some(vec!["X", "A.cs"])
        );
        assert_eq!(relative_segments("/Repo/X/A.cs", "/repo"), None);
    }

    #[test]
    fn test_parent_segments_collapse() {
        assert_eq!(segments("/repo/src/../Shared/A.cs"), vec!["repo", "Shared", "A.cs"]);
        assert_eq!(
            relative_segments("/repo/src/../Shared/A.cs", "/work/../repo"),
            Some(vec!["Shared", "A.cs"])
        );
        assert_eq!(segments("../x/./y"), vec!["..", "x", "y"]);
    }

    #[test]
    fn test_relative_path_escaping_root_is_outside() {
        assert_eq!(relative_segments("../other/A.cs", "/repo"), None);
    }

    #[test]
    fn test_normalize_path_outside_root_keeps_full_path() {
        assert_eq!(
            normalize_path(&PathBuf::from(r"D:\other\A.cs"), &PathBuf::from(r"C:\repo")),
            "D:/other/A.cs"
        );
    }

    #[test]
    fn test_relative_input_is_root_relative() {
        assert_eq!(
            relative_segments("./src/A.cs", "/repo"),
            Some(vec!["src", "A.cs"])
        );
    }

    #[test]
    fn test_root_must_match_whole_segments() {
        assert_eq!(relative_segments("/repository/A.cs", "/repo"), None);
    }

    #[test]
    fn test_absolute_root_anchors_relative_roots() {
        let cwd = std::env::current_dir().unwrap();
        let root = absolute_root(Path::new("some/dir")).unwrap();
        assert!(root.is_absolute());
        assert_eq!(
            normalize_path(&cwd.join("some/dir/A.cs"), &root),
            "A.cs"
        );
    }
}
