use std::path::{Path, PathBuf};

/// Expand `~`, `$VAR` and `${VAR}` in a path.
///
/// Unknown variables leave the input unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = std::env::var("HOME").expect("HOME should be set");
        let expanded = expand_path(Path::new("~/notes.txt"));
        assert_eq!(expanded, PathBuf::from(home).join("notes.txt"));
    }

    #[test]
    fn test_unknown_variable_leaves_path_unchanged() {
        let path = Path::new("$EXKIT_SURELY_UNSET_VARIABLE/x.txt");
        assert_eq!(expand_path(path), path.to_path_buf());
    }

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(expand_path(Path::new("a/b.txt")), PathBuf::from("a/b.txt"));
    }
}
