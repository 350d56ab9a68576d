use std::path::Path;
use mime_guess::MimeGuess;

/// Directory pseudo-mimetypes and the folder icons that stand in for them.
const FOLDER_ICONS: &[(&str, &str)] = &[
    ("dir", "folder"),
    ("dir-encrypted", "folder-encrypted"),
    ("dir-shared", "folder-shared"),
    ("dir-public", "folder-public"),
    ("dir-external", "folder-external"),
];

const GENERIC_ICON: &str = "file";

pub struct MimeResolver;

impl MimeResolver {
    /// Guesses the MIME type for a file path.
    /// Only uses extension-based guessing; file contents are never read.
    pub fn guess_mime_type(path: &Path) -> String {
        let guess = MimeGuess::from_path(path);
        guess.first_or_octet_stream().to_string()
    }

    /// Gets the icon basename for a given MIME type.
    pub fn get_icon_name(mime_type: &str) -> String {
        // e.g. "text/plain" -> "text-plain"
        mime_type.replace('/', "-")
    }

    /// Picks the best icon for `mime_type` among the available `files`.
    ///
    /// Tried in order: the folder icon for a `dir*` pseudo-type, the full
    /// basename, the basename cut at its first `-`, then the generic `file`
    /// icon. Returns `None` when none of them is available.
    pub fn pick_icon(mime_type: &str, files: &[String]) -> Option<String> {
        let has = |name: &str| files.iter().any(|f| f == name);

        if let Some((_, folder)) = FOLDER_ICONS.iter().find(|(dir, _)| *dir == mime_type) {
            if has(*folder) {
                return Some(folder.to_string());
            }
        }

        let icon = Self::get_icon_name(mime_type);
        if has(icon.as_str()) {
            return Some(icon);
        }

        // Only the first segment, never progressively shorter prefixes.
        let head = icon.split('-').next().unwrap_or_default();
        if has(head) {
            return Some(head.to_string());
        }

        if has(GENERIC_ICON) {
            return Some(GENERIC_ICON.to_string());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_folder_icons_need_matching_file() {
        let set = files(&["folder", "folder-shared", "file"]);
        assert_eq!(MimeResolver::pick_icon("dir", &set).as_deref(), Some("folder"));
        assert_eq!(MimeResolver::pick_icon("dir-shared", &set).as_deref(), Some("folder-shared"));
        // No "folder-public", "dir-public" or "dir": generic icon.
        assert_eq!(MimeResolver::pick_icon("dir-public", &set).as_deref(), Some("file"));
    }

    #[test]
    fn test_every_dir_type_maps_to_its_folder_icon() {
        let set = files(&[
            "folder",
            "folder-encrypted",
            "folder-shared",
            "folder-public",
            "folder-external",
            "file",
        ]);
        for (dir, folder) in [
            ("dir", "folder"),
            ("dir-encrypted", "folder-encrypted"),
            ("dir-shared", "folder-shared"),
            ("dir-public", "folder-public"),
            ("dir-external", "folder-external"),
        ] {
            assert_eq!(MimeResolver::pick_icon(dir, &set).as_deref(), Some(folder), "{}", dir);
        }
    }

    #[test]
    fn test_folder_icon_beats_full_basename() {
        let set = files(&["dir", "folder", "dir-external", "folder-external"]);
        assert_eq!(MimeResolver::pick_icon("dir", &set).as_deref(), Some("folder"));
        assert_eq!(MimeResolver::pick_icon("dir-external", &set).as_deref(), Some("folder-external"));
    }

    #[test]
    fn test_first_segment_only() {
        let set = files(&["x", "x-office"]);
        // "x-office-document" is absent; the fallback is "x", not "x-office".
        assert_eq!(MimeResolver::pick_icon("x-office/document", &set).as_deref(), Some("x"));
    }

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(MimeResolver::guess_mime_type(Path::new("a/report.pdf")), "application/pdf");
        assert_eq!(
            MimeResolver::guess_mime_type(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}
