use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Extensions (lower-case, with the leading dot) picked up by the lister.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp", ".svg", ".ico",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Lower-cased, including the leading dot.
    pub extension: String,
}

impl ImageFile {
    fn from_path(path: PathBuf) -> Option<Self> {
        let extension = image_extension(&path)?;
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            path,
            file_name,
            extension,
        })
    }
}

#[derive(Debug, Error)]
pub enum ListError {
    #[error("folder does not exist: {}", .0.display())]
    NotFound(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("could not read folder {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Lists the image files directly inside `folder`, ordered by
/// (name length, name).
pub fn list_image_files(folder: &Path) -> Result<Vec<ImageFile>, ListError> {
    if !folder.exists() {
        return Err(ListError::NotFound(folder.to_path_buf()));
    }
    if !folder.is_dir() {
        return Err(ListError::NotADirectory(folder.to_path_buf()));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| ListError::Unreadable {
            path: folder.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        // Follows symlinks, so a link to an image counts as a file.
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        match ImageFile::from_path(path.to_path_buf()) {
            Some(image) => out.push(image),
            None => tracing::debug!(path = %path.display(), "skipping non-image file"),
        }
    }

    out.sort_by(|a, b| compare_names(&a.file_name, &b.file_name));
    tracing::debug!(folder = %folder.display(), count = out.len(), "listed image files");
    Ok(out)
}

/// Shorter names first, then plain lexicographic order. This keeps
/// `img2.png` ahead of `img10.png` without a real natural sort.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

fn image_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    let ext = format!(".{ext}");
    IMAGE_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Lists a folder whose permissions forbid reading it. `None` when the
/// process can read it anyway (running as root).
#[cfg(all(test, unix))]
pub(crate) fn locked_folder_error(folder: &Path) -> Option<ListError> {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(folder).expect("create folder");
    fs::write(folder.join("a.png"), b"x").expect("write image");
    fs::set_permissions(folder, Permissions::from_mode(0o000)).expect("lock folder");
    let err = if fs::read_dir(folder).is_ok() {
        None
    } else {
        list_image_files(folder).err()
    };
    fs::set_permissions(folder, Permissions::from_mode(0o755)).expect("unlock folder");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(files: &[ImageFile]) -> Vec<&str> {
        files.iter().map(|f| f.file_name.as_str()).collect()
    }

    #[test]
    fn sorts_by_length_then_name() {
        let temp = tempdir().expect("tempdir");
        for name in ["b.png", "aa.png", "a.png"] {
            fs::write(temp.path().join(name), b"x").expect("write image");
        }

        let files = list_image_files(temp.path()).expect("list");
        assert_eq!(names(&files), vec!["a.png", "b.png", "aa.png"]);
    }

    #[test]
    fn numbered_names_keep_numeric_order_when_lengths_differ() {
        let temp = tempdir().expect("tempdir");
        for name in ["img10.png", "img2.png", "img1.png"] {
            fs::write(temp.path().join(name), b"x").expect("write image");
        }

        let files = list_image_files(temp.path()).expect("list");
        assert_eq!(names(&files), vec!["img1.png", "img2.png", "img10.png"]);
    }

    #[test]
    fn filters_extensions_case_insensitively() {
        let temp = tempdir().expect("tempdir");
        for name in ["photo.JPG", "notes.txt", "icon.Ico", "archive.png.zip", "README"] {
            fs::write(temp.path().join(name), b"x").expect("write file");
        }

        let files = list_image_files(temp.path()).expect("list");
        assert_eq!(names(&files), vec!["icon.Ico", "photo.JPG"]);
        assert_eq!(files[0].extension, ".ico");
        assert_eq!(files[1].extension, ".jpg");
    }

    #[test]
    fn skips_subdirectories_and_their_contents() {
        let temp = tempdir().expect("tempdir");
        let nested = temp.path().join("nested.png");
        fs::create_dir_all(&nested).expect("create dir");
        fs::write(nested.join("inner.png"), b"x").expect("write nested");
        fs::write(temp.path().join("top.png"), b"x").expect("write top");

        let files = list_image_files(temp.path()).expect("list");
        assert_eq!(names(&files), vec!["top.png"]);
    }

    #[test]
    fn bare_dot_file_has_no_extension() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join(".png"), b"x").expect("write dot file");

        let files = list_image_files(temp.path()).expect("list");
        assert!(files.is_empty());
    }

    #[test]
    fn missing_folder_is_not_found() {
        let temp = tempdir().expect("tempdir");
        let missing = temp.path().join("missing");

        let err = list_image_files(&missing).expect_err("must fail");
        assert!(matches!(err, ListError::NotFound(ref path) if path == &missing));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let temp = tempdir().expect("tempdir");
        let file = temp.path().join("a.png");
        fs::write(&file, b"x").expect("write file");

        let err = list_image_files(&file).expect_err("must fail");
        assert!(matches!(err, ListError::NotADirectory(_)));
    }

    #[test]
    fn compare_names_counts_characters_not_bytes() {
        assert_eq!(compare_names("é.png", "ab.png"), Ordering::Less);
        assert_eq!(compare_names("b.png", "a.png"), Ordering::Greater);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_folder_is_reported() {
        let temp = tempdir().expect("tempdir");
        let folder = temp.path().join("locked");
        let Some(err) = locked_folder_error(&folder) else {
            eprintln!("skipping: folder permissions are not enforced for this user");
            return;
        };
        assert!(matches!(err, ListError::Unreadable { ref path, .. } if path == &folder));
    }
}
