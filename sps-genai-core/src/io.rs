use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads a UTF-8 text file into one `String` per line (`\n` or `\r\n`).
pub(crate) fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
	Ok(fs::read_to_string(path)?.lines().map(str::to_owned).collect())
}

/// Path of the binary cache kept next to `input_path`.
///
/// The extension is appended to the full file name so that files differing
/// only before their last dot get distinct caches.
///
/// Example:
/// `data/glove.6B.50d.txt` + `"bin"` → `data/glove.6B.50d.txt.bin`
pub(crate) fn cache_path<P: AsRef<Path>>(input_path: P, extension: &str) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();
	let mut file_name = input_path
		.file_name()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?
		.to_os_string();
	file_name.push(".");
	file_name.push(extension);

	Ok(input_path.with_file_name(file_name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn read_lines_splits_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("corpus.txt");
		std::fs::write(&path, "first line\r\nsecond line\n").unwrap();

		let lines = read_lines(&path).unwrap();
		assert_eq!(lines, vec!["first line".to_owned(), "second line".to_owned()]);
	}

	#[test]
	fn read_lines_missing_is_not_found() {
		let err = read_lines("./does/not/exist.txt").unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::NotFound);
	}

	#[test]
	fn cache_path_keeps_full_file_name() {
		let out = cache_path("data/vectors.txt", "bin").unwrap();
		assert_eq!(out, PathBuf::from("data/vectors.txt.bin"));
	}

	#[test]
	fn cache_paths_differ_for_multi_dot_names() {
		let small = cache_path("data/glove.6B.50d.txt", "bin").unwrap();
		let large = cache_path("data/glove.6B.100d.txt", "bin").unwrap();
		assert_eq!(small, PathBuf::from("data/glove.6B.50d.txt.bin"));
		assert_ne!(small, large);
	}

	#[test]
	fn cache_path_without_filename_fails() {
		assert!(cache_path("/", "bin").is_err());
		assert!(cache_path("data/..", "bin").is_err());
	}
}
