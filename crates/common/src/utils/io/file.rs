use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use eyre::Result;

/// Write contents to a file on the disc, creating parent directories as needed.
///
/// ```no_run
/// use lexeth_common::utils::io::file::write_file;
///
/// let path = "/tmp/test.txt";
/// let contents = "Hello, World!";
/// let result = write_file(path, contents);
/// ```
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let path = path.as_ref();

    // Create the directory if it doesn't exist
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use lexeth_common::utils::io::file::read_file;
///
/// let path = "/tmp/test.txt";
/// let contents = read_file(path);
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Delete a file or directory from the disc. Returns `true` if nothing remains at `path`.
///
/// ```no_run
/// use lexeth_common::utils::io::file::delete_path;
///
/// let path = "/tmp/test.txt";
/// let result = delete_path(path);
/// ```
pub fn delete_path<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let result = if path.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };

    match result {
        Ok(()) => true,
        Err(e) => e.kind() == std::io::ErrorKind::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("lexeth-common-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_write_file_successful() {
        let path = scratch("write").join("nested").join("test.txt");
        let result = write_file(&path, "Hello, World!");
        assert!(result.is_ok());
        assert!(delete_path(path.parent().expect("has parent")));
    }

    #[test]
    fn test_read_file_successful() {
        let path = scratch("read.txt");
        write_file(&path, "Hello, World!").expect("unable to write file");

        let result = read_file(&path).expect("unable to read file");
        assert_eq!(result, "Hello, World!");
        assert!(delete_path(&path));
    }

    #[test]
    fn test_read_file_failure() {
        let result = read_file("/nonexistent/lexeth/test.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_path_successful() {
        let path = scratch("dir");
        std::fs::create_dir_all(&path).expect("unable to create directory");

        assert!(delete_path(&path));
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_path_missing() {
        assert!(delete_path("/nonexistent/lexeth/test_dir"));
    }
}
