//! PDF text extraction via `pdf-extract`.
//!
//! The crate prints glyph/font warnings straight to stderr on many real-world
//! PDFs, so extraction runs with stderr redirected to /dev/null on Unix.

use anyhow::{Context, Result};
use pdf_extract::extract_text_from_mem;
use std::fs;

/// Read a PDF file's raw bytes and return its extracted text.
pub fn extract_pdf_text(file_path: &str) -> Result<String> {
    let bytes =
        fs::read(file_path).with_context(|| format!("failed to read PDF '{}'", file_path))?;

    let extracted = with_stderr_suppressed(|| extract_text_from_mem(&bytes))
        .unwrap_or_else(|_| extract_text_from_mem(&bytes));

    extracted
        .map_err(|e| anyhow::anyhow!("failed to extract text from PDF '{}': {}", file_path, e))
}

#[cfg(unix)]
fn with_stderr_suppressed<F, T>(f: F) -> std::io::Result<T>
where
    F: FnOnce() -> T,
{
    use std::fs::OpenOptions;
    use std::io;
    use std::os::unix::io::AsRawFd;

    extern "C" {
        fn dup(fd: i32) -> i32;
        fn dup2(oldfd: i32, newfd: i32) -> i32;
        fn close(fd: i32) -> i32;
    }

    let null = OpenOptions::new().write(true).open("/dev/null")?;
    let null_fd = null.as_raw_fd();

    unsafe {
        let stderr_fd = 2;
        let saved = dup(stderr_fd);
        if saved == -1 {
            return Err(io::Error::last_os_error());
        }
        if dup2(null_fd, stderr_fd) == -1 {
            let _ = close(saved);
            return Err(io::Error::last_os_error());
        }

        let result = f();

        let _ = dup2(saved, stderr_fd);
        let _ = close(saved);
        Ok(result)
    }
}

#[cfg(not(unix))]
fn with_stderr_suppressed<F, T>(f: F) -> std::io::Result<T>
where
    F: FnOnce() -> T,
{
    Ok(f())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_pdf_is_an_error() {
        assert!(extract_pdf_text("nonexistent.pdf").is_err());
    }

    #[test]
    fn non_pdf_bytes_are_an_error() {
        use std::io::Write;
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        write!(file, "this is not a PDF").unwrap();
        assert!(extract_pdf_text(file.path().to_str().unwrap()).is_err());
    }
}
