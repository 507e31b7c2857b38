use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::list::NumberList;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("source `{}` does not exist", .0.display())]
    SourceNotFound(PathBuf),
    #[error("error reading source `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Collects every numeric token of `text`, in order, skipping anything else.
pub fn parse_numbers(text: &str) -> NumberList {
    let mut list = NumberList::new();

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for token in line.split_whitespace() {
            if let Some(value) = parse_number(token) {
                list.insert(value);
            }
        }
    }

    list
}

pub fn load_from_file(path: &Path) -> Result<NumberList, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::SourceNotFound(path.to_path_buf()),
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let list = parse_numbers(&content);
    tracing::debug!("Loaded {} values from {}", list.size(), path.display());

    Ok(list)
}

fn parse_number(token: &str) -> Option<f64> {
    if !is_numeric_literal(token) {
        return None;
    }
    token.parse::<f64>().ok()
}

// sign? digits [. digits] [e sign? digits], with at least one mantissa digit
fn is_numeric_literal(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return false;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
