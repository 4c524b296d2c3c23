use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Opens the event source: the given file, or stdin when no path is set.
pub fn open_input(file_path: Option<&str>) -> Result<Box<dyn BufRead>, io::Error> {
    match file_path {
        Some(path) => {
            let file = File::open(expand_tilde(path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Expands a tilde in a file path to the user's home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    }
    PathBuf::from(path)
}
