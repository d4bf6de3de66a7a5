use {
    serde::{Deserialize, Serialize},
    std::{
        fs::File,
        io::{self, BufReader, Read},
        path::Path,
    },
};

pub fn read<T: for<'de> Deserialize<'de>>(source: impl Read) -> serde_json::Result<T> {
    serde_json::from_reader(BufReader::new(source))
}

/// Fails with `NotFound` if there is nothing at `path`
pub fn read_from_file<T: for<'de> Deserialize<'de>>(
    path: impl AsRef<Path>,
) -> Result<T, ReadError> {
    let f = File::open(path)?;
    Ok(read(f)?)
}

pub fn to_bytes<T: Serialize>(obj: &T) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(obj)
}

/// Replace whatever is at `path` with `bytes` in one go.
///
/// The data goes to a sibling temporary file first, which is then renamed over `path`,
/// so readers only ever see the old or the new document.
pub fn write_whole_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);
    std::fs::write(tmp_path, bytes)?;
    if let Err(e) = std::fs::rename(tmp_path, path) {
        let _ = std::fs::remove_file(tmp_path);
        return Err(e);
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
