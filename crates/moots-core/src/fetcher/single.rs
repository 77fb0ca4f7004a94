//! One record, one GET, one file.

use std::path::{Path, PathBuf};

use crate::record::MutualRecord;
use crate::storage;
use crate::url_model;

use super::FetchError;

/// Downloads `record`'s image into `folder` and returns the written path.
///
/// The body is buffered before anything touches disk, so a transport error or
/// a non-200 status writes no file at all. An existing file at the target path
/// is overwritten silently.
pub fn fetch_one(record: &MutualRecord, folder: &Path) -> Result<PathBuf, FetchError> {
    let body = fetch_image(&record.image_url)?;
    let filename = url_model::derive_filename(&record.handle, &record.image_url);
    let path = storage::write_image(folder, &filename, &body)?;
    Ok(path)
}

/// Performs the GET and returns the body of a 200 response.
///
/// Redirects are followed; no explicit timeout is set, so a stalled transfer
/// blocks this fetch (and only this fetch) on the transport's defaults.
fn fetch_image(url: &str) -> Result<Vec<u8>, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        return Err(FetchError::HttpStatus(code));
    }
    Ok(body)
}
