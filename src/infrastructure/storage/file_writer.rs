//! Streams a response body to a local file.

use std::path::Path;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::domain::errors::DownloadError;

/// Upper bound on the size of a single write.
pub const CHUNK_SIZE: usize = 8192;

/// Writes every chunk of `stream` to a new file at `path` and returns the
/// file's size on disk.
///
/// The writer is flushed on every exit path. When the stream fails midway
/// the partially written file is left in place.
///
/// # Errors
///
/// Returns the stream's own error on transport failure, or
/// [`DownloadError::Filesystem`] if the file cannot be created, written,
/// flushed, or inspected.
pub async fn write_stream<S>(mut stream: S, path: &Path) -> Result<u64, DownloadError>
where
    S: Stream<Item = Result<Bytes, DownloadError>> + Unpin,
{
    let file = File::create(path).await?;
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);

    let copied = copy_chunks(&mut stream, &mut writer).await;
    let flushed = writer.flush().await;
    drop(writer);

    copied?;
    flushed?;

    let size = tokio::fs::metadata(path).await?.len();
    Ok(size)
}

async fn copy_chunks<S>(stream: &mut S, writer: &mut BufWriter<File>) -> Result<(), DownloadError>
where
    S: Stream<Item = Result<Bytes, DownloadError>> + Unpin,
{
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        for piece in chunk.chunks(CHUNK_SIZE) {
            writer.write_all(piece).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn chunked(body: &[u8], chunk_len: usize) -> Vec<Result<Bytes, DownloadError>> {
        body.chunks(chunk_len)
            .map(|c| Ok(Bytes::copy_from_slice(c)))
            .collect()
    }

    #[tokio::test]
    async fn test_write_small_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.mp4");
        let body = b"tiny video".to_vec();

        let size = write_stream(stream::iter(chunked(&body, 4)), &path)
            .await
            .unwrap();

        assert_eq!(size, body.len() as u64);
        assert_eq!(std::fs::read(&path).unwrap(), body);
    }

    #[tokio::test]
    async fn test_write_multi_chunk_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("large.mp4");
        let body: Vec<u8> = (0..CHUNK_SIZE * 5 + 123).map(|i| (i % 251) as u8).collect();

        // One oversized upstream chunk plus a tail.
        let mut chunks = vec![Ok(Bytes::copy_from_slice(&body[..CHUNK_SIZE * 3 + 7]))];
        chunks.extend(chunked(&body[CHUNK_SIZE * 3 + 7..], 1000));

        let size = write_stream(stream::iter(chunks), &path).await.unwrap();

        assert_eq!(size, body.len() as u64);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), size);
        assert_eq!(std::fs::read(&path).unwrap(), body);
    }

    #[tokio::test]
    async fn test_write_empty_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.mp4");

        let empty: Vec<Result<Bytes, DownloadError>> = Vec::new();
        let size = write_stream(stream::iter(empty), &path).await.unwrap();

        assert_eq!(size, 0);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_mid_stream_failure_keeps_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.mp4");
        let chunks = vec![
            Ok(Bytes::from_static(b"first part")),
            Err(DownloadError::transport("connection reset")),
            Ok(Bytes::from_static(b"never written")),
        ];

        let err = write_stream(stream::iter(chunks), &path).await.unwrap_err();

        assert!(matches!(err, DownloadError::Transport(_)));
        assert_eq!(std::fs::read(&path).unwrap(), b"first part");
    }

    #[tokio::test]
    async fn test_missing_directory_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("video.mp4");

        let err = write_stream(stream::iter(chunked(b"data", 2)), &path)
            .await
            .unwrap_err();

        assert!(matches!(err, DownloadError::Filesystem(_)));
    }
}
