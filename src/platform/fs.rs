// Platform-specific filesystem operations

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Copy `src` to `dst`, flushing the data to disk before returning.
///
/// Returns the number of bytes copied. Write errors on drvfs mounts only
/// show up on `sync_all`.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    let source = File::open(src)
        .map_err(|e| io::Error::new(e.kind(), format!("failed to open {}: {}", src.display(), e)))?;
    let target = File::create(dst).map_err(|e| {
        io::Error::new(e.kind(), format!("failed to create {}: {}", dst.display(), e))
    })?;

    let mut reader = BufReader::new(source);
    let mut writer = BufWriter::new(target);
    let copied = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(copied)
}
