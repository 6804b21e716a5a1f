pub mod design;
pub mod enzymes;
pub mod find;
pub mod score;

use std::io::Write;

use crate::common::open_file;
use crate::errors::*;
use crate::messages::MessageLog;

/// Writes the retained diagnostic messages, if a debug log was requested.
pub fn write_debug_log(path: &Option<String>, log: &MessageLog) -> Result<()> {
    if let Some(path) = path {
        let mut out = open_file(path)?;
        log.write(&mut *out)
            .chain_err(|| format!("failed to write debug log {:?}", path))?;
        out.flush().chain_err(|| format!("failed to write debug log {:?}", path))?;
    }

    Ok(())
}
