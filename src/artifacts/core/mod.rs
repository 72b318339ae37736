//! Output helpers shared by the command layer

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging of history output
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// `Write` adapter over the minus pager, so history can be streamed into it
/// like any other writer
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Whether history output should go through the pager
pub fn should_page(stdout_is_terminal: bool) -> bool {
    stdout_is_terminal && std::env::var_os(NO_PAGER_ENV).is_none()
}
