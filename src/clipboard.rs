use anyhow::{Context, Result};

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard. The handle is opened lazily so headless runs only fail
/// when something is actually copied.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("open system clipboard")?);
        }
        let Some(cb) = self.inner.as_mut() else {
            anyhow::bail!("system clipboard unavailable");
        };
        cb.set_text(text.to_string())
            .context("write system clipboard")?;
        Ok(())
    }
}

/// Used when copying is turned off (`--no-copy`).
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Records every write; used by tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
