/// System clipboard surface the copy action publishes to.
pub trait Clipboard {
    /// Replaces the clipboard contents with plain text.
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;

    /// Empties the clipboard, leaving no data flavors at all.
    fn clear(&mut self) -> anyhow::Result<()>;
}

/// OS clipboard backed by `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.inner.set_text(text)?;
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.inner.clear()?;
        Ok(())
    }
}
