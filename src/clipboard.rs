use anyhow::Context;

/// Somewhere text can be pasted from and copied to
pub trait Clipboard {
    /// `None` if there is no text on it
    fn get_text(&mut self) -> Option<String>;
    fn set_text(&mut self, text: String) -> anyhow::Result<()>;
}

/// The system clipboard
pub struct SystemClipboard {
    ctx: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            ctx: arboard::Clipboard::new().context("Failed to open clipboard")?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        match self.ctx.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => {
                log::warn!("Failed to read clipboard text: {e}");
                None
            }
        }
    }
    fn set_text(&mut self, text: String) -> anyhow::Result<()> {
        self.ctx
            .set_text(text)
            .context("Failed to copy to clipboard")
    }
}

/// Clipboard that lives in memory, for when there is no system clipboard to talk to
#[derive(Default, Debug)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.text.clone()
    }
    fn set_text(&mut self, text: String) -> anyhow::Result<()> {
        self.text = Some(text);
        Ok(())
    }
}
