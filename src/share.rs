use {
    anyhow::Context,
    std::{io::Write, path::PathBuf},
};

/// Something handed off to the platform's sharing mechanism
#[derive(Debug, PartialEq, Eq)]
pub enum Payload {
    File(PathBuf),
    Text(String),
}

pub trait ShareTarget {
    fn present(&mut self, payload: Payload) -> anyhow::Result<()>;
}

/// Opens files with whatever the desktop has associated with them, and prints text.
pub struct Desktop<W> {
    pub out: W,
}

impl<W: Write> ShareTarget for Desktop<W> {
    fn present(&mut self, payload: Payload) -> anyhow::Result<()> {
        match payload {
            Payload::File(path) => {
                open::that(&path).with_context(|| format!("Failed to open {}", path.display()))
            }
            Payload::Text(text) => {
                self.out.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    self.out.write_all(b"\n")?;
                }
                Ok(())
            }
        }
    }
}

/// Remembers everything it was asked to share
#[derive(Default, Debug)]
pub struct Recorder {
    pub shared: Vec<Payload>,
}

impl ShareTarget for Recorder {
    fn present(&mut self, payload: Payload) -> anyhow::Result<()> {
        self.shared.push(payload);
        Ok(())
    }
}

#[test]
fn desktop_prints_text_with_trailing_newline() {
    let mut desktop = Desktop { out: Vec::new() };
    desktop
        .present(Payload::Text("4 Island".into()))
        .unwrap();
    desktop
        .present(Payload::Text("1 Forest\n".into()))
        .unwrap();
    assert_eq!(desktop.out, b"4 Island\n1 Forest\n");
}
