//! File dialog for choosing import files.
//!
//! Native builds block on the `rfd` dialog; web builds open the browser
//! picker asynchronously. Both deliver the chosen file through a channel
//! that the app drains once per frame.

/// A file chosen by the user, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

const FILTER_NAME: &str = "Spreadsheet";
const FILTER_EXTENSIONS: &[&str] = &["xlsx", "csv"];

/// Trait for file picker operations, enabling mock implementations for testing.
pub trait FilePickerHandler {
    /// Ask the user for a file.
    fn request(&self);

    /// A file picked since the last call, if any.
    fn poll(&self) -> Option<PickedFile>;
}

pub struct SystemFilePickerHandler {
    send: flume::Sender<PickedFile>,
    recv: flume::Receiver<PickedFile>,
}

impl Default for SystemFilePickerHandler {
    fn default() -> Self {
        let (send, recv) = flume::unbounded();
        Self { send, recv }
    }
}

impl FilePickerHandler for SystemFilePickerHandler {
    #[cfg(not(target_arch = "wasm32"))]
    fn request(&self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(FILTER_NAME, FILTER_EXTENSIONS)
            .set_title("Select a .xlsx / .csv file")
            .pick_file()
        else {
            log::debug!("File dialog cancelled");
            return;
        };
        log::info!("User selected file: {}", path.display());

        if let Some(file) = read_picked(&path)
            && self.send.send(file).is_err()
        {
            log::warn!("File picker channel closed");
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn request(&self) {
        let send = self.send.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let Some(handle) = rfd::AsyncFileDialog::new()
                .add_filter(FILTER_NAME, FILTER_EXTENSIONS)
                .set_title("Select a .xlsx / .csv file")
                .pick_file()
                .await
            else {
                return;
            };
            let file = PickedFile {
                name: handle.file_name(),
                bytes: handle.read().await,
            };
            log::info!("User selected file: {} ({} bytes)", file.name, file.bytes.len());
            if send.send(file).is_err() {
                log::warn!("File picker channel closed");
            }
        });
    }

    fn poll(&self) -> Option<PickedFile> {
        self.recv.try_recv().ok()
    }
}

/// Read a file from disk, naming it after the last path component.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn read_picked(path: &std::path::Path) -> Option<PickedFile> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match std::fs::read(path) {
        Ok(bytes) => {
            log::debug!("Read {} bytes from {}", bytes.len(), path.display());
            Some(PickedFile { name, bytes })
        }
        Err(err) => {
            log::warn!("Failed to read file {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_is_empty_until_something_is_sent() {
        let picker = SystemFilePickerHandler::default();
        assert_eq!(picker.poll(), None);

        let file = PickedFile {
            name: "types.csv".to_owned(),
            bytes: b"GZ-10,1".to_vec(),
        };
        picker.send.send(file.clone()).expect("channel open");
        assert_eq!(picker.poll(), Some(file));
        assert_eq!(picker.poll(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn read_picked_uses_file_name() {
        let path = std::env::temp_dir().join("ffgz_read_picked_test.csv");
        std::fs::write(&path, "GZ-10,1\n").expect("temp file written");

        let file = read_picked(&path).expect("file readable");
        assert_eq!(file.name, "ffgz_read_picked_test.csv");
        assert_eq!(file.bytes, b"GZ-10,1\n");

        std::fs::remove_file(&path).ok();
        assert_eq!(read_picked(&path), None);
    }
}
