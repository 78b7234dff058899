//! File I/O operations (import, export) for designer state.
//!
//! Import is all-or-nothing: the file is decoded into a temporary value and
//! only swapped into the state once every instruction has decoded.

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::{CommandOutcome, DesignerState};
use crate::serialization::InstructionFile;

/// Where import reads from and export writes to.
///
/// `Ok(None)` means the user dismissed the dialog.
pub trait FilePicker {
    fn open_read(&mut self) -> io::Result<Option<Vec<u8>>>;

    fn open_write(&mut self) -> io::Result<Option<Box<dyn Write>>>;
}

/// Picker with fixed paths. A missing path behaves like a cancelled dialog.
#[derive(Debug, Clone, Default)]
pub struct PathPicker {
    read_path: Option<PathBuf>,
    write_path: Option<PathBuf>,
}

impl PathPicker {
    pub fn new(read_path: Option<PathBuf>, write_path: Option<PathBuf>) -> Self {
        Self {
            read_path,
            write_path,
        }
    }

    pub fn reading(path: impl AsRef<Path>) -> Self {
        Self::new(Some(path.as_ref().to_path_buf()), None)
    }

    pub fn writing(path: impl AsRef<Path>) -> Self {
        Self::new(None, Some(path.as_ref().to_path_buf()))
    }

    /// A picker that always cancels.
    pub fn cancelled() -> Self {
        Self::default()
    }
}

impl FilePicker for PathPicker {
    fn open_read(&mut self) -> io::Result<Option<Vec<u8>>> {
        match &self.read_path {
            Some(path) => std::fs::read(path).map(Some),
            None => Ok(None),
        }
    }

    fn open_write(&mut self) -> io::Result<Option<Box<dyn Write>>> {
        match &self.write_path {
            Some(path) => {
                let file = File::create(path)?;
                Ok(Some(Box::new(BufWriter::new(file))))
            }
            None => Ok(None),
        }
    }
}

/// Native open/save dialogs.
#[cfg(feature = "dialogs")]
#[derive(Debug, Clone, Default)]
pub struct DialogPicker {
    directory: Option<PathBuf>,
}

#[cfg(feature = "dialogs")]
impl DialogPicker {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }

    fn dialog(&self, title: &str) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Instruction Files", &["json", "sim"]);
        if let Some(dir) = &self.directory {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }
}

#[cfg(feature = "dialogs")]
impl FilePicker for DialogPicker {
    fn open_read(&mut self) -> io::Result<Option<Vec<u8>>> {
        match self.dialog("Import instructions").pick_file() {
            Some(path) => {
                self.directory = path.parent().map(Path::to_path_buf);
                std::fs::read(path).map(Some)
            }
            None => Ok(None),
        }
    }

    fn open_write(&mut self) -> io::Result<Option<Box<dyn Write>>> {
        match self
            .dialog("Export instructions")
            .set_file_name("instructions.json")
            .save_file()
        {
            Some(path) => {
                self.directory = path.parent().map(Path::to_path_buf);
                let file = File::create(path)?;
                Ok(Some(Box::new(BufWriter::new(file))))
            }
            None => Ok(None),
        }
    }
}

impl DesignerState {
    /// Replaces the sequence and robot profile with a file's contents.
    ///
    /// On any failure the current state is left untouched.
    pub fn import(&mut self, picker: &mut dyn FilePicker) -> anyhow::Result<CommandOutcome> {
        let bytes = match picker
            .open_read()
            .context("Failed to read instruction file")?
        {
            Some(bytes) => bytes,
            None => {
                debug!("Import cancelled");
                return Ok(CommandOutcome::Cancelled);
            }
        };

        let decoded = InstructionFile::from_slice(&bytes)
            .and_then(|file| Ok((file.to_sequence(), file.robot_profile()?)));
        let (sequence, robot) = match decoded {
            Ok(decoded) => decoded,
            Err(e) => {
                warn!("Import failed: {}", e);
                return Err(e).context("Failed to parse instruction file");
            }
        };

        info!("Imported {} instructions", sequence.len());
        self.sequence = sequence;
        self.robot = robot;
        self.is_modified = false;
        Ok(CommandOutcome::Applied)
    }

    /// Writes the sequence and robot profile as an engine input file.
    pub fn export(&mut self, picker: &mut dyn FilePicker) -> anyhow::Result<CommandOutcome> {
        let mut sink = match picker
            .open_write()
            .context("Failed to create instruction file")?
        {
            Some(sink) => sink,
            None => {
                debug!("Export cancelled");
                return Ok(CommandOutcome::Cancelled);
            }
        };

        let json = InstructionFile::new(&self.sequence, &self.robot)
            .to_json()
            .context("Failed to serialize instructions")?;
        let written = sink
            .write_all(json.as_bytes())
            .and_then(|_| sink.flush());
        if let Err(e) = written {
            warn!("Export failed: {}", e);
            return Err(e).context("Failed to write instruction file");
        }

        info!("Exported {} instructions", self.sequence.len());
        self.is_modified = false;
        Ok(CommandOutcome::Applied)
    }

    /// Save instructions to a path.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.export(&mut PathPicker::writing(path)).map(|_| ())
    }

    /// Load instructions from a path.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.import(&mut PathPicker::reading(path)).map(|_| ())
    }
}
