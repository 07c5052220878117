//! This module stores task lists in flat files, one store string per line

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::list::TaskList;
use crate::task::{status_flag, Task};

/// A task list that is backed by a local file
#[derive(Clone, Debug, PartialEq)]
pub struct Storage {
    backing_file: PathBuf,
}

impl Storage {
    pub fn new(path: &Path) -> Self {
        Self { backing_file: PathBuf::from(path) }
    }

    /// The file for list `list_name` inside `folder`. The list name is sanitized so that it makes a valid file name
    pub fn in_folder(folder: &Path, list_name: &str) -> Self {
        let file_name = sanitize_filename::sanitize(format!("{}.txt", list_name));
        Self::new(&folder.join(file_name))
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::in_folder(&settings.data_folder, &settings.list_name)
    }

    pub fn path(&self) -> &Path {
        &self.backing_file
    }

    /// Load the task list from the backing file.
    ///
    /// A missing file is an empty list. Lines that cannot be decoded are skipped (and logged)
    pub fn load(&self) -> Result<TaskList, Box<dyn Error>> {
        let path = &self.backing_file;
        if path.exists() == false {
            log::info!("No task file at {:?} yet, starting with an empty list", path);
            return Ok(TaskList::new());
        }

        let content = match std::fs::read_to_string(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(content) => content,
        };

        let mut tasks = Vec::new();
        for (line_number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Task::from_store_string(line) {
                Ok(task) => tasks.push(task),
                Err(err) => {
                    log::warn!("Skipping corrupted line {} of {:?} ({}): {:?}", line_number + 1, path, err, line);
                },
            }
        }
        log::info!("Loaded {} task(s) from {:?}", tasks.len(), path);
        Ok(TaskList::from_tasks(tasks))
    }

    /// Overwrite the backing file with the current content of a list
    pub fn save(&self, list: &TaskList) -> Result<(), Box<dyn Error>> {
        self.write_lines(&list.to_store_strings())?;
        log::debug!("Saved {} task(s) to {:?}", list.len(), self.backing_file);
        Ok(())
    }

    /// Change the status of `expected`, that is stored at the given (1-based) line, leaving the other lines untouched.
    ///
    /// This fails if that line does not hold `expected` (whatever its status), e.g. because corrupted lines have been skipped at load time.
    pub fn update_status(&self, index: usize, expected: &Task, done: bool) -> Result<(), Box<dyn Error>> {
        let path = &self.backing_file;
        let content = std::fs::read_to_string(path)?;
        let mut lines: Vec<String> = content.lines().map(|l| l.to_string()).collect();

        let line = match index.checked_sub(1).and_then(|pos| lines.get_mut(pos)) {
            None => return Err(format!("No line {} in {:?}", index, path).into()),
            Some(line) => line,
        };
        let mut stored = Task::from_store_string(line)?;
        stored.set_status(expected.status());
        if &stored != expected {
            return Err(format!("Line {} of {:?} does not hold task {:?}", index, path, expected.name()).into());
        }
        *line = stored.to_update_string(status_flag(done));

        self.write_lines(&lines)
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), Box<dyn Error>> {
        let path = &self.backing_file;
        if let Some(folder) = path.parent() {
            if folder.as_os_str().is_empty() == false {
                std::fs::create_dir_all(folder)?;
            }
        }

        let mut content = lines.join("\n");
        if lines.is_empty() == false {
            content.push('\n');
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_folder_sanitizes_list_name() {
        let storage = Storage::in_folder(Path::new("data"), "work/home");
        assert_eq!(storage.path().parent(), Some(Path::new("data")));
        let file_name = storage.path().file_name().unwrap().to_str().unwrap();
        assert!(file_name.ends_with(".txt"));
        assert!(file_name.contains('/') == false);
    }

    #[test]
    fn test_missing_file_is_an_empty_list() {
        let folder = tempfile::tempdir().unwrap();
        let storage = Storage::new(&folder.path().join("nothing-here.txt"));
        assert_eq!(storage.load().unwrap(), TaskList::new());
    }
}
