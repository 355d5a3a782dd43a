//! Room-keyed game persistence: one `<room>.json` file per game.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use log::debug;

use crate::engine::EngineRecord;

pub struct RoomStore {
    dir: PathBuf,
}

impl RoomStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, room: &str) -> Result<PathBuf> {
        if room.is_empty() || room.contains(['/', '\\']) || room == ".." || room == "." {
            bail!("invalid room name {:?}", room);
        }
        Ok(self.dir.join(format!("{}.json", room)))
    }

    pub fn exists(&self, room: &str) -> Result<bool> {
        Ok(self.path(room)?.is_file())
    }

    /// Writes the record, replacing whatever the room held before.
    pub fn save(&self, room: &str, record: &EngineRecord) -> Result<()> {
        let path = self.path(room)?;
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        debug!("saved room {} to {}", room, path.display());
        Ok(())
    }

    pub fn load(&self, room: &str) -> Result<EngineRecord> {
        let path = self.path(room)?;
        let json =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let record = serde_json::from_str(&json)
            .with_context(|| format!("parsing game state in {}", path.display()))?;
        debug!("loaded room {} from {}", room, path.display());
        Ok(record)
    }

    pub fn remove(&self, room: &str) -> Result<()> {
        let path = self.path(room)?;
        fs::remove_file(&path).with_context(|| format!("removing {}", path.display()))
    }
}
