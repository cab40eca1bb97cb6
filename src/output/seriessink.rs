use std::fs::{
    self,
    File
};
use std::io::BufWriter;
use std::path::{
    Path,
    PathBuf
};

use serde::Serialize;
use thiserror::Error;

use crate::output::timestamp::{
    get_timestamp,
    TimestampStyle
};

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// 將資料序列存成 JSON 檔，檔名可加上時間戳記前綴。
///
/// `enabled` 為 false 時不寫檔，`save` 回傳 `None`。
#[derive(Debug, Clone)]
pub struct SeriesSink {
    path: PathBuf,
    add_time: bool,
    enabled: bool,
    pretty: bool
}

impl SeriesSink {
    pub fn new(path: impl Into<PathBuf>) -> SeriesSink {
        SeriesSink {
            path: path.into(),
            add_time: true,
            enabled: true,
            pretty: true
        }
    }

    pub fn with_add_time(mut self, add_time: bool) -> SeriesSink {
        self.add_time = add_time;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> SeriesSink {
        self.enabled = enabled;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> SeriesSink {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self, filename: &str) -> String {
        if self.add_time {
            format!("{}_{}.json", get_timestamp(TimestampStyle::DateTime), filename)
        } else {
            format!("{}.json", filename)
        }
    }

    pub fn save<T>(&self, data: &T, filename: &str) -> Result<Option<PathBuf>, OutputError>
    where
        T: Serialize + ?Sized,
    {
        if !self.enabled {
            log::debug!("output disabled, '{}' not saved", filename);
            return Ok(None);
        }

        fs::create_dir_all(&self.path)?;
        let file_path = self.path.join(self.file_name(filename));
        let writer = BufWriter::new(File::create(&file_path)?);
        if self.pretty {
            serde_json::to_writer_pretty(writer, data)?;
        } else {
            serde_json::to_writer(writer, data)?;
        }
        log::info!("saved {}", file_path.display());
        Ok(Some(file_path))
    }
}
