// File loading for the CLI: record sets, item catalogs, directory dumps.
// The encoders in ark-core never touch the filesystem; everything that can
// fail on I/O or parsing lives here and reports a `CliError`.
use ark_core::{EncodeOpts, ItemCatalogData, Lookups, RecordSet, ValueSink, write_records};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: invalid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("walking {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("unknown map \"{name}\" (known: {known})")]
    UnknownMap { name: String, known: String },
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) | CliError::Io { .. } | CliError::Walk { .. } => 2,
            CliError::Json { .. } => 3,
            CliError::UnknownMap { .. } => 4,
        }
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_records(path: &Path) -> Result<RecordSet, CliError> {
    let data = read(path)?;
    let records: RecordSet = serde_json::from_str(&data).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        creatures = records.creatures.len(),
        items = records.items.len(),
        "loaded record file"
    );
    Ok(records)
}

pub fn load_catalog(path: &Path) -> Result<ItemCatalogData, CliError> {
    let data = read(path)?;
    let catalog = ItemCatalogData::from_json_str(&data).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), entries = catalog.len(), "loaded item catalog");
    Ok(catalog)
}

/// All `*.json` files below `dir`, sorted by path.
pub fn find_record_files(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| CliError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let p = entry.path();
        if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("json") {
            out.push(p.to_path_buf());
        }
    }
    out.sort();
    Ok(out)
}

fn encode_file(
    path: &Path,
    lookups: Lookups<'_>,
    opts: EncodeOpts,
    game_time: Option<f64>,
) -> Result<Value, CliError> {
    let mut records = load_records(path)?;
    if game_time.is_some() {
        records.game_time = game_time;
    }
    let mut sink = ValueSink::new();
    write_records(&mut sink, &records, lookups, opts, None);
    Ok(sink.into_value())
}

/// Encodes one record file, or every record file below a directory as a map
/// keyed by path relative to it. Files that fail in a directory dump become
/// `{"$error": "..."}` entries instead of aborting the dump.
pub fn dump_path(
    path: &Path,
    lookups: Lookups<'_>,
    opts: EncodeOpts,
    game_time: Option<f64>,
) -> Result<Value, CliError> {
    if path.is_file() {
        return encode_file(path, lookups, opts, game_time);
    }
    if !path.is_dir() {
        return Err(CliError::NotFound(path.to_path_buf()));
    }

    let mut map = Map::new();
    for f in find_record_files(path)? {
        let name = f
            .strip_prefix(path)
            .unwrap_or(&f)
            .to_string_lossy()
            .replace('\\', "/");
        let value = match encode_file(&f, lookups, opts, game_time) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(file = %f.display(), error = %e, "skipping record file");
                json!({ "$error": e.to_string() })
            }
        };
        map.insert(name, value);
    }
    Ok(Value::Object(map))
}
