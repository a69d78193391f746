use std::fs;
use std::io::{self, Read};
use std::path::Path;

use typeprune_core::{LoadError, TypeGraph};

#[derive(Debug, thiserror::Error)]
pub enum SchemaLoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("{path}: {source}")]
    Invalid { path: String, source: LoadError },
}

/// Load a schema document from a file, or from stdin when `path` is "-".
pub fn load_schema(path: &Path) -> Result<TypeGraph, SchemaLoadError> {
    let (label, json) = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(SchemaLoadError::Stdin)?;
        ("<stdin>".to_string(), buf)
    } else {
        let label = path.display().to_string();
        let json = fs::read_to_string(path).map_err(|source| SchemaLoadError::Read {
            path: label.clone(),
            source,
        })?;
        (label, json)
    };

    TypeGraph::from_json(&json).map_err(|source| SchemaLoadError::Invalid {
        path: label,
        source,
    })
}
