//! Loading resources from YAML and JSON files.
//!
//! A YAML file may hold several documents separated by `---` lines. Each
//! document that names a known `apiVersion`/`kind` becomes one [`Instance`]
//! whose origin points at the document's first line and carries the line
//! of every field. JSON files hold a single document and are not
//! line-mapped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_yaml::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::analysis::Snapshot;
use crate::error::{MeshlintError, Result};
use crate::resource::{
    ClusterId, ConfigRecord, FieldsMap, FullName, Instance, Namespace, ObjectMetadata, Schemas,
    Version,
};

use super::fields::build_fields_map;
use super::kube::KubeOrigin;
use super::position::Position;

const EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Reads manifests from disk into a [`Snapshot`].
#[derive(Debug, Clone)]
pub struct FileSource {
    schemas: &'static Schemas,
    default_namespace: Namespace,
    cluster: ClusterId,
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(Namespace::new("default"))
    }
}

/// One YAML document and the file line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Document {
    text: String,
    first_line: usize,
}

impl FileSource {
    /// Create a source that places namespaced resources without a namespace
    /// into `default_namespace`.
    pub fn new(default_namespace: Namespace) -> Self {
        Self {
            schemas: Schemas::builtin(),
            default_namespace,
            cluster: ClusterId::default(),
        }
    }

    /// Tag every loaded resource with `cluster`.
    pub fn with_cluster(mut self, cluster: ClusterId) -> Self {
        self.cluster = cluster;
        self
    }

    /// Load every manifest under `paths`.
    ///
    /// Directories are walked recursively in name order and only files with
    /// a `.yaml`, `.yml` or `.json` extension are read from them. Files named
    /// directly are always read.
    pub fn load(&self, paths: &[PathBuf]) -> Result<Snapshot> {
        let mut snapshot = Snapshot::new();
        for file in collect_files(paths)? {
            self.load_file(&file, &mut snapshot)?;
        }
        info!(
            resources = snapshot.len(),
            "Loaded resources from {} path(s)",
            paths.len()
        );
        Ok(snapshot)
    }

    /// Load one file into `snapshot`. Returns the number of resources added.
    pub fn load_file(&self, path: &Path, snapshot: &mut Snapshot) -> Result<usize> {
        let content = fs::read_to_string(path).map_err(|e| MeshlintError::FileParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.load_str(&content, path, snapshot)
    }

    /// Load manifests from `content` as if read from `path`.
    pub fn load_str(&self, content: &str, path: &Path, snapshot: &mut Snapshot) -> Result<usize> {
        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        let documents = if is_json {
            vec![Document {
                text: content.to_string(),
                first_line: 1,
            }]
        } else {
            split_documents(content)
        };

        let mut added = 0;
        for doc in documents.iter().filter(|d| !is_blank(&d.text)) {
            if let Some(instance) = self.translate(doc, path, !is_json)? {
                snapshot.insert(instance)?;
                added += 1;
            }
        }
        debug!(path = %path.display(), resources = added, "Loaded file");
        Ok(added)
    }

    fn translate(&self, doc: &Document, path: &Path, track_fields: bool) -> Result<Option<Instance>> {
        let parse_error = |message: String| MeshlintError::FileParse {
            path: path.to_path_buf(),
            message,
        };

        let value: Value = serde_yaml::from_str(&doc.text)
            .map_err(|e| parse_error(format!("document at line {}: {}", doc.first_line, e)))?;
        if value.is_null() {
            return Ok(None);
        }
        if !value.is_mapping() {
            return Err(parse_error(format!(
                "document at line {} is not a mapping",
                doc.first_line
            )));
        }

        let api_version = required_str(&value, "apiVersion")
            .ok_or_else(|| parse_error(format!("document at line {} has no apiVersion", doc.first_line)))?;
        let kind = required_str(&value, "kind")
            .ok_or_else(|| parse_error(format!("document at line {} has no kind", doc.first_line)))?;

        let Some(schema) = self.schemas.find_by_kind(api_version, kind) else {
            debug!(api_version, kind, path = %path.display(), "Skipping unknown resource type");
            return Ok(None);
        };

        let mut meta: ObjectMetadata = match value.get("metadata") {
            Some(m) => serde_yaml::from_value(m.clone())
                .map_err(|e| parse_error(format!("{} metadata: {}", kind, e)))?,
            None => ObjectMetadata::default(),
        };
        if meta.name.is_empty() {
            return Err(parse_error(format!(
                "{} at line {} has no metadata.name",
                kind, doc.first_line
            )));
        }
        if schema.cluster_scoped {
            meta.namespace.clear();
        } else if meta.namespace.is_empty() {
            meta.namespace = self.default_namespace.as_str().to_string();
        }
        if meta.resource_version.is_empty() {
            meta.resource_version = content_version(&doc.text);
        }

        let fields_map = if track_fields {
            build_fields_map(&doc.text, doc.first_line).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Could not map field lines");
                FieldsMap::new()
            })
        } else {
            FieldsMap::new()
        };

        let full_name = FullName::new(meta.namespace.as_str(), meta.name.as_str());
        let origin = KubeOrigin::new(schema.gvk, full_name)
            .with_reference(Position::new(
                path.display().to_string(),
                resource_line(doc),
            ))
            .with_fields_map(fields_map)
            .with_version(Version::new(meta.resource_version.as_str()))
            .with_cluster(self.cluster.clone());

        let record = ConfigRecord {
            meta,
            spec: value.get("spec").cloned().unwrap_or(Value::Null),
        };
        let instance = Instance::from_config(&record, schema, Arc::new(origin))
            .map_err(|e| parse_error(e.to_string()))?;
        Ok(Some(instance))
    }
}

fn required_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn content_version(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

fn is_blank(text: &str) -> bool {
    text.lines().all(|l| {
        let t = l.trim();
        t.is_empty() || t.starts_with('#')
    })
}

// First line of the document that holds content.
fn resource_line(doc: &Document) -> usize {
    doc.text
        .lines()
        .position(|l| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .map(|i| doc.first_line + i)
        .unwrap_or(doc.first_line)
}

/// The text after a `---` or `...` marker, or `None` if `line` is not one.
fn marker_rest<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if rest.is_empty() || rest.starts_with([' ', '\t']) {
        Some(rest.trim())
    } else {
        None
    }
}

fn split_documents(content: &str) -> Vec<Document> {
    let mut documents = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut first_line = 1;

    for (i, line) in content.lines().enumerate() {
        if let Some(rest) = marker_rest(line, "---") {
            documents.push(Document {
                text: current.join("\n"),
                first_line,
            });
            current.clear();
            // Content after the marker (e.g. `--- !tag`) opens the next document.
            if rest.is_empty() || rest.starts_with('#') {
                first_line = i + 2;
            } else {
                first_line = i + 1;
                current.push(rest);
            }
            continue;
        }
        if marker_rest(line, "...").is_some() {
            documents.push(Document {
                text: current.join("\n"),
                first_line,
            });
            current.clear();
            first_line = i + 2;
            continue;
        }
        current.push(line);
    }
    documents.push(Document {
        text: current.join("\n"),
        first_line,
    });
    documents
}

fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut files)?;
        } else if path.exists() {
            files.push(path.clone());
        } else {
            return Err(MeshlintError::FileParse {
                path: path.clone(),
                message: "no such file or directory".to_string(),
            });
        }
    }
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let read_error = |e: std::io::Error| MeshlintError::FileParse {
        path: dir.to_path_buf(),
        message: e.to_string(),
    };
    let mut entries = fs::read_dir(dir)
        .map_err(read_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_error)?;
    entries.sort();

    for entry in entries {
        if entry.is_dir() {
            walk_dir(&entry, files)?;
        } else if entry
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| EXTENSIONS.contains(&ext))
        {
            files.push(entry);
        }
    }
    Ok(())
}
