use anyhow::{Context, Result};
use polyring::{Point, Ring, VertexId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk polygon: `{"points": [[x, y], ...]}`, counterclockwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolygonFile {
    pub points: Vec<[i32; 2]>,
}

impl PolygonFile {
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }

    /// Ring in file order plus the handle of every input index.
    pub fn to_ring(&self) -> Result<(Ring, Vec<VertexId>)> {
        let mut ring: Ring = Ring::new();
        let ids = self
            .points
            .iter()
            .map(|&[x, y]| ring.push(Point::new(x, y)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((ring, ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_in_nested_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/poly.json");
        let file = PolygonFile {
            points: vec![[0, 0], [4, 0], [0, 4]],
        };
        file.write(&path).unwrap();
        assert_eq!(PolygonFile::read(&path).unwrap(), file);
    }

    #[test]
    fn malformed_input_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"points": [[0, 0], [1]]}"#).unwrap();
        let err = PolygonFile::read(&path).unwrap_err();
        assert!(format!("{err}").contains("bad.json"));
        assert!(PolygonFile::read(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn ring_keeps_file_order() {
        let file = PolygonFile {
            points: vec![[0, 0], [4, 0], [4, 4], [2, 1], [0, 4]],
        };
        let (ring, ids) = file.to_ring().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.next(ids[4]).unwrap(), ids[0]);
        assert_eq!(PolygonFile::from_points(&ring.points()), file);
    }
}
