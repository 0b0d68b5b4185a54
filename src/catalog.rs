use std::collections::HashMap;
use std::path::Path;

use moka::future::Cache;
use tokio::sync::OnceCell;
use tracing::info;

use crate::errors::SeedError;
use crate::models::center::Center;
use crate::models::dataset::ReferenceDataset;

/// Service centers available for booking.
///
/// Empty until seeded; once seeded it never changes.
pub struct CenterCatalog {
    seeded: OnceCell<Seeded>,
}

struct Seeded {
    centers: Vec<Center>,
    index: Cache<i32, Center>,
}

impl CenterCatalog {
    pub fn new() -> Self {
        CenterCatalog {
            seeded: OnceCell::new(),
        }
    }

    /// Loads the reference file at `path` unless the catalog is already
    /// populated. Returns the number of centers in the catalog.
    pub async fn seed_if_empty(&self, path: &Path) -> Result<usize, SeedError> {
        let seeded = self
            .seeded
            .get_or_try_init(|| async {
                let dataset = read_dataset(path)?;
                build(dataset).await
            })
            .await?;

        Ok(seeded.centers.len())
    }

    /// Same as [`seed_if_empty`](Self::seed_if_empty) for an already parsed dataset.
    pub async fn seed(&self, dataset: ReferenceDataset) -> Result<usize, SeedError> {
        let seeded = self.seeded.get_or_try_init(|| build(dataset)).await?;
        Ok(seeded.centers.len())
    }

    pub async fn find_by_id(&self, id: i32) -> Option<Center> {
        match self.seeded.get() {
            Some(seeded) => seeded.index.get(&id).await,
            None => None,
        }
    }

    /// All centers in the order they were seeded.
    pub fn list_all(&self) -> Vec<Center> {
        self.seeded
            .get()
            .map(|seeded| seeded.centers.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.seeded.get().map_or(0, |seeded| seeded.centers.len())
    }
}

impl Default for CenterCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn read_dataset(path: &Path) -> Result<ReferenceDataset, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// Types go in first so every center can resolve its type value.
async fn build(dataset: ReferenceDataset) -> Result<Seeded, SeedError> {
    let mut type_values: HashMap<i32, String> = HashMap::new();
    for center_type in &dataset.center_types {
        if type_values
            .insert(center_type.id, center_type.value.clone())
            .is_some()
        {
            return Err(SeedError::DuplicateCenterType(center_type.id));
        }
    }

    let mut centers: Vec<Center> = Vec::with_capacity(dataset.centers.len());
    for entry in dataset.centers {
        if centers.iter().any(|center| center.id == entry.id) {
            return Err(SeedError::DuplicateCenter(entry.id));
        }

        let center_type_value = type_values
            .get(&entry.center_type_id)
            .cloned()
            .ok_or(SeedError::UnknownCenterType {
                center_id: entry.id,
                center_type_id: entry.center_type_id,
            })?;

        centers.push(Center {
            id: entry.id,
            name: entry.name,
            street_address: entry.street_address,
            center_type_id: entry.center_type_id,
            center_type_value,
        });
    }

    let index = Cache::new(centers.len().max(1) as u64);
    for center in &centers {
        index.insert(center.id, center.clone()).await;
    }

    info!(
        "seeded catalog with {} center types and {} centers",
        dataset.center_types.len(),
        centers.len()
    );

    Ok(Seeded {
        centers,
        index,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::center::CenterType;
    use crate::models::dataset::CenterEntry;
    use rstest::{fixture, rstest};
    use std::io::Write;

    #[fixture]
    pub(crate) fn dataset() -> ReferenceDataset {
        ReferenceDataset {
            center_types: vec![
                CenterType {
                    id: 1,
                    value: "Marine Safety".to_string(),
                },
                CenterType {
                    id: 2,
                    value: "Civil Aviation".to_string(),
                },
            ],
            centers: vec![
                CenterEntry {
                    id: 10,
                    name: "Harbourfront".to_string(),
                    street_address: "200 Queens Quay W".to_string(),
                    center_type_id: 1,
                },
                CenterEntry {
                    id: 3,
                    name: "Airport".to_string(),
                    street_address: "6301 Silver Dart Dr".to_string(),
                    center_type_id: 2,
                },
            ],
        }
    }

    #[rstest]
    #[tokio::test]
    async fn seed_resolves_type_values(dataset: ReferenceDataset) {
        let catalog = CenterCatalog::new();
        assert_eq!(catalog.seed(dataset).await.unwrap(), 2);

        let center = catalog.find_by_id(3).await.unwrap();
        assert_eq!(center.name, "Airport");
        assert_eq!(center.center_type_id, 2);
        assert_eq!(center.center_type_value, "Civil Aviation");
        assert!(catalog.find_by_id(99).await.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_keeps_seed_order(dataset: ReferenceDataset) {
        let catalog = CenterCatalog::new();
        catalog.seed(dataset).await.unwrap();

        let ids: Vec<i32> = catalog.list_all().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![10, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn seeding_twice_does_not_duplicate(dataset: ReferenceDataset) {
        let catalog = CenterCatalog::new();
        catalog.seed(dataset.clone()).await.unwrap();
        let count = catalog.seed(dataset).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(catalog.list_all().len(), 2);
    }

    #[tokio::test]
    async fn empty_catalog_has_nothing() {
        let catalog = CenterCatalog::new();

        assert_eq!(catalog.len(), 0);
        assert!(catalog.list_all().is_empty());
        assert!(catalog.find_by_id(1).await.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_center_type_is_rejected(mut dataset: ReferenceDataset) {
        dataset.centers[1].center_type_id = 42;

        let catalog = CenterCatalog::new();
        let err = catalog.seed(dataset).await.unwrap_err();

        assert!(matches!(
            err,
            SeedError::UnknownCenterType {
                center_id: 3,
                center_type_id: 42
            }
        ));
        assert_eq!(catalog.len(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_center_is_rejected(mut dataset: ReferenceDataset) {
        dataset.centers[1].id = 10;

        let err = CenterCatalog::new().seed(dataset).await.unwrap_err();
        assert!(matches!(err, SeedError::DuplicateCenter(10)));
    }

    #[tokio::test]
    async fn seeds_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "centerTypes": [{{"id": 1, "value": "Rail Safety"}}],
                "centers": [{{"id": 5, "name": "Union", "streetAddress": "65 Front St W", "centerTypeId": 1}}]
            }}"#
        )
        .unwrap();

        let catalog = CenterCatalog::new();
        assert_eq!(catalog.seed_if_empty(file.path()).await.unwrap(), 1);
        assert_eq!(
            catalog.find_by_id(5).await.unwrap().center_type_value,
            "Rail Safety"
        );
    }

    #[tokio::test]
    async fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("centers.json");

        let err = CenterCatalog::new().seed_if_empty(&path).await.unwrap_err();
        assert!(matches!(err, SeedError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"centers": "#).unwrap();

        let err = CenterCatalog::new()
            .seed_if_empty(file.path())
            .await
            .unwrap_err();
        assert!(matches!(err, SeedError::Parse { .. }));
    }
}
