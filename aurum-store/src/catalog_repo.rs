use async_trait::async_trait;
use aurum_catalog::{CatalogError, CatalogRepository, RawProduct};
use std::path::{Path, PathBuf};

/// Catalog backed by a JSON array on disk, re-read on every load
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogRepository for JsonFileCatalog {
    async fn load_products(&self) -> Result<Vec<RawProduct>, CatalogError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let products: Vec<RawProduct> = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded {} products from {}", products.len(), self.path.display());
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"[
        {
            "name": "Engagement Ring 1",
            "popularityScore": 0.85,
            "weight": 2.1,
            "images": {
                "yellow": "https://cdn.example.com/ring1-yellow.jpg",
                "rose": "https://cdn.example.com/ring1-rose.jpg",
                "white": "https://cdn.example.com/ring1-white.jpg"
            }
        },
        {
            "name": "Engagement Ring 2",
            "popularityScore": 0.51,
            "weight": 3.4,
            "images": {
                "yellow": "https://cdn.example.com/ring2-yellow.jpg",
                "rose": "https://cdn.example.com/ring2-rose.jpg",
                "white": "https://cdn.example.com/ring2-white.jpg"
            }
        }
    ]"#;

    fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_loads_records_in_file_order() {
        let file = write_catalog(CATALOG);
        let catalog = JsonFileCatalog::new(file.path());

        let products = catalog.load_products().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Engagement Ring 1");
        assert_eq!(products[1].weight, 3.4);
    }

    #[tokio::test]
    async fn test_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JsonFileCatalog::new(dir.path().join("products.json"));

        let err = catalog.load_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unreadable(_)));
    }

    #[tokio::test]
    async fn test_bad_json_is_malformed() {
        let file = write_catalog(r#"[{"name": "Broken", "weight": "heavy"}]"#);
        let catalog = JsonFileCatalog::new(file.path());

        let err = catalog.load_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_rereads_after_change() {
        let file = write_catalog("[]");
        let catalog = JsonFileCatalog::new(file.path());
        assert!(catalog.load_products().await.unwrap().is_empty());

        std::fs::write(file.path(), CATALOG).unwrap();
        assert_eq!(catalog.load_products().await.unwrap().len(), 2);
    }
}
