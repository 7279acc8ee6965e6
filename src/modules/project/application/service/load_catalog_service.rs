use tracing::info;

use crate::modules::project::application::domain::catalog::{
    Catalog, CatalogError, CatalogPolicy, CatalogViolation,
};
use crate::modules::project::application::ports::outgoing::catalog_source::{
    CatalogSource, CatalogSourceError,
};

#[derive(Debug, thiserror::Error)]
pub enum LoadCatalogError {
    #[error("Catalog source failed: {0}")]
    Source(CatalogSourceError),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// One-shot startup barrier: load, then validate. Nothing is served from a
/// catalog that failed either step.
pub async fn load_catalog<S>(source: &S, policy: &CatalogPolicy) -> Result<Catalog, LoadCatalogError>
where
    S: CatalogSource + ?Sized,
{
    info!("Loading catalog from {}", source.describe());

    let projects = source.load().await.map_err(|e| match e {
        // Unknown enum values and malformed records are definition defects.
        CatalogSourceError::Parse(err) => {
            LoadCatalogError::Invalid(CatalogError::InvalidCatalogDefinition {
                violations: vec![CatalogViolation::InvalidDefinition {
                    reason: err.to_string(),
                }],
            })
        }
        other => LoadCatalogError::Source(other),
    })?;

    Ok(Catalog::new(projects, policy)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::project::application::domain::entities::{Project, ProjectSize};
    use crate::tests::support::project_test_fixtures::{live_project, showcase_project};

    /* --------------------------------------------------
     * Mock CatalogSource
     * -------------------------------------------------- */

    enum MockOutcome {
        Projects(Vec<Project>),
        Json(&'static str),
        Io,
    }

    struct MockCatalogSource {
        outcome: MockOutcome,
    }

    #[async_trait]
    impl CatalogSource for MockCatalogSource {
        async fn load(&self) -> Result<Vec<Project>, CatalogSourceError> {
            match &self.outcome {
                MockOutcome::Projects(projects) => Ok(projects.clone()),
                MockOutcome::Json(raw) => Ok(serde_json::from_str(raw)?),
                MockOutcome::Io => Err(CatalogSourceError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "projects.json",
                ))),
            }
        }

        fn describe(&self) -> String {
            "mock".to_string()
        }
    }

    #[tokio::test]
    async fn load_catalog_success() {
        let source = MockCatalogSource {
            outcome: MockOutcome::Projects(vec![
                showcase_project("biddingwars", ProjectSize::Large),
                live_project("json2csv", ProjectSize::Small),
            ]),
        };

        let catalog = load_catalog(&source, &CatalogPolicy::default())
            .await
            .unwrap();

        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn load_catalog_rejects_invalid_projects() {
        let source = MockCatalogSource {
            outcome: MockOutcome::Projects(vec![
                showcase_project("dup", ProjectSize::Large),
                showcase_project("dup", ProjectSize::Small),
            ]),
        };

        let err = load_catalog(&source, &CatalogPolicy::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LoadCatalogError::Invalid(CatalogError::InvalidCatalogDefinition { .. })
        ));
    }

    #[tokio::test]
    async fn load_catalog_maps_unknown_size_to_invalid_definition() {
        let source = MockCatalogSource {
            outcome: MockOutcome::Json(
                r#"[{"id":"x","translations":{},"type":"live","size":"huge"}]"#,
            ),
        };

        let err = load_catalog(&source, &CatalogPolicy::default())
            .await
            .unwrap_err();

        match err {
            LoadCatalogError::Invalid(err) => {
                assert!(matches!(
                    err.violations(),
                    [CatalogViolation::InvalidDefinition { reason }] if reason.contains("huge")
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn load_catalog_keeps_io_errors_apart() {
        let source = MockCatalogSource {
            outcome: MockOutcome::Io,
        };

        let err = load_catalog(&source, &CatalogPolicy::default())
            .await
            .unwrap_err();

        assert!(matches!(err, LoadCatalogError::Source(CatalogSourceError::Io(_))));
    }
}
