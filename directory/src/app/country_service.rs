//! Country service
//!
//! Adds and looks up countries.

use std::sync::Arc;

use crate::app::dto::{CountryAddRequest, CountryResponse};
use crate::domain::entities::CountryId;
use crate::domain::ports::CountryRepository;
use crate::error::AppError;

/// Service for managing countries
pub struct CountriesService<CR>
where
    CR: CountryRepository,
{
    countries: Arc<CR>,
}

impl<CR> CountriesService<CR>
where
    CR: CountryRepository,
{
    pub fn new(countries: Arc<CR>) -> Self {
        Self { countries }
    }

    /// Add a new country
    ///
    /// Fails when the request is missing, the name is missing or empty, or a
    /// country with the same name (ignoring case) already exists.
    pub async fn add_country(
        &self,
        request: Option<CountryAddRequest>,
    ) -> Result<CountryResponse, AppError> {
        let request = request
            .ok_or_else(|| AppError::MissingInput("CountryAddRequest cannot be null".to_string()))?;

        let new_country = request.to_new_country()?;
        let country = self.countries.create(&new_country).await?;
        tracing::debug!(country_id = %country.id, name = %country.name, "Added country");

        Ok(CountryResponse::from(&country))
    }

    /// All countries in insertion order
    pub async fn get_all_countries(&self) -> Result<Vec<CountryResponse>, AppError> {
        let countries = self.countries.find_all().await?;
        Ok(countries.iter().map(CountryResponse::from).collect())
    }

    /// Find a country by ID
    ///
    /// A missing or nil ID yields `None`.
    pub async fn get_country_by_country_id(
        &self,
        country_id: Option<CountryId>,
    ) -> Result<Option<CountryResponse>, AppError> {
        let Some(country_id) = country_id.filter(|id| !id.is_nil()) else {
            return Ok(None);
        };

        let country = self.countries.find_by_id(&country_id).await?;
        Ok(country.as_ref().map(CountryResponse::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCountryRepository;
    use crate::error::DomainError;
    use crate::test_utils::{test_country, FailingCountryRepository};

    fn create_service(repo: InMemoryCountryRepository) -> CountriesService<InMemoryCountryRepository> {
        CountriesService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn add_country_missing_request() {
        let service = create_service(InMemoryCountryRepository::new());

        let result = service.add_country(None).await;

        assert!(matches!(result, Err(AppError::MissingInput(_))));
    }

    #[tokio::test]
    async fn add_country_missing_name() {
        let service = create_service(InMemoryCountryRepository::new());

        let result = service.add_country(Some(CountryAddRequest::default())).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
    }

    #[tokio::test]
    async fn add_country_empty_name() {
        let service = create_service(InMemoryCountryRepository::new());

        let result = service.add_country(Some(CountryAddRequest::new(""))).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Validation(_)))
        ));
        assert!(service.get_all_countries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn add_country_duplicate_name() {
        let service = create_service(InMemoryCountryRepository::new());

        service
            .add_country(Some(CountryAddRequest::new("Egypt")))
            .await
            .unwrap();
        let result = service.add_country(Some(CountryAddRequest::new("egypt"))).await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::AlreadyExists(_)))
        ));
        assert_eq!(service.get_all_countries().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn add_country_valid() {
        let service = create_service(InMemoryCountryRepository::new());

        let response = service
            .add_country(Some(CountryAddRequest::new("Egypt")))
            .await
            .unwrap();
        let all = service.get_all_countries().await.unwrap();

        assert_eq!(response.country_name, "Egypt");
        assert!(!response.country_id.is_nil());
        assert!(all.contains(&response));
    }

    #[tokio::test]
    async fn get_all_countries_empty_by_default() {
        let service = create_service(InMemoryCountryRepository::new());

        assert!(service.get_all_countries().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_all_countries_in_insertion_order() {
        let service = create_service(InMemoryCountryRepository::new());

        let mut added = Vec::new();
        for name in ["US", "EG"] {
            added.push(
                service
                    .add_country(Some(CountryAddRequest::new(name)))
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(service.get_all_countries().await.unwrap(), added);
    }

    #[tokio::test]
    async fn get_country_by_country_id_missing_id() {
        let service = create_service(InMemoryCountryRepository::new().with_country(test_country()));

        assert!(service.get_country_by_country_id(None).await.unwrap().is_none());
        assert!(service
            .get_country_by_country_id(Some(CountryId::nil()))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn get_country_by_country_id_not_found() {
        let service = create_service(InMemoryCountryRepository::new().with_country(test_country()));

        let result = service
            .get_country_by_country_id(Some(CountryId::new()))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn get_country_by_country_id_found() {
        let service = create_service(InMemoryCountryRepository::new());

        let added = service
            .add_country(Some(CountryAddRequest::new("Egypt")))
            .await
            .unwrap();
        let found = service
            .get_country_by_country_id(Some(added.country_id))
            .await
            .unwrap();

        assert_eq!(found, Some(added));
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let service = CountriesService::new(Arc::new(FailingCountryRepository));

        let result = service.add_country(Some(CountryAddRequest::new("Egypt"))).await;
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::Internal(_)))
        ));

        assert!(service.get_all_countries().await.is_err());
    }
}
