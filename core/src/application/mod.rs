use crate::{
    domain::common::{MealbookConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::nutrition::OpenFoodFactsClient,
};

pub type MealbookService = Service<OpenFoodFactsClient>;

pub fn create_service(config: MealbookConfig) -> Result<MealbookService, CoreError> {
    let food_search_client = OpenFoodFactsClient::new(&config.upstream)?;

    Ok(Service::new(food_search_client))
}
