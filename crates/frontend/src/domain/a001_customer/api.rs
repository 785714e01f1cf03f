use contracts::domain::a001_customer::{
    CreateCustomerDto, Customer, CustomerListResponse, CustomerQuery,
};
use contracts::shared::pagination::PageRequest;

use crate::shared::api_client::{self, ApiError};

pub async fn fetch_customers(
    search: &str,
    page: PageRequest,
) -> Result<CustomerListResponse, ApiError> {
    api_client::get_json_with_query("/customers", &CustomerQuery::new(search, page)).await
}

/// Envia o formulário já normalizado (sem máscaras).
pub async fn create_customer(dto: &CreateCustomerDto) -> Result<Customer, ApiError> {
    api_client::post_json("/customers", &dto.normalized()).await
}
