use contracts::domain::a004_payment::{CreatePaymentDto, Payment};

use crate::shared::api_client::{self, ApiError};

pub async fn create_payment(dto: &CreatePaymentDto) -> Result<Payment, ApiError> {
    api_client::post_json("/payments", dto).await
}
