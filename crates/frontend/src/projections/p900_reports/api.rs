use contracts::projections::p900_reports::{ReportKind, ReportQuery, ReportRows};

use crate::shared::api_client::{self, ApiError};

pub async fn fetch_report(kind: ReportKind, query: &ReportQuery) -> Result<ReportRows, ApiError> {
    api_client::get_json_with_query(&format!("/reports/{}", kind.slug()), query).await
}
