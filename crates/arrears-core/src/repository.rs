use async_trait::async_trait;

use crate::title::Title;
use crate::ArrearsResult;

/// Supplies the complete title snapshot. One call per query, no pagination;
/// the returned list is an immutable snapshot owned by the caller.
///
/// Failures surface as [`crate::ArrearsError::DataSource`] so callers can
/// tell "no overdue titles" apart from "data unavailable".
#[async_trait]
pub trait TitleRepository: Send + Sync {
    async fn list_all(&self) -> ArrearsResult<Vec<Title>>;
}
