use async_trait::async_trait;

use crate::modules::career::application::domain::entities::TimelineView;
use crate::modules::career::application::ports::incoming::use_cases::{
    ListTimelineError, ListTimelineUseCase,
};
use crate::modules::career::application::ports::outgoing::CareerQuery;

#[derive(Debug, Clone)]
pub struct ListTimelineService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTimelineService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTimelineUseCase for ListTimelineService<Q>
where
    Q: CareerQuery + Send + Sync,
{
    async fn execute(&self, limit: Option<u64>) -> Result<Vec<TimelineView>, ListTimelineError> {
        if limit == Some(0) {
            return Ok(Vec::new());
        }

        Ok(self.query.list_timeline(limit).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::sample_timeline;
    use crate::tests::support::query_mocks::MockCareerQuery;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn passes_limit_to_store() {
        let mut query = MockCareerQuery::new();
        query
            .expect_list_timeline()
            .with(eq(Some(5)))
            .times(1)
            .returning(|_| Ok(vec![sample_timeline(2024), sample_timeline(2022)]));

        let timeline = ListTimelineService::new(query).execute(Some(5)).await.unwrap();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].year, 2024);
    }

    #[tokio::test]
    async fn zero_limit_skips_store() {
        let mut query = MockCareerQuery::new();
        query.expect_list_timeline().times(0);

        let timeline = ListTimelineService::new(query).execute(Some(0)).await.unwrap();
        assert!(timeline.is_empty());
    }
}
