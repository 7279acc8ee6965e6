use crate::modules::project::application::domain::ordering::technologies_used;
use crate::modules::project::application::ports::incoming::use_cases::GetTechnologiesUseCase;
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

pub struct GetTechnologiesService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetTechnologiesService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

impl<Q> GetTechnologiesUseCase for GetTechnologiesService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    fn execute(&self) -> Vec<String> {
        technologies_used(self.query.all()).into_iter().collect()
    }
}
