use super::IJobRepo;
use chrono::{DateTime, Utc};
use relance_domain::{Job, ID};
use std::sync::Mutex;

pub struct InMemoryJobRepo {
    jobs: Mutex<Vec<Job>>,
}

impl InMemoryJobRepo {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryJobRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IJobRepo for InMemoryJobRepo {
    async fn insert(&self, job: &Job) -> anyhow::Result<()> {
        let mut jobs = self.jobs.lock().unwrap();
        jobs.retain(|j| j.id != job.id);
        jobs.push(job.clone());
        Ok(())
    }

    async fn find(&self, job_id: &ID) -> Option<Job> {
        let jobs = self.jobs.lock().unwrap();
        jobs.iter().find(|j| &j.id == job_id).cloned()
    }

    async fn delete(&self, job_id: &ID) -> Option<Job> {
        let mut jobs = self.jobs.lock().unwrap();
        let pos = jobs.iter().position(|j| &j.id == job_id)?;
        Some(jobs.remove(pos))
    }

    async fn find_all(&self) -> Vec<Job> {
        self.jobs.lock().unwrap().clone()
    }

    async fn find_due(&self, now: DateTime<Utc>) -> Vec<Job> {
        let jobs = self.jobs.lock().unwrap();
        jobs.iter().filter(|j| j.fire_at <= now).cloned().collect()
    }

    async fn next_fire_at(&self) -> Option<DateTime<Utc>> {
        let jobs = self.jobs.lock().unwrap();
        jobs.iter().map(|j| j.fire_at).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use relance_domain::Reminder;

    fn job(id: &str, fire_in: Duration) -> Job {
        Job::new(
            id.parse().unwrap(),
            Reminder {
                text: "ce soir !".to_string(),
                fire_at: Utc::now() + fire_in,
                image: None,
                reply_to: None,
                child: None,
            },
        )
    }

    #[tokio::test]
    async fn roundtrips_and_deletes() {
        let repo = InMemoryJobRepo::new();
        let job = job("r1", Duration::hours(1));

        repo.insert(&job).await.unwrap();
        assert_eq!(repo.find(&job.id).await, Some(job.clone()));

        assert_eq!(repo.delete(&job.id).await, Some(job.clone()));
        assert_eq!(repo.find(&job.id).await, None);
        assert_eq!(repo.delete(&job.id).await, None);
    }

    #[tokio::test]
    async fn insert_overwrites_same_id() {
        let repo = InMemoryJobRepo::new();
        let first = job("r1", Duration::hours(1));
        let mut second = job("r1", Duration::hours(2));
        second.payload.text = "demain !".to_string();

        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();

        assert_eq!(repo.find_all().await.len(), 1);
        assert_eq!(repo.find(&first.id).await, Some(second));
    }

    #[tokio::test]
    async fn selects_due_jobs_and_next_fire_time() {
        let repo = InMemoryJobRepo::new();
        let due = job("due", Duration::seconds(-5));
        let pending = job("pending", Duration::hours(1));
        repo.insert(&due).await.unwrap();
        repo.insert(&pending).await.unwrap();

        let found = repo.find_due(Utc::now()).await;
        assert_eq!(found, vec![due.clone()]);

        assert_eq!(repo.next_fire_at().await, Some(due.fire_at));
    }
}
