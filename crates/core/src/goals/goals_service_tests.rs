#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::goals::{
        Goal, GoalRecurrence, GoalRepositoryTrait, GoalService, GoalServiceTrait, GoalUpdate,
        NewGoal,
    };
    use crate::tasks::{DailyTask, NewDailyTask, TaskRepositoryTrait};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    // --- Mock GoalRepository ---
    #[derive(Clone, Default)]
    struct MockGoalRepository {
        goals: Arc<Mutex<Vec<Goal>>>,
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
            Ok(self
                .goals
                .lock()
                .unwrap()
                .iter()
                .filter(|g| g.user_id == user_id)
                .cloned()
                .collect())
        }

        fn get_goal(&self, goal_id: &str) -> Result<Goal> {
            self.goals
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id == goal_id)
                .cloned()
                .ok_or_else(|| Error::Unexpected("Goal not found".to_string()))
        }

        async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
            let goal = Goal {
                id: new_goal.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                user_id: new_goal.user_id,
                title: new_goal.title,
                unit: new_goal.unit,
                recurrence: new_goal.recurrence,
                is_active: new_goal.is_active,
            };
            self.goals.lock().unwrap().push(goal.clone());
            Ok(goal)
        }

        async fn update_goal(&self, goal_update: GoalUpdate) -> Result<Goal> {
            let mut goals = self.goals.lock().unwrap();
            let goal = goals
                .iter_mut()
                .find(|g| g.id == goal_update.id)
                .ok_or_else(|| Error::Unexpected("Goal not found".to_string()))?;
            goal.title = goal_update.title;
            goal.unit = goal_update.unit;
            goal.is_active = goal_update.is_active;
            Ok(goal.clone())
        }

        async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
            let mut goals = self.goals.lock().unwrap();
            let before = goals.len();
            goals.retain(|g| g.id != goal_id_to_delete);
            Ok(before - goals.len())
        }
    }

    // --- Mock TaskRepository (only deletion matters here) ---
    #[derive(Clone, Default)]
    struct MockTaskRepository {
        tasks: Arc<Mutex<Vec<DailyTask>>>,
    }

    impl MockTaskRepository {
        fn add_task(&self, goal_id: &str, day: u32) {
            self.tasks.lock().unwrap().push(DailyTask {
                id: Uuid::new_v4().to_string(),
                goal_id: goal_id.to_string(),
                user_id: "u1".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
                target_amount: 1,
                completed_amount: 0,
                is_completed: false,
                carried_over_from: None,
            });
        }
    }

    #[async_trait]
    impl TaskRepositoryTrait for MockTaskRepository {
        fn load_tasks_for_user(&self, _user_id: &str) -> Result<Vec<DailyTask>> {
            Ok(self.tasks.lock().unwrap().clone())
        }

        fn load_tasks_for_goal(&self, goal_id: &str) -> Result<Vec<DailyTask>> {
            Ok(self
                .tasks
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.goal_id == goal_id)
                .cloned()
                .collect())
        }

        fn load_tasks_for_date(&self, _user_id: &str, _date: NaiveDate) -> Result<Vec<DailyTask>> {
            unimplemented!()
        }

        fn get_task(&self, _task_id: &str) -> Result<DailyTask> {
            unimplemented!()
        }

        async fn insert_tasks(&self, _drafts: Vec<NewDailyTask>) -> Result<Vec<DailyTask>> {
            unimplemented!()
        }

        async fn update_task_progress(
            &self,
            _task_id: &str,
            _completed_amount: i64,
            _is_completed: bool,
        ) -> Result<DailyTask> {
            unimplemented!()
        }

        async fn delete_tasks_for_goal(&self, goal_id: &str) -> Result<usize> {
            let mut tasks = self.tasks.lock().unwrap();
            let before = tasks.len();
            tasks.retain(|t| t.goal_id != goal_id);
            Ok(before - tasks.len())
        }
    }

    fn new_goal(title: &str, is_active: bool) -> NewGoal {
        NewGoal {
            id: None,
            user_id: "u1".to_string(),
            title: title.to_string(),
            unit: "pages".to_string(),
            recurrence: GoalRecurrence::Daily { daily_amount: 1 },
            is_active,
        }
    }

    fn setup() -> (Arc<MockGoalRepository>, Arc<MockTaskRepository>, GoalService) {
        let goal_repo = Arc::new(MockGoalRepository::default());
        let task_repo = Arc::new(MockTaskRepository::default());
        let service = GoalService::new(goal_repo.clone(), task_repo.clone());
        (goal_repo, task_repo, service)
    }

    #[tokio::test]
    async fn create_and_fetch_goal() {
        let (_goal_repo, _task_repo, service) = setup();
        let created = service.create_goal(new_goal("Read Quran", true)).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = service.get_goal(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn active_filter_excludes_deactivated_goals() {
        let (_goal_repo, _task_repo, service) = setup();
        let active = service.create_goal(new_goal("Read Quran", true)).await.unwrap();
        service.create_goal(new_goal("Charity", false)).await.unwrap();

        let all = service.get_goals("u1").unwrap();
        assert_eq!(all.len(), 2);

        let active_only = service.get_active_goals("u1").unwrap();
        assert_eq!(active_only.len(), 1);
        assert_eq!(active_only[0].id, active.id);

        // deactivating is a plain field update
        service
            .update_goal(GoalUpdate {
                id: active.id,
                title: "Read Quran".to_string(),
                unit: "pages".to_string(),
                is_active: false,
            })
            .await
            .unwrap();
        assert!(service.get_active_goals("u1").unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_a_goal_removes_its_tasks_first() {
        let (_goal_repo, task_repo, service) = setup();
        let goal = service.create_goal(new_goal("Read Quran", true)).await.unwrap();
        let other = service.create_goal(new_goal("Charity", true)).await.unwrap();
        task_repo.add_task(&goal.id, 1);
        task_repo.add_task(&goal.id, 2);
        task_repo.add_task(&other.id, 1);

        let deleted = service.delete_goal(goal.id.clone()).await.unwrap();
        assert_eq!(deleted, 1);

        assert!(service.get_goal(&goal.id).is_err());
        assert!(task_repo.load_tasks_for_goal(&goal.id).unwrap().is_empty());
        // the other goal's tasks survive
        assert_eq!(task_repo.load_tasks_for_goal(&other.id).unwrap().len(), 1);
    }
}
