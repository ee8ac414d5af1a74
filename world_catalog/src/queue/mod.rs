//! Task-queue records as read by the enrichment UI.
//!
//! The queue itself lives elsewhere; these types only describe the records it
//! hands out and the read-only questions asked of them.

use serde::{Deserialize, Serialize};

use crate::entities::EntityId;

/// Lifecycle state of a queued enrichment task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Queued,
    Running,
    Complete,
    Failed,
}

impl TaskStatus {
    /// Still waiting for or undergoing generation.
    pub fn is_active(&self) -> bool {
        matches!(self, TaskStatus::Pending | TaskStatus::Queued | TaskStatus::Running)
    }

    /// Finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        !self.is_active()
    }
}

/// Kind of content a task generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskType {
    Description,
    Image,
    Chronicle,
    EraNarrative,
    RelationshipStory,
}

/// A single record from the task queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItem {
    pub entity_id: EntityId,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub status: TaskStatus,
}

impl QueueItem {
    /// Create a queue record.
    pub fn new(entity_id: EntityId, task_type: TaskType, status: TaskStatus) -> Self {
        Self {
            entity_id,
            task_type,
            status,
        }
    }
}

/// The active task of `task_type` for an entity, if one is in flight.
pub fn active_task_for<'a>(
    items: &'a [QueueItem],
    entity_id: &EntityId,
    task_type: TaskType,
) -> Option<&'a QueueItem> {
    items.iter().find(|item| {
        item.entity_id == *entity_id && item.task_type == task_type && item.status.is_active()
    })
}

/// All completed tasks for an entity, in queue order.
pub fn completed_tasks_for<'a>(items: &'a [QueueItem], entity_id: &EntityId) -> Vec<&'a QueueItem> {
    items
        .iter()
        .filter(|item| item.entity_id == *entity_id && item.status == TaskStatus::Complete)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> (EntityId, EntityId, Vec<QueueItem>) {
        let hero = EntityId::new("hero");
        let keep = EntityId::new("keep");
        let items = vec![
            QueueItem::new(hero.clone(), TaskType::Description, TaskStatus::Complete),
            QueueItem::new(hero.clone(), TaskType::Image, TaskStatus::Running),
            QueueItem::new(keep.clone(), TaskType::Image, TaskStatus::Failed),
            QueueItem::new(hero.clone(), TaskType::Chronicle, TaskStatus::Complete),
        ];
        (hero, keep, items)
    }

    #[test]
    fn test_status_classification() {
        assert!(TaskStatus::Pending.is_active());
        assert!(TaskStatus::Queued.is_active());
        assert!(TaskStatus::Running.is_active());
        assert!(TaskStatus::Complete.is_settled());
        assert!(TaskStatus::Failed.is_settled());
    }

    #[test]
    fn test_active_task_for() {
        let (hero, keep, items) = queue();
        assert!(active_task_for(&items, &hero, TaskType::Image).is_some());
        assert!(active_task_for(&items, &hero, TaskType::Description).is_none());
        assert!(active_task_for(&items, &keep, TaskType::Image).is_none());
    }

    #[test]
    fn test_completed_tasks_for() {
        let (hero, keep, items) = queue();
        let done: Vec<_> = completed_tasks_for(&items, &hero)
            .iter()
            .map(|i| i.task_type)
            .collect();
        assert_eq!(done, vec![TaskType::Description, TaskType::Chronicle]);
        assert!(completed_tasks_for(&items, &keep).is_empty());
    }

    #[test]
    fn test_queue_item_json_shape() {
        let item: QueueItem = serde_json::from_str(
            r#"{"entityId":"e1","type":"eraNarrative","status":"queued"}"#,
        )
        .unwrap();
        assert_eq!(item.task_type, TaskType::EraNarrative);
        assert_eq!(item.status, TaskStatus::Queued);
    }
}
