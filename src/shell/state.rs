use std::sync::Arc;

use crate::modules::tasks::adapters::in_memory::InMemoryTaskStore;
use crate::modules::tasks::service::TaskService;
use crate::modules::time_entries::adapters::in_memory::InMemoryTimeEntryStore;
use crate::modules::time_entries::service::TimeEntryService;
use crate::shared::infrastructure::identity_gate::IdentityGate;

#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityGate>,
    pub tasks: Arc<TaskService<InMemoryTaskStore>>,
    pub entries: Arc<TimeEntryService<InMemoryTaskStore, InMemoryTimeEntryStore>>,
}
