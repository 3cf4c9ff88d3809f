use crate::application::ports::clock::Clock;
use crate::application::ports::todo_gateway::TodoGateway;
use crate::domain::todos::kst::kst_day;
use crate::domain::todos::todo::Todo;

pub struct ListTodayTodos<'a, G: TodoGateway + ?Sized, C: Clock + ?Sized> {
    pub gateway: &'a G,
    pub clock: &'a C,
}

impl<'a, G: TodoGateway + ?Sized, C: Clock + ?Sized> ListTodayTodos<'a, G, C> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Todo>> {
        let day = kst_day(self.clock.now());
        self.gateway.list_for_day(day).await
    }
}
