//! Counter Controller

use gpui::App;
use tracing::info;

use crate::app::entities::AppEntities;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// Counter page controller
#[derive(Clone)]
pub struct CounterController {
    entities: AppEntities,
}

impl CounterController {
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Increase the shared counter by one and log the new value
    pub fn increment(&self, cx: &mut App) -> u64 {
        let value = self.entities.counter.update(cx, |counter, cx| {
            let value = counter.increment();
            cx.notify();
            value
        });

        let message = format!("Counter incremented to: {value}");
        info!("{}", message);
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(message));
        }
        value
    }
}
